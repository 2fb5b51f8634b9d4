pub mod column;
pub mod labels;
pub mod row;

pub use column::*;
pub use labels::*;
pub use row::*;
