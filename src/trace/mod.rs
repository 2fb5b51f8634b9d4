mod formatter;

pub use formatter::TableFormatter;
