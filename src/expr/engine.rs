use super::expression::Expression;
use crate::error::ExpressionError;
use ahash::AHashMap;

/// Evaluates an expression against a set of numeric variable bindings.
pub struct ExpressionEngine<'a> {
    bindings: &'a AHashMap<String, f64>,
}

impl<'a> ExpressionEngine<'a> {
    pub fn new(bindings: &'a AHashMap<String, f64>) -> Self {
        Self { bindings }
    }

    /// Evaluates the expression, rejecting results that are not finite.
    pub fn evaluate(&self, expr: &Expression) -> Result<f64, ExpressionError> {
        let value = self.evaluate_recursive(expr)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExpressionError::NonFiniteResult)
        }
    }

    fn evaluate_recursive(&self, expr: &Expression) -> Result<f64, ExpressionError> {
        match expr {
            Expression::Sum(l, r) => Ok(self.evaluate_recursive(l)? + self.evaluate_recursive(r)?),
            Expression::Subtract(l, r) => {
                Ok(self.evaluate_recursive(l)? - self.evaluate_recursive(r)?)
            }
            Expression::Multiply(l, r) => {
                Ok(self.evaluate_recursive(l)? * self.evaluate_recursive(r)?)
            }
            Expression::Divide(l, r) => {
                let numerator = self.evaluate_recursive(l)?;
                let denominator = self.evaluate_recursive(r)?;
                if denominator == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                Ok(numerator / denominator)
            }
            Expression::Negate(v) => Ok(-self.evaluate_recursive(v)?),
            Expression::Literal(n) => Ok(*n),
            Expression::Variable(name) => self
                .bindings
                .get(name)
                .copied()
                .ok_or_else(|| ExpressionError::UnknownVariable(name.clone())),
        }
    }
}
