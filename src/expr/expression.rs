use std::fmt;

/// The Abstract Syntax Tree of a process-node arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // Arithmetic
    Sum(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Negate(Box<Expression>),

    // Leaf nodes
    Literal(f64),
    Variable(String),
}

impl Expression {
    /// Gets the precedence level for an expression type. Higher numbers bind more tightly.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Sum(_, _) | Expression::Subtract(_, _) => 1,
            Expression::Multiply(_, _) | Expression::Divide(_, _) => 2,
            Expression::Negate(_) => 3,
            Expression::Literal(_) | Expression::Variable(_) => 4,
        }
    }

    /// Recursively formats the expression, adding parentheses only when necessary.
    fn fmt_with_precedence(&self, f: &mut fmt::Formatter<'_>, parent_precedence: u8) -> fmt::Result {
        let current_precedence = self.precedence();
        let needs_parens = current_precedence < parent_precedence;

        if needs_parens {
            write!(f, "(")?;
        }

        match self {
            Expression::Sum(l, r) => self.fmt_binary(f, "+", l, r, current_precedence)?,
            Expression::Subtract(l, r) => self.fmt_binary(f, "-", l, r, current_precedence)?,
            Expression::Multiply(l, r) => self.fmt_binary(f, "*", l, r, current_precedence)?,
            Expression::Divide(l, r) => self.fmt_binary(f, "/", l, r, current_precedence)?,
            Expression::Negate(v) => {
                write!(f, "-")?;
                v.fmt_with_precedence(f, current_precedence)?;
            }
            Expression::Literal(n) => write!(f, "{}", format_number(*n))?,
            Expression::Variable(name) => write!(f, "{}", name)?,
        }

        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }

    fn fmt_binary(
        &self,
        f: &mut fmt::Formatter<'_>,
        op: &str,
        l: &Expression,
        r: &Expression,
        current_precedence: u8,
    ) -> fmt::Result {
        l.fmt_with_precedence(f, current_precedence)?;
        write!(f, " {} ", op)?;
        // Operators are left-associative, so an equal-precedence right operand keeps its parens.
        r.fmt_with_precedence(f, current_precedence + 1)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_precedence(f, 0)
    }
}

/// Formats a number the way trace cells show it: integral values without a
/// fractional part, everything else in its shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
