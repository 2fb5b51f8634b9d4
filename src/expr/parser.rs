use super::expression::Expression;
use crate::error::ExpressionError;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Deepest parenthesis or unary-sign nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Longest token sequence the parser accepts. Every tree node comes from a
/// token, so this also bounds how deep a chain like `a + a + ... + a` gets.
pub const MAX_TOKENS: usize = 1024;

fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<CharIndices> = source.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = pos;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &source[pos..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::UnexpectedToken {
                        token: literal.to_string(),
                        position: pos,
                    })?;
                push_token(&mut tokens, Token::Number(value), pos)?;
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = pos;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                push_token(&mut tokens, Token::Ident(source[pos..end].to_string()), pos)?;
                continue;
            }
            other => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character: other,
                    position: pos,
                });
            }
        };
        chars.next();
        push_token(&mut tokens, token, pos)?;
    }
    Ok(tokens)
}

fn push_token(
    tokens: &mut Vec<(Token, usize)>,
    token: Token,
    position: usize,
) -> Result<(), ExpressionError> {
    if tokens.len() >= MAX_TOKENS {
        return Err(ExpressionError::TooManyTokens(MAX_TOKENS));
    }
    tokens.push((token, position));
    Ok(())
}

/// Recursive-descent parser over `+ - * / ( )`, numbers and identifiers.
///
/// Grammar:
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('-' | '+') unary | primary
/// primary := number | ident | '(' expr ')'
/// ```
struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ExpressionError::TooDeeplyNested(MAX_NESTING));
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let next = self.tokens.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn parse_expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.peek() {
            let combine: fn(Box<Expression>, Box<Expression>) -> Expression = match op {
                Token::Plus => Expression::Sum,
                Token::Minus => Expression::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = combine(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.peek() {
            let combine: fn(Box<Expression>, Box<Expression>) -> Expression = match op {
                Token::Star => Expression::Multiply,
                Token::Slash => Expression::Divide,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = combine(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                self.descend()?;
                let operand = self.parse_unary()?;
                self.depth -= 1;
                Ok(Expression::Negate(Box::new(operand)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.descend()?;
                let operand = self.parse_unary()?;
                self.depth -= 1;
                Ok(operand)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expression, ExpressionError> {
        match self.advance() {
            Some((Token::Number(n), _)) => Ok(Expression::Literal(n)),
            Some((Token::Ident(name), _)) => Ok(Expression::Variable(name)),
            Some((Token::LParen, _)) => {
                self.descend()?;
                let inner = self.parse_expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, position)) => Err(ExpressionError::UnexpectedToken {
                        token: token.to_string(),
                        position,
                    }),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((token, position)) => Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

/// Parses an arithmetic expression such as `(a + b) / 2`.
pub fn parse(source: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expression = parser.parse_expr()?;
    match parser.advance() {
        None => Ok(expression),
        Some((token, position)) => Err(ExpressionError::UnexpectedToken {
            token: token.to_string(),
            position,
        }),
    }
}
