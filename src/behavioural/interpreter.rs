//! Interpreter: integer expressions built from numbers, sums and differences.
//!
//! Grammar accepted by [`Expression::parse`]:
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := number | '(' expr ')'
//! ```

use std::fmt;
use std::iter::Peekable;
use std::vec::IntoIter;

use regex::Regex;
use tracing::{debug, instrument};

use crate::error::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Expression::Subtract(Box::new(left), Box::new(right))
    }

    /// Fails instead of wrapping when an intermediate result leaves `i64`.
    pub fn evaluate(&self) -> PatternResult<i64> {
        match self {
            Expression::Number(value) => Ok(*value),
            Expression::Add(left, right) => left
                .evaluate()?
                .checked_add(right.evaluate()?)
                .ok_or_else(|| invalid(&self.to_string(), "integer overflow")),
            Expression::Subtract(left, right) => left
                .evaluate()?
                .checked_sub(right.evaluate()?)
                .ok_or_else(|| invalid(&self.to_string(), "integer overflow")),
        }
    }

    #[instrument(level = "debug")]
    pub fn parse(input: &str) -> PatternResult<Self> {
        let tokens = tokenize(input)?;
        debug!(?tokens, "tokenized");
        let mut parser = Parser {
            input,
            tokens: tokens.into_iter().peekable(),
        };
        let expression = parser.expression()?;
        match parser.tokens.next() {
            None => Ok(expression),
            Some(token) => Err(invalid(input, format!("unexpected '{token}'"))),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{value}"),
            Expression::Add(left, right) => write!(f, "({left} + {right})"),
            Expression::Subtract(left, right) => write!(f, "({left} - {right})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(i64),
    Plus,
    Minus,
    Open,
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
        }
    }
}

fn invalid(input: &str, message: impl Into<String>) -> PatternError {
    PatternError::InvalidExpression {
        input: input.to_string(),
        message: message.into(),
    }
}

fn tokenize(input: &str) -> PatternResult<Vec<Token>> {
    let token_regex = Regex::new(r"\s*(?:(\d+)|(\S))").map_err(|e| invalid(input, e.to_string()))?;
    let mut tokens = Vec::new();
    for caps in token_regex.captures_iter(input) {
        if let Some(digits) = caps.get(1) {
            let value = digits
                .as_str()
                .parse::<i64>()
                .map_err(|e| invalid(input, format!("{}: {e}", digits.as_str())))?;
            tokens.push(Token::Number(value));
            continue;
        }
        let symbol = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let token = match symbol {
            "+" => Token::Plus,
            "-" => Token::Minus,
            "(" => Token::Open,
            ")" => Token::Close,
            other => return Err(invalid(input, format!("unexpected character '{other}'"))),
        };
        tokens.push(token);
    }
    if tokens.is_empty() {
        return Err(invalid(input, "empty expression"));
    }
    Ok(tokens)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser<'_> {
    fn expression(&mut self) -> PatternResult<Expression> {
        let mut left = self.term()?;
        while let Some(op) = self.tokens.next_if(|t| matches!(t, Token::Plus | Token::Minus)) {
            let right = self.term()?;
            left = match op {
                Token::Plus => Expression::add(left, right),
                _ => Expression::subtract(left, right),
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> PatternResult<Expression> {
        match self.tokens.next() {
            Some(Token::Number(value)) => Ok(Expression::Number(value)),
            Some(Token::Open) => {
                let inner = self.expression()?;
                match self.tokens.next() {
                    Some(Token::Close) => Ok(inner),
                    _ => Err(invalid(self.input, "missing ')'")),
                }
            }
            Some(token) => Err(invalid(self.input, format!("unexpected '{token}'"))),
            None => Err(invalid(self.input, "unexpected end of input")),
        }
    }
}
