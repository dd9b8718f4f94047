//! Pratt parser for rule-condition expressions.
//!
//! Binding powers, loosest to tightest: `or` < `and` < `in` <
//! comparisons < `%`. `!` binds tighter than any infix operator.

use super::lexer::{tokenize, LexError, Token};
use super::{BinOp, Expr, UnOp, Value};

/// Errors produced while parsing a condition string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token stream ended where an expression was expected.
    #[error("expected an expression, got end of input")]
    UnexpectedEnd,

    /// A `(` without its matching `)`.
    #[error("parenthesis unmatched, expected ')'")]
    UnmatchedParen,

    /// A `[` without its matching `]`.
    #[error("bracket unmatched, expected ']'")]
    UnmatchedBracket,

    /// A token that cannot start an expression.
    #[error("unexpected token \"{0}\"")]
    UnexpectedToken(Token),

    /// Input left over after a complete expression.
    #[error("trailing input after expression, starting at \"{0}\"")]
    TrailingInput(Token),
}

/// Parse a condition string into an [`Expr`].
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input)?,
        pos: 0,
    };
    let expr = parser.expr_bp(0)?;
    match parser.next() {
        None => Ok(expr),
        Some(tok) => Err(ParseError::TrailingInput(tok)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse one prefix position: a literal, identifier, list,
    /// parenthesised expression or negation.
    fn prefix(&mut self) -> Result<Expr, ParseError> {
        match self.next().ok_or(ParseError::UnexpectedEnd)? {
            Token::Bool(b) => Ok(Expr::Literal(Value::Bool(b))),
            Token::Int(i) => Ok(Expr::Literal(Value::Int(i))),
            Token::Text(s) => Ok(Expr::Literal(Value::Text(s))),
            Token::Ident(id) => Ok(Expr::Ident(id)),
            Token::OpenParen => {
                let inner = self.expr_bp(0)?;
                if self.next() != Some(Token::CloseParen) {
                    return Err(ParseError::UnmatchedParen);
                }
                Ok(inner)
            }
            Token::OpenBracket => {
                let mut items = vec![self.expr_bp(0)?];
                while self.peek() == Some(&Token::Comma) {
                    self.next();
                    items.push(self.expr_bp(0)?);
                }
                if self.next() != Some(Token::CloseBracket) {
                    return Err(ParseError::UnmatchedBracket);
                }
                Ok(Expr::List(items))
            }
            Token::Not => {
                let operand = self.expr_bp(UnOp::Not.binding_power())?;
                Ok(Expr::Unary(UnOp::Not, Box::new(operand)))
            }
            token => Err(ParseError::UnexpectedToken(token)),
        }
    }

    fn expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.prefix()?;

        while let Some(token) = self.peek() {
            let Some(op) = infix_op(token) else { break };
            let (left_bp, right_bp) = op.binding_powers();
            if left_bp < min_bp {
                break;
            }
            self.next();

            let rhs = self.expr_bp(right_bp)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }
}

fn infix_op(token: &Token) -> Option<BinOp> {
    match token {
        Token::And => Some(BinOp::And),
        Token::Or => Some(BinOp::Or),
        Token::Eq => Some(BinOp::Eq),
        Token::Neq => Some(BinOp::Neq),
        Token::Ge => Some(BinOp::Ge),
        Token::Gt => Some(BinOp::Gt),
        Token::Le => Some(BinOp::Le),
        Token::Lt => Some(BinOp::Lt),
        Token::Percent => Some(BinOp::Mod),
        Token::In => Some(BinOp::In),
        _ => None,
    }
}

impl UnOp {
    fn binding_power(self) -> u8 {
        match self {
            UnOp::Not => 9,
        }
    }
}

impl BinOp {
    fn binding_powers(self) -> (u8, u8) {
        match self {
            BinOp::Or => (1, 2),
            BinOp::And => (3, 4),
            BinOp::In => (5, 6),
            BinOp::Eq | BinOp::Neq | BinOp::Ge | BinOp::Gt | BinOp::Le | BinOp::Lt => (7, 8),
            BinOp::Mod => (9, 10),
        }
    }
}
