//! Tokenizer for rule-condition expressions.
//!
//! The whole input is tokenized up front so that lexical errors surface
//! at profile-load time instead of being silently dropped mid-stream.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Errors produced while tokenizing a condition string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The input ended inside a token (e.g. an unterminated text literal).
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A character that cannot start or continue any token.
    #[error("unrecognized character '{0}'")]
    UnrecognizedChar(char),

    /// A lone `=`; the language only has `==`.
    #[error("expected '=' after '=', got '{0}'")]
    LoneEquals(char),

    /// An integer literal that does not fit in `i64`.
    #[error("invalid integer literal \"{0}\"")]
    InvalidInt(String),
}

/// One lexical token of the condition language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal, e.g. `35000` or `-42`.
    Int(i64),
    /// Single-quoted text literal, e.g. `'EDDF'`.
    Text(String),
    /// `true` / `false`.
    Bool(bool),
    /// Flight-plan variable name, e.g. `rfl` or `ac_eng_count`.
    Ident(String),

    /// `,`
    Comma,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `!`
    Not,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `%`
    Percent,
    /// `and`
    And,
    /// `or`
    Or,
    /// `in`
    In,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(i) => write!(f, "{i}"),
            Token::Text(s) => write!(f, "'{s}'"),
            Token::Bool(b) => write!(f, "{b}"),
            Token::Ident(id) => f.write_str(id),
            Token::Comma => f.write_str(","),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::OpenBracket => f.write_str("["),
            Token::CloseBracket => f.write_str("]"),
            Token::Eq => f.write_str("=="),
            Token::Neq => f.write_str("!="),
            Token::Not => f.write_str("!"),
            Token::Lt => f.write_str("<"),
            Token::Le => f.write_str("<="),
            Token::Gt => f.write_str(">"),
            Token::Ge => f.write_str(">="),
            Token::Percent => f.write_str("%"),
            Token::And => f.write_str("and"),
            Token::Or => f.write_str("or"),
            Token::In => f.write_str("in"),
        }
    }
}

/// Tokenize a complete condition string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut chars = input.chars().peekable();
    let mut tokens = Vec::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        tokens.push(next_token(&mut chars)?);
    }
    Ok(tokens)
}

fn next_token(chars: &mut Peekable<Chars<'_>>) -> Result<Token, LexError> {
    let c = chars.next().ok_or(LexError::UnexpectedEof)?;
    match c {
        ',' => Ok(Token::Comma),
        '(' => Ok(Token::OpenParen),
        ')' => Ok(Token::CloseParen),
        '[' => Ok(Token::OpenBracket),
        ']' => Ok(Token::CloseBracket),
        '%' => Ok(Token::Percent),
        '!' => {
            if chars.peek() == Some(&'=') {
                chars.next();
                Ok(Token::Neq)
            } else {
                Ok(Token::Not)
            }
        }
        '=' => match chars.next() {
            Some('=') => Ok(Token::Eq),
            Some(other) => Err(LexError::LoneEquals(other)),
            None => Err(LexError::UnexpectedEof),
        },
        '<' => {
            if chars.peek() == Some(&'=') {
                chars.next();
                Ok(Token::Le)
            } else {
                Ok(Token::Lt)
            }
        }
        '>' => {
            if chars.peek() == Some(&'=') {
                chars.next();
                Ok(Token::Ge)
            } else {
                Ok(Token::Gt)
            }
        }
        '\'' => text_literal(chars),
        '-' | '0'..='9' => integer_literal(c, chars),
        'a'..='z' => Ok(identifier(c, chars)),
        other => Err(LexError::UnrecognizedChar(other)),
    }
}

fn text_literal(chars: &mut Peekable<Chars<'_>>) -> Result<Token, LexError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            Some('\'') => return Ok(Token::Text(text)),
            Some(c) => text.push(c),
            None => return Err(LexError::UnexpectedEof),
        }
    }
}

fn integer_literal(first: char, chars: &mut Peekable<Chars<'_>>) -> Result<Token, LexError> {
    let mut digits = String::from(first);
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
        .parse()
        .map(Token::Int)
        .map_err(|_| LexError::InvalidInt(digits))
}

fn identifier(first: char, chars: &mut Peekable<Chars<'_>>) -> Token {
    let mut ident = String::from(first);
    while let Some(&c) = chars.peek() {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            break;
        }
        ident.push(c);
        chars.next();
    }
    match ident.as_str() {
        "and" => Token::And,
        "or" => Token::Or,
        "in" => Token::In,
        "true" => Token::Bool(true),
        "false" => Token::Bool(false),
        _ => Token::Ident(ident),
    }
}

#[cfg(test)]
mod tests {
    use super::Token::*;
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(tokenize("true"), Ok(vec![Bool(true)]));
        assert_eq!(tokenize("false"), Ok(vec![Bool(false)]));
        assert_eq!(tokenize("-42"), Ok(vec![Int(-42)]));
        assert_eq!(tokenize("55"), Ok(vec![Int(55)]));
        assert_eq!(
            tokenize("'Hello World! :)'"),
            Ok(vec![Text("Hello World! :)".into())])
        );
    }

    #[test]
    fn unterminated_text() {
        assert_eq!(tokenize("'EDDF"), Err(LexError::UnexpectedEof));
    }

    #[test]
    fn int_overflow() {
        let input = "-100000000000000000000000000000000000000000000";
        assert_eq!(tokenize(input), Err(LexError::InvalidInt(input.into())));
    }

    #[test]
    fn comparison_operators() {
        assert_eq!(
            tokenize("! == != < <= > >="),
            Ok(vec![Not, Eq, Neq, Lt, Le, Gt, Ge])
        );
    }

    #[test]
    fn lone_equals_is_an_error() {
        assert_eq!(tokenize("rfl = 0"), Err(LexError::LoneEquals(' ')));
    }

    #[test]
    fn condition_with_keywords() {
        let input = "dep == 'EDDF' and sidwpt in ['TOBAK', 'ANEKI']";
        assert_eq!(
            tokenize(input),
            Ok(vec![
                Ident("dep".into()),
                Eq,
                Text("EDDF".into()),
                And,
                Ident("sidwpt".into()),
                In,
                OpenBracket,
                Text("TOBAK".into()),
                Comma,
                Text("ANEKI".into()),
                CloseBracket,
            ])
        );
    }

    #[test]
    fn modulo_expression() {
        assert_eq!(
            tokenize("rfl % 2000 == 0"),
            Ok(vec![Ident("rfl".into()), Percent, Int(2000), Eq, Int(0)])
        );
    }

    #[test]
    fn unrecognized_char() {
        assert_eq!(tokenize("rfl # 2"), Err(LexError::UnrecognizedChar('#')));
    }
}
