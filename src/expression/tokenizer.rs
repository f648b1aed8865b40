//! Tokenizer for `f(x)` expressions.

use super::errors::ExpressionError;

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    /// function name, arity (filled in by the parser)
    Function(String, usize),
    UOp(char),
    BOp(char),
    OParen,
    CParen,
    Comma,
}

/// Tokenizes `src`. `**` is folded into `^`, unary `+` is dropped.
pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, ExpressionError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            // exponent, only if followed by digits
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        j += 1;
                    }
                    i = j;
                }
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidNumber { literal: literal.clone() })?;
            tokens.push(Token::Number(value));
            continue;
        }

        if ch.is_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();

            // lookahead past whitespace for a call
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j] == '(' {
                tokens.push(Token::Function(name, 0));
            } else {
                tokens.push(Token::Ident(name));
            }
            continue;
        }

        let token = match ch {
            '(' => Token::OParen,
            ')' => Token::CParen,
            ',' => Token::Comma,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::BOp('^')
            }
            '+' | '-' if makes_unary(tokens.last()) => {
                if ch == '+' {
                    i += 1;
                    continue;
                }
                Token::UOp('-')
            }
            '+' | '-' | '*' | '/' | '%' | '^' => Token::BOp(ch),
            _ => return Err(ExpressionError::UnexpectedCharacter { ch, pos: i }),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

// a sign is unary unless it follows an operand
fn makes_unary(prev: Option<&Token>) -> bool {
    !matches!(prev, Some(Token::Number(_)) | Some(Token::Ident(_)) | Some(Token::CParen))
}
