//! Shunting-yard conversion from tokens to a resolved RPN program.
//!
//! Identifier and function resolution happens here, so a compiled program
//! can only ever touch the allow-list in [`super::builtins`].

use super::builtins::{self, Builtin, VARIABLE};
use super::errors::ExpressionError;
use super::tokenizer::Token;

#[derive(PartialEq, Debug)]
enum Assoc {
    Left,
    Right,
}

fn precedence(token: &Token) -> (usize, Assoc) {
    // unary minus binds like `^` so that -x^2 == -(x^2) and 2^-1 == 0.5
    match *token {
        Token::OParen                      => (1, Assoc::Left), // keep at bottom
        Token::BOp('+') | Token::BOp('-')  => (2, Assoc::Left),
        Token::BOp('*') | Token::BOp('/') | Token::BOp('%') => (3, Assoc::Left),
        Token::UOp(_)                      => (5, Assoc::Right),
        Token::BOp('^')                    => (5, Assoc::Right),
        Token::Function(..)                => (7, Assoc::Left),
        _                                  => (99, Assoc::Left),
    }
}

/// A resolved RPN instruction.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Const(f64),
    Var,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Call(Builtin),
}

/// Reorders `tokens` into postfix order.
fn shunting_yard(tokens: Vec<Token>) -> Result<Vec<Token>, ExpressionError> {
    let mut out   = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut arity: Vec<usize> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Ident(_) => out.push(token),
            Token::OParen => stack.push(token),
            Token::Function(..) => {
                stack.push(token);
                arity.push(1);
            }
            Token::Comma | Token::CParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::OParen {
                        stack.push(top);
                        break;
                    }
                    out.push(top);
                }
                if stack.is_empty() {
                    return Err(ExpressionError::MismatchedParen);
                }
                if token == Token::CParen {
                    stack.pop(); // matching OParen
                    if matches!(stack.last(), Some(Token::Function(..))) {
                        if let (Some(Token::Function(name, _)), Some(n)) = (stack.pop(), arity.pop()) {
                            out.push(Token::Function(name, n));
                        }
                    }
                } else {
                    // a comma separates arguments only directly inside a call
                    let in_call = stack.len() >= 2
                        && matches!(stack[stack.len() - 2], Token::Function(..));
                    match arity.last_mut() {
                        Some(n) if in_call => *n += 1,
                        _ => return Err(ExpressionError::Malformed { reason: "comma outside a function call" }),
                    }
                }
            }
            Token::UOp(_) => stack.push(token),
            Token::BOp(_) => {
                let (prec_rhs, assoc_rhs) = precedence(&token);
                while let Some(top) = stack.last() {
                    let (prec_lhs, _) = precedence(top);
                    let pop = prec_lhs > prec_rhs || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Left);
                    if !pop {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        out.push(top);
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            Token::OParen => return Err(ExpressionError::MismatchedParen),
            token => out.push(token),
        }
    }

    Ok(out)
}

/// Resolves a postfix token stream against the allow-list and checks that
/// it leaves exactly one value on the stack.
fn resolve(rpn: Vec<Token>) -> Result<Vec<Op>, ExpressionError> {
    let mut program = Vec::with_capacity(rpn.len());
    let mut depth: usize = 0;

    for token in rpn {
        let (op, pops) = match token {
            Token::Number(v) => (Op::Const(v), 0),
            Token::Ident(name) => {
                if name == VARIABLE {
                    (Op::Var, 0)
                } else if let Some(v) = builtins::constant(&name) {
                    (Op::Const(v), 0)
                } else {
                    return Err(ExpressionError::UnknownIdentifier { name });
                }
            }
            Token::UOp(_) => (Op::Neg, 1),
            Token::BOp(c) => {
                let op = match c {
                    '+' => Op::Add,
                    '-' => Op::Sub,
                    '*' => Op::Mul,
                    '/' => Op::Div,
                    '%' => Op::Rem,
                    '^' => Op::Pow,
                    _   => return Err(ExpressionError::Malformed { reason: "unknown operator" }),
                };
                (op, 2)
            }
            Token::Function(name, got) => {
                let f = builtins::function(&name)
                    .ok_or_else(|| ExpressionError::UnknownFunction { name: name.clone() })?;
                if f.arity() != got {
                    return Err(ExpressionError::WrongArity { name, expected: f.arity(), got });
                }
                (Op::Call(f), got)
            }
            Token::OParen | Token::CParen | Token::Comma => {
                return Err(ExpressionError::MismatchedParen);
            }
        };

        if depth < pops {
            return Err(ExpressionError::Malformed { reason: "operator is missing an operand" });
        }
        depth = depth - pops + 1;
        program.push(op);
    }

    match depth {
        0 => Err(ExpressionError::Empty),
        1 => Ok(program),
        _ => Err(ExpressionError::Malformed { reason: "operands without an operator" }),
    }
}

pub(crate) fn compile(tokens: Vec<Token>) -> Result<Vec<Op>, ExpressionError> {
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }
    resolve(shunting_yard(tokens)?)
}
