use crate::{
    error::{Error, Result},
    format::format_value,
    syntax::{Command, Node},
    walk::{Walker, walk},
};
use std::str::FromStr;
use tracing::trace;

/// The outcome of evaluating a (sub)expression.
pub type Value = Result<i64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Xor,
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "%" => Ok(Self::Rem),
            "^" => Ok(Self::Xor),
            _ => Err(Error::InvalidOperator),
        }
    }
}

impl Operator {
    /// Arithmetic wraps around on overflow.
    pub const fn apply(self, x: i64, y: i64) -> Value {
        match self {
            Self::Add => Ok(x.wrapping_add(y)),
            Self::Sub => Ok(x.wrapping_sub(y)),
            Self::Mul => Ok(x.wrapping_mul(y)),
            Self::Div | Self::Rem if y == 0 => Err(Error::DivideByZero),
            Self::Div => Ok(x.wrapping_div(y)),
            Self::Rem => Ok(x.wrapping_rem(y)),
            Self::Xor => Ok(x ^ y),
        }
    }
}

/// Combines two operands with the operator spelled `op`.
///
/// An error operand is returned as is, the left one taking precedence, before
/// the operator is even looked at.
pub fn apply_operator(x: Value, op: &str, y: Value) -> Value {
    let x = x?;
    let y = y?;
    let result = op.parse::<Operator>()?.apply(x, y);
    trace!(x, op, y, ?result, "applied operator");
    result
}

fn parse_number(text: &str) -> Value {
    text.parse().map_err(|_| Error::InvalidNumber)
}

struct Evaluator;

impl Walker for Evaluator {
    type Output = Value;

    fn number(&mut self, text: &str) -> Value {
        parse_number(text)
    }

    fn seed(&mut self, _operator: &str, first: Value) -> Value {
        first
    }

    fn combine(&mut self, operator: &str, acc: Value, next: Value) -> Value {
        apply_operator(acc, operator, next)
    }
}

impl Node {
    pub fn eval(&self) -> Value {
        walk(self, &mut Evaluator)
    }
}

impl Command {
    /// Runs the command and returns the line to print.
    pub fn run(&self) -> String {
        match self {
            Self::Eval(t) => format_value(&t.eval()),
            Self::Leaves(t) => t.count_leaves().to_string(),
            Self::Branches(t) => t.count_branches().to_string(),
            Self::Tree(t) => t.to_string(),
        }
    }
}
