use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Error: Cannot divide by zero")]
    DivideByZero,
    #[error("Error: Invalid Operator")]
    InvalidOperator,
    #[error("Error: Invalid Number!")]
    InvalidNumber,
}

pub type Result<T, E = Error> = StdResult<T, E>;
