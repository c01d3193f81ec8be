use rustyline::error::ReadlineError;
use std::{io, result::Result as StdResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Line editor failure: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = StdResult<T, E>;
