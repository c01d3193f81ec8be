#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

mod analysis;
mod error;
mod eval;
mod format;
mod parser;
mod syntax;
mod walk;

pub use error::{Error, Result};
pub use eval::{Operator, Value, apply_operator};
pub use format::format_value;
pub use parser::Grammar;
pub use syntax::{Application, COMMANDS, Command, Node, OPERATORS};
pub use walk::{Walker, walk};
