#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

mod completer;
mod error;
pub mod logging;
pub mod parser;
mod report;

pub use completer::CommandsCompleter;
pub use error::{Error, Result};
pub use report::Reporter;
