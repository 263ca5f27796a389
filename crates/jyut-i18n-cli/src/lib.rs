#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod coverage;
pub mod error;
pub mod locales;
pub mod lookup;
pub mod util;

pub use cli::{Failure, run_from_env};
pub use error::{CliError, Result};
