// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;
mod stack;
pub mod workspace;

pub use error::{Error, Result, SourceContext};
pub use parse::{Syntax, parse_stack};
pub use stack::{Service, Stack, Target};
