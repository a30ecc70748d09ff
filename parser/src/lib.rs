//! ISEQ Parser
//!
//! This crate provides parsing for the integer-set pattern language:
//! - Atom syntax: singles, inclusive (`1-5`) and exclusive (`1:5`) ranges,
//!   prefixes (`:5`), suffixes (`5:`), and the match-all `:`
//! - Scalar enumerations (`4,5,7`) and bracketed sequence patterns
//!   (`[:],[3]`)
//! - Error reporting with pattern positions

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use parser::{parse, Parser};
