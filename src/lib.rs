//! Minilang front end
//!
//! A single-pass lexer, recursive-descent parser and declaration checker for a
//! tiny integer language with `int` declarations, assignments, `print` and
//! left-associative addition.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod symbol;

pub use diagnostics::*;
pub use lexer::*;
pub use parser::*;
pub use symbol::*;
