pub mod errors;
pub mod expressions;
pub mod statements;

pub use errors::*;
pub use expressions::Parser;
pub use statements::*;
