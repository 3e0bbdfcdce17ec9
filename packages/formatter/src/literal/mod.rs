//! Literal output: `var <name> = <json>;` generation and reading.

mod reader;
mod writer;

pub use reader::from_literal;
pub use writer::{save_literal, to_literal, to_pretty_json};
