//! GSI record model.
//!
//! - [`block`] - fixed-width tokenizer and word-index constants
//! - [`line`] - a tokenized record with derived facts (point number, target test)
//! - [`identifier`] - station / control-point predicates

pub mod block;
pub mod identifier;
pub mod line;

pub use block::{tokenize, Block, BlockWidth};
pub use identifier::IdentifierMatcher;
pub use line::Line;
