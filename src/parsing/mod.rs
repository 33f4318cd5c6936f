
//! Cursor and source-position utilities shared by the literal parser.

pub mod source;
pub mod tokenizer;
