pub mod reader;
pub mod tokenizer;

pub use reader::LineReader;
pub use tokenizer::{tokenize, ArgumentVector, TokenizeError};
