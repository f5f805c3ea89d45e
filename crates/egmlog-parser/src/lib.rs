// Error types
pub mod error;

// Line tokenizer
pub mod tokenizer;

// File loading and folder discovery
pub mod io;

pub use error::{Error, Result};
pub use io::{discover_log_files, read_log_file, read_log_lines};
pub use tokenizer::{Tokenized, extract_attributes, tokenize_line, tokenize_lines};
