// egmlog CLI
//
// Folder in, spreadsheets out: every log file in a folder is tokenized,
// reconstructed into sessions and written next to the input as a raw
// extraction and a game summary. Files are independent; one bad file is
// logged and skipped.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod output;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
