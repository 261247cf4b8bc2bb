//! Shared helpers for command handlers.

mod input;
mod parsing;

pub use input::{prompt_line, prompt_new_password, prompt_password, read_text_input};
pub use parsing::{parse_action, parse_datetime, parse_duration, parse_output_format, OutputFormat};
