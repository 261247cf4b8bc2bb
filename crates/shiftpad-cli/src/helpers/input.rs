//! Input helpers: positional-or-stdin text, prompts, passwords.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Input, Password};

/// Environment variable that supplies the password non-interactively.
pub const PASSWORD_ENV: &str = "SHIFTPAD_PASSWORD";

/// Read the text to transform: the positional argument if given,
/// otherwise stdin when piped.
pub fn read_text_input(arg: Option<&str>) -> anyhow::Result<String> {
    if let Some(value) = arg {
        return Ok(value.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("No input provided on stdin"));
        }
        return Ok(trimmed);
    }

    Err(anyhow::anyhow!(
        "No text provided. Pass TEXT as an argument or pipe it via stdin."
    ))
}

/// Prompt for a single line of input.
pub fn prompt_line(label: &str, no_input: bool) -> anyhow::Result<String> {
    if no_input {
        return Err(anyhow::anyhow!(
            "--no-input requires the {} flag to be provided",
            label.to_lowercase()
        ));
    }
    Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))
}

/// Read a password from the environment or a hidden prompt.
pub fn prompt_password(no_input: bool) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }
    if no_input {
        return Err(anyhow::anyhow!("--no-input requires {}", PASSWORD_ENV));
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Read a new password (with confirmation) from the environment or a
/// hidden prompt.
pub fn prompt_new_password(no_input: bool) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }
    if no_input {
        return Err(anyhow::anyhow!("--no-input requires {}", PASSWORD_ENV));
    }
    Password::new()
        .with_prompt("Choose a password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
