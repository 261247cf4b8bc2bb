//! Text and table output formatting.

use std::io::IsTerminal;

use comfy_table::{presets, Cell, Color, Table};
use owo_colors::OwoColorize;
use uuid::Uuid;

use shiftpad_core::store::{HistoryRecord, User};

/// Cell width before values are truncated in table output.
const CELL_WIDTH: usize = 32;

/// Whether styled output should be emitted on stdout.
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// First 8 hex characters of a UUID, enough to eyeball in a table.
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Truncate a value for table display, marking the cut with "...".
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Render a timestamp for table display.
pub fn format_datetime(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Green OK badge (plain "OK" when colors are off).
pub fn ok_badge() -> String {
    if color_enabled() {
        "OK".green().bold().to_string()
    } else {
        "OK".to_string()
    }
}

/// Build the history table.
pub fn history_table(records: &[HistoryRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(["ID", "CREATED", "ACTION", "SHIFT", "INPUT", "OUTPUT"]);
    for record in records {
        table.add_row([
            Cell::new(short_id(&record.id)),
            Cell::new(format_datetime(&record.created_at)),
            Cell::new(record.action.as_str()),
            Cell::new(record.shift_key),
            Cell::new(truncate(&record.input_text, CELL_WIDTH)),
            Cell::new(truncate(&record.output_text, CELL_WIDTH)),
        ]);
    }
    table
}

/// One plain line per record (script-friendly).
pub fn history_plain_line(record: &HistoryRecord) -> String {
    format!(
        "{} {} {} {} {}",
        record.id,
        record.created_at.to_rfc3339(),
        record.action.as_str(),
        record.shift_key,
        record.output_text
    )
}

/// Build the account table for the admin view.
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(["EMAIL", "NAME", "ROLE", "CREATED", "LAST LOGIN"]);
    for user in users {
        let role_cell = if user.is_admin() {
            Cell::new(user.role.as_str()).fg(Color::Yellow)
        } else {
            Cell::new(user.role.as_str())
        };
        table.add_row([
            Cell::new(&user.email),
            Cell::new(truncate(&user.name, CELL_WIDTH)),
            role_cell,
            Cell::new(format_datetime(&user.created_at)),
            Cell::new(
                user.last_login
                    .as_ref()
                    .map(format_datetime)
                    .unwrap_or_else(|| "never".to_string()),
            ),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 32), "short");
        let long = "a".repeat(40);
        let cut = truncate(&long, 32);
        assert_eq!(cut.chars().count(), 32);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_short_id_length() {
        let id = Uuid::new_v4();
        assert_eq!(short_id(&id).len(), 8);
    }
}
