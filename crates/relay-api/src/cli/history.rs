//! `relay history`: message history as a table or JSON.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use relay_types::message::{MessagePayload, MessageRole};

use crate::state::AppState;

/// Longest content shown in a table cell before truncating.
const PREVIEW_CHARS: usize = 60;

/// Print history, optionally narrowed to one user.
///
/// # Examples
///
/// ```bash
/// relay history
/// relay history --user-id 1 --json
/// ```
pub async fn show_history(state: &AppState, user_id: Option<i64>, json: bool) -> Result<()> {
    let messages = state.chat_service.history(user_id).await?;

    if json {
        let payload: Vec<MessagePayload> = messages.iter().map(MessagePayload::from).collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!(
            "  {} No messages yet. Start the server with: {}",
            style("i").blue().bold(),
            style("relay serve").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Sent").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("From").fg(Color::White),
        Cell::new("To").fg(Color::White),
        Cell::new("Content").fg(Color::White),
    ]);

    for message in &messages {
        let role_cell = match message.role {
            MessageRole::User => Cell::new("user").fg(Color::Blue),
            MessageRole::Bot => Cell::new("bot").fg(Color::Green),
        };

        table.add_row(vec![
            Cell::new(message.id.to_string()).fg(Color::DarkGrey),
            Cell::new(message.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            role_cell,
            Cell::new(message.origin_user.to_string()),
            Cell::new(message.destination_user.to_string()),
            Cell::new(preview(&message.content)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} message{}",
        style(messages.len()).bold(),
        if messages.len() == 1 { "" } else { "s" }
    );
    println!();
    Ok(())
}

fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short"), "short");
        let long = "é".repeat(100);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.ends_with("..."));
    }
}
