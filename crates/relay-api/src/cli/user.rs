//! `relay whoami`.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Print the user clients act as.
pub async fn whoami(state: &AppState, json: bool) -> Result<()> {
    let user = state.chat_service.current_user().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} (id {})",
        style(&user.name).cyan().bold(),
        style(user.id).dim()
    );
    println!();
    Ok(())
}
