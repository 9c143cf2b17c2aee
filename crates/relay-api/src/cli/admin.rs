//! `relay seed` and `relay reset`.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use crate::state::AppState;

/// Insert the seed users if fewer than two exist.
pub async fn seed(state: &AppState, json: bool) -> Result<()> {
    let inserted = state.chat_service.seed().await?;

    if json {
        println!("{}", serde_json::json!({ "inserted": inserted }));
    } else if inserted == 0 {
        println!("  {} Users already seeded", style("✓").green());
    } else {
        println!(
            "  {} Seeded {} user{}",
            style("✓").green(),
            style(inserted).bold(),
            if inserted == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Drop and recreate all tables, asking first unless `yes` is set.
pub async fn reset(state: &AppState, yes: bool, json: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete all users and messages in {}?",
                state.data_dir.display()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.admin.reset().await?;

    if json {
        println!("{}", serde_json::json!({ "reset": true }));
    } else {
        println!(
            "  {} Database reset. All tables have been recreated.",
            style("✓").green()
        );
    }
    Ok(())
}
