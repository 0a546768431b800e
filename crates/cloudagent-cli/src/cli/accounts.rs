//! `accounts` command: list the configured account scopes.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};

use cloudagent_types::config::AccountScope;

use crate::state::AppState;

/// List configured accounts, marking the one commands will be scoped to.
pub fn list_accounts(state: &AppState, json: bool) -> anyhow::Result<()> {
    let selected = state
        .account
        .clone()
        .unwrap_or_else(|| state.config.default_scope());

    if let Some(requested) = &state.account {
        if !state.config.knows_scope(requested) {
            anyhow::bail!("Unknown account '{requested}'. Run `cloudagent accounts` without --account to list them.");
        }
    }

    if json {
        let accounts: Vec<serde_json::Value> = state
            .config
            .accounts
            .iter()
            .map(|a| {
                serde_json::json!({
                    "id": a.id,
                    "name": a.name,
                    "selected": a.id == selected,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    if state.config.accounts.is_empty() {
        println!("No accounts configured; commands use the '{selected}' scope.");
        return Ok(());
    }

    println!("{}", accounts_table(&state.config.accounts, &selected));
    Ok(())
}

/// Render the account list as a table.
pub fn accounts_table(accounts: &[AccountScope], selected: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("").fg(Color::White),
            Cell::new("ID").fg(Color::White),
            Cell::new("Name").fg(Color::White),
        ]);

    for account in accounts {
        let marker = if account.id == selected { "*" } else { "" };
        table.add_row(vec![
            Cell::new(marker).fg(Color::Green),
            Cell::new(&account.id),
            Cell::new(&account.name),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudagent_types::config::{ClientConfig, DEFAULT_SCOPE};

    #[test]
    fn test_table_marks_selected_account() {
        let accounts = vec![
            AccountScope {
                id: "111".to_string(),
                name: "Prod".to_string(),
            },
            AccountScope {
                id: "222".to_string(),
                name: "Sandbox".to_string(),
            },
        ];
        let rendered = accounts_table(&accounts, "222").to_string();
        assert!(rendered.contains("Prod"));
        assert!(rendered.contains("Sandbox"));
        assert_eq!(rendered.matches('*').count(), 1);
    }

    fn state_with(accounts: Vec<AccountScope>, account: Option<&str>) -> AppState {
        AppState {
            config: ClientConfig {
                accounts,
                ..ClientConfig::default()
            },
            data_dir: std::env::temp_dir(),
            account: account.map(str::to_string),
        }
    }

    #[test]
    fn test_default_sentinel_accepted_without_accounts() {
        let state = state_with(Vec::new(), Some(DEFAULT_SCOPE));
        assert!(list_accounts(&state, true).is_ok());
    }

    #[test]
    fn test_unconfigured_account_rejected() {
        let accounts = vec![AccountScope {
            id: "111".to_string(),
            name: "Prod".to_string(),
        }];
        assert!(list_accounts(&state_with(accounts.clone(), Some("999")), true).is_err());
        assert!(list_accounts(&state_with(accounts, Some(DEFAULT_SCOPE)), true).is_err());
    }
}
