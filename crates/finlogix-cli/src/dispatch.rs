use std::io::{self, Write};

use chrono::Local;
use finlogix_store::commands;
use finlogix_store::commands::add::AddInput;
use finlogix_store::commands::export::ExportInput;
use finlogix_store::contracts::envelope::success;
use finlogix_store::{StoreError, StoreResult, SuccessEnvelope};
use serde_json::json;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> StoreResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Add {
            title,
            amount,
            kind,
            date,
            json: _,
        } => commands::add::run(AddInput {
            title: title.clone(),
            amount: *amount,
            kind: *kind,
            date: *date,
            id: None,
        }),
        Commands::Remove { id, .. } => commands::remove::run(id),
        Commands::Clear { yes, json } => dispatch_clear(*yes, *json),
        Commands::List { search, .. } => commands::list::run(search.as_deref()),
        Commands::Summary { .. } => commands::summary::run(),
        Commands::Export {
            format,
            search,
            out,
            json: _,
        } => commands::export::run(ExportInput {
            format: *format,
            query: search.clone(),
            out_dir: out.clone(),
            today: Local::now().date_naive(),
        }),
    }
}

/// The destructive path. The store clears unconditionally, so the
/// confirmation step has to happen here at the boundary.
fn dispatch_clear(yes: bool, json: bool) -> StoreResult<SuccessEnvelope> {
    if yes {
        return commands::clear::run();
    }

    if json {
        return Err(StoreError::invalid_argument_with_recovery(
            "Clearing in JSON mode needs an explicit confirmation flag.",
            vec!["Rerun as `finlogix clear --yes --json`.".to_string()],
        ));
    }

    if confirm_clear()? {
        commands::clear::run()
    } else {
        success(
            "clear",
            json!({
                "cancelled": true,
                "cleared_count": 0,
                "warnings": [],
            }),
        )
    }
}

fn confirm_clear() -> StoreResult<bool> {
    let mut stdout = io::stdout().lock();
    let prompted = stdout
        .write_all(b"Delete all recorded transactions? This cannot be undone. [y/N] ")
        .and_then(|()| stdout.flush());
    if let Err(error) = prompted {
        return Err(StoreError::new(
            "internal_prompt_error",
            &error.to_string(),
            Vec::new(),
        ));
    }

    let mut answer = String::new();
    if let Err(error) = io::stdin().read_line(&mut answer) {
        return Err(StoreError::new(
            "internal_prompt_error",
            &error.to_string(),
            Vec::new(),
        ));
    }

    let normalized = answer.trim().to_lowercase();
    Ok(normalized == "y" || normalized == "yes")
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn clear_without_yes_in_json_mode_is_rejected() {
        let parsed = parse_from(["finlogix", "clear", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }
}
