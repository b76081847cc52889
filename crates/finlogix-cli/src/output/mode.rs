use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Add { json, .. }
        | Commands::Remove { json, .. }
        | Commands::Clear { json, .. }
        | Commands::List { json, .. }
        | Commands::Summary { json }
        | Commands::Export { json, .. } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
