use crate::cli::{BillCommand, Commands, CompanyCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Init { json } => OutputMode::from_flag(*json),
        Commands::Bill { command } => match command {
            BillCommand::Show { json, .. } | BillCommand::List { json } => {
                OutputMode::from_flag(*json)
            }
        },
        Commands::Company { command } => match command {
            CompanyCommand::Show { json, .. } => OutputMode::from_flag(*json),
        },
    }
}
