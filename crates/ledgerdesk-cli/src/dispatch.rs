use ledgerdesk_client::commands::{bill, company, init};
use ledgerdesk_client::{ClientConfig, ClientResult, SuccessEnvelope};

use crate::cli::{BillCommand, Cli, Commands, CompanyCommand};

pub fn client_config(cli: &Cli) -> ClientConfig {
    ClientConfig::new(cli.home.clone(), cli.base_url.as_deref())
}

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    let config = client_config(cli);
    match &cli.command {
        Commands::Init { .. } => init::run(&config),
        Commands::Bill { command } => match command {
            BillCommand::Show { invoice_id, .. } => bill::show(&config, *invoice_id),
            BillCommand::List { .. } => bill::list(&config),
        },
        Commands::Company { command } => match command {
            CompanyCommand::Show { company_id, .. } => company::show(&config, *company_id),
        },
    }
}
