use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub fn parse_record_id(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("id must be a positive whole number".to_string()),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ledgerdesk",
    version,
    about = "bill and vendor detail views over a bookkeeping ledger",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Directory holding ledger.db (defaults to ~/.ledgerdesk)
    #[arg(long, global = true, env = "LEDGERDESK_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,
    /// Base URL used to build attachment download links
    #[arg(long, global = true, env = "LEDGERDESK_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the ledger database, or upgrade an existing one
    Init {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Inspect bills and the vendor each one is owed to
    #[command(arg_required_else_help = true)]
    Bill {
        #[command(subcommand)]
        command: BillCommand,
    },
    /// Inspect customer and vendor companies
    #[command(arg_required_else_help = true)]
    Company {
        #[command(subcommand)]
        command: CompanyCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BillCommand {
    /// Show one bill with its resolved vendor
    Show {
        /// Invoice id of the bill
        #[arg(value_parser = parse_record_id)]
        invoice_id: i64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List every bill with its vendor
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CompanyCommand {
    /// Show a company's contact details and attachments
    Show {
        /// Company id
        #[arg(value_parser = parse_record_id)]
        company_id: i64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{BillCommand, Commands, CompanyCommand, parse_from, parse_record_id};

    #[test]
    fn parses_bill_show_with_id() {
        let parsed = parse_from(["ledgerdesk", "bill", "show", "42"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Bill {
                    command: BillCommand::Show {
                        invoice_id: 42,
                        json: false
                    }
                }
            ));
        }
    }

    #[test]
    fn parses_company_show_with_json_flag() {
        let parsed = parse_from(["ledgerdesk", "company", "show", "9", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Company {
                    command: CompanyCommand::Show {
                        company_id: 9,
                        json: true
                    }
                }
            ));
        }
    }

    #[test]
    fn base_url_is_accepted_after_the_subcommand() {
        let parsed = parse_from([
            "ledgerdesk",
            "company",
            "show",
            "9",
            "--base-url",
            "https://books.example.com",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(cli.base_url.as_deref(), Some("https://books.example.com"));
        }
    }

    #[test]
    fn parses_init() {
        let parsed = parse_from(["ledgerdesk", "init", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::Init { json: true }));
        }
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let parsed = parse_from(["ledgerdesk", "bill", "show", "INV-42"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn record_ids_must_be_positive() {
        assert_eq!(parse_record_id("7"), Ok(7));
        assert!(parse_record_id("0").is_err());
        assert!(parse_record_id("-3").is_err());
    }

    #[test]
    fn bill_without_subcommand_shows_help() {
        let parsed = parse_from(["ledgerdesk", "bill"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(
                error.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }
}
