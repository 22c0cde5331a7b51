pub mod attachments;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod error;
pub mod format;
pub mod migrations;
pub mod model;
pub mod resolve;
pub mod setup;
pub mod state;
pub mod store;

pub use config::ClientConfig;
pub use contracts::envelope::SuccessEnvelope;
pub use error::{ClientError, ClientResult, ResolutionError};
pub use resolve::resolve_counterparty;
