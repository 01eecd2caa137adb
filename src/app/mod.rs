pub mod config;
pub mod error;
pub mod import;
pub mod portfolio;
pub mod shell;
pub mod utils;

pub use config::{Cli, Config};
pub use error::{ErrorKind, InvalidInput, LedgerError};
pub use import::{ImportSummary, replay_csv};
pub use portfolio::Portfolio;
pub use shell::{Reply, Shell};
