pub mod cli;
pub mod config;
pub mod helpers;
pub mod integrations;
pub mod models;
pub mod storage;
pub mod workflow;

pub use config::config::Config;
pub use integrations::directory::BankDirectory;
pub use integrations::gateway::Gateway;
pub use models::models::BankAccountRecord;
pub use storage::account_store::AccountStore;
pub use storage::session_store::SessionStore;
pub use workflow::verification::{SaveOutcome, VerificationWorkflow, VerifyOutcome};
