use clap::{Parser, Subcommand};

use crate::config::config::Config;
use crate::helpers::validation_helpers::{
    validate_account_input, validate_email, validate_password, validate_password_match,
};
use crate::integrations::directory::BankDirectory;
use crate::integrations::gateway::Gateway;
use crate::models::models::BankAccountRecord;
use crate::storage::account_store::AccountStore;
use crate::storage::session_store::SessionStore;
use crate::workflow::verification::{SaveOutcome, VerificationWorkflow, VerifyOutcome};

#[derive(Parser)]
#[command(name = "bankbook")]
#[command(about = "Verify bank accounts and keep a local book of the verified ones")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account on the gateway and store the returned tokens
    Signup {
        email: String,
        password: String,
        confirm_password: String,
    },
    /// Log in to the gateway and store the returned tokens
    Login { email: String, password: String },
    /// Invalidate the stored session
    Logout,
    /// List the bank directory (code and name)
    Banks,
    /// Resolve the account holder name for an account number and bank code
    Verify {
        account_number: String,
        bank_code: String,
        /// Save the verified account to the local book
        #[arg(long)]
        save: bool,
    },
    /// List saved accounts, optionally filtered by name or number
    Accounts {
        #[arg(long)]
        search: Option<String>,
    },
}

pub async fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Commands::Signup {
            email,
            password,
            confirm_password,
        } => signup(config, &email, &password, &confirm_password).await,
        Commands::Login { email, password } => login(config, &email, &password).await,
        Commands::Logout => logout(config).await,
        Commands::Banks => banks(config).await,
        Commands::Verify {
            account_number,
            bank_code,
            save,
        } => verify(config, &account_number, &bank_code, save).await,
        Commands::Accounts { search } => accounts(config, search.as_deref()).await,
    }
}

async fn signup(
    config: &Config,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)?;
    validate_password_match(password, confirm_password)?;

    let gateway = Gateway::new(&config.api_base_url);
    let tokens = gateway.signup(email, password, confirm_password).await?;

    SessionStore::new(config.session_path()).save(&tokens)?;
    println!("Account created successfully. You are now logged in as {}.", email);
    Ok(())
}

async fn login(config: &Config, email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    let gateway = Gateway::new(&config.api_base_url);
    let tokens = gateway.login(email, password).await?;

    SessionStore::new(config.session_path()).save(&tokens)?;
    println!("Login successful.");
    Ok(())
}

async fn logout(config: &Config) -> Result<(), String> {
    let session_store = SessionStore::new(config.session_path());

    // Best effort against the gateway; the local session goes away either way.
    if let Some(tokens) = session_store.load() {
        if let Some(refresh_token) = tokens.refresh_token.as_deref() {
            let gateway = Gateway::new(&config.api_base_url);
            if let Err(e) = gateway.logout(refresh_token).await {
                log::warn!("Gateway logout failed: {}", e);
            }
        }
    }

    session_store.clear()?;
    println!("Logged out.");
    Ok(())
}

async fn banks(config: &Config) -> Result<(), String> {
    let directory = BankDirectory::fetch(&config.bank_list_url).await;
    if directory.is_empty() {
        return Err("Bank directory is unavailable".to_string());
    }

    for bank in directory.entries() {
        println!("{:>6}  {}", bank.code, bank.name);
    }
    Ok(())
}

async fn verify(
    config: &Config,
    account_number: &str,
    bank_code: &str,
    save: bool,
) -> Result<(), String> {
    validate_account_input(account_number, bank_code)?;

    let gateway = Gateway::new(&config.api_base_url);
    let store = AccountStore::load(config.accounts_path());
    let directory = BankDirectory::fetch(&config.bank_list_url).await;
    let mut workflow = VerificationWorkflow::new(store, directory);

    match workflow
        .verify_account(&gateway, account_number, bank_code)
        .await
    {
        VerifyOutcome::Verified(account_name) => {
            println!("Account Holder: {}", account_name);
            println!("Bank: {}", workflow.resolve_bank_name(bank_code));

            if save {
                let record = BankAccountRecord::new(account_number, &account_name, bank_code);
                match workflow.save_account(record)? {
                    SaveOutcome::Saved => println!("Account saved successfully!"),
                    SaveOutcome::Duplicate => {
                        println!("This account has already been saved.")
                    }
                }
            }
            Ok(())
        }
        VerifyOutcome::Failed(message) => Err(message),
        VerifyOutcome::InFlight => Err("A verification is already in progress".to_string()),
    }
}

async fn accounts(config: &Config, search: Option<&str>) -> Result<(), String> {
    let store = AccountStore::load(config.accounts_path());
    let directory = BankDirectory::fetch(&config.bank_list_url).await;
    let workflow = VerificationWorkflow::new(store, directory);

    let matches = workflow.search(search.unwrap_or(""));
    if matches.is_empty() {
        println!("No saved accounts found.");
        return Ok(());
    }

    for account in matches {
        println!(
            "{}  {}  {}",
            account.account_number,
            account.account_name,
            workflow.resolve_bank_name(&account.bank_code)
        );
    }
    Ok(())
}
