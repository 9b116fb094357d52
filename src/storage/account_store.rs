use std::fs;
use std::path::PathBuf;

use crate::models::models::BankAccountRecord;

/// The persisted collection of verified accounts: one JSON file holding the
/// whole array, read once at startup and rewritten wholesale on every save.
/// Invariants: `(account_number, bank_code)` is unique across the collection,
/// and insertion order is the listing order.
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<BankAccountRecord>,
}

impl AccountStore {
    /// Loads the collection from disk. A missing file means an empty
    /// collection; an unreadable one is logged and treated the same, so a
    /// damaged state file never blocks startup.
    pub fn load(path: PathBuf) -> AccountStore {
        let accounts = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(accounts) => accounts,
                Err(e) => {
                    log::warn!("Ignoring unreadable account store {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        AccountStore { path, accounts }
    }

    pub fn contains(&self, account_number: &str, bank_code: &str) -> bool {
        self.accounts
            .iter()
            .any(|account| account.same_account(account_number, bank_code))
    }

    /// Appends a record and persists the full collection. A failed write rolls
    /// the in-memory append back so memory and disk never disagree.
    pub fn append(&mut self, record: BankAccountRecord) -> Result<(), String> {
        self.accounts.push(record);
        if let Err(e) = self.persist() {
            self.accounts.pop();
            return Err(e);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create state directory: {}", e))?;
        }

        let contents = serde_json::to_string(&self.accounts)
            .map_err(|e| format!("Failed to serialize accounts: {}", e))?;

        fs::write(&self.path, contents).map_err(|e| format!("Failed to save accounts: {}", e))
    }

    /// Case-insensitive substring filter over account name and number. An
    /// empty query returns the whole collection in insertion order.
    pub fn search(&self, query: &str) -> Vec<&BankAccountRecord> {
        let query = query.to_lowercase();
        self.accounts
            .iter()
            .filter(|account| {
                account.account_name.to_lowercase().contains(&query)
                    || account.account_number.contains(&query)
            })
            .collect()
    }

    pub fn all(&self) -> &[BankAccountRecord] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
