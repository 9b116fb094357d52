use crate::integrations::directory::BankDirectory;
use crate::integrations::gateway::Gateway;
use crate::models::models::BankAccountRecord;
use crate::storage::account_store::AccountStore;

/// Result of a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The gateway resolved the account holder name.
    Verified(String),
    /// The gateway or transport reported a failure; the message is what the
    /// user sees.
    Failed(String),
    /// A verification was already outstanding; this call was a no-op.
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The `(account_number, bank_code)` pair already exists; the collection
    /// was left unchanged.
    Duplicate,
}

/// Owned state container for the verification-and-save screen: the last
/// resolved holder name, the last error, a one-in-flight guard, the persisted
/// collection and the session's bank directory. All mutation happens through
/// the operations below, on a single logical context.
pub struct VerificationWorkflow {
    store: AccountStore,
    directory: BankDirectory,
    account_holder_name: String,
    last_error: String,
    verifying: bool,
}

impl VerificationWorkflow {
    pub fn new(store: AccountStore, directory: BankDirectory) -> VerificationWorkflow {
        VerificationWorkflow {
            store,
            directory,
            account_holder_name: String::new(),
            last_error: String::new(),
            verifying: false,
        }
    }

    /// Submits one verification request. Each new submission clears the
    /// previous name and error before the round trip; a submission while one
    /// is outstanding is rejected without touching any state. The persisted
    /// collection is never modified here.
    pub async fn verify_account(
        &mut self,
        gateway: &Gateway,
        account_number: &str,
        bank_code: &str,
    ) -> VerifyOutcome {
        if self.verifying {
            return VerifyOutcome::InFlight;
        }
        self.verifying = true;
        self.account_holder_name.clear();
        self.last_error.clear();

        let outcome = match gateway.verify_account(account_number, bank_code).await {
            Ok(account_name) => {
                self.account_holder_name = account_name.clone();
                VerifyOutcome::Verified(account_name)
            }
            Err(message) => {
                self.last_error = message.clone();
                VerifyOutcome::Failed(message)
            }
        };

        self.verifying = false;
        outcome
    }

    /// Merges a verified record into the persisted collection. Duplicates
    /// (same account number and bank code) are rejected and leave the
    /// collection untouched; a record without a holder name has not been
    /// verified and is refused outright.
    pub fn save_account(&mut self, record: BankAccountRecord) -> Result<SaveOutcome, String> {
        if record.account_name.is_empty() {
            return Err("Account has not been verified".to_string());
        }

        if self
            .store
            .contains(&record.account_number, &record.bank_code)
        {
            return Ok(SaveOutcome::Duplicate);
        }

        self.store.append(record)?;
        Ok(SaveOutcome::Saved)
    }

    /// Filters the persisted collection; see [`AccountStore::search`]. The
    /// collection is small enough that a full scan per keystroke is fine.
    pub fn search(&self, query: &str) -> Vec<&BankAccountRecord> {
        self.store.search(query)
    }

    pub fn resolve_bank_name(&self, bank_code: &str) -> &str {
        self.directory.resolve(bank_code)
    }

    pub fn account_holder_name(&self) -> &str {
        &self.account_holder_name
    }

    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    pub fn saved_accounts(&self) -> &[BankAccountRecord] {
        self.store.all()
    }

    pub fn directory(&self) -> &BankDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::model::BankDirectoryEntry;
    use tempfile::tempdir;

    fn workflow(dir: &std::path::Path) -> VerificationWorkflow {
        let store = AccountStore::load(dir.join("saved_accounts.json"));
        let directory = BankDirectory::from_entries(vec![BankDirectoryEntry {
            code: "044".to_string(),
            name: "Access Bank".to_string(),
        }]);
        VerificationWorkflow::new(store, directory)
    }

    #[test]
    fn save_then_search_includes_exactly_one_match() {
        let dir = tempdir().unwrap();
        let mut wf = workflow(dir.path());

        let record = BankAccountRecord::new("0123456789", "Jane Doe", "044");
        assert_eq!(wf.save_account(record.clone()).unwrap(), SaveOutcome::Saved);

        let matches = wf.search("");
        assert_eq!(matches.len(), 1);
        assert_eq!(*matches[0], record);
    }

    #[test]
    fn second_identical_save_is_rejected_and_keeps_one_copy() {
        let dir = tempdir().unwrap();
        let mut wf = workflow(dir.path());

        let record = BankAccountRecord::new("0123456789", "Jane Doe", "044");
        assert_eq!(wf.save_account(record.clone()).unwrap(), SaveOutcome::Saved);
        assert_eq!(
            wf.save_account(record).unwrap(),
            SaveOutcome::Duplicate
        );
        assert_eq!(wf.saved_accounts().len(), 1);
    }

    #[test]
    fn saves_preserve_insertion_order() {
        let dir = tempdir().unwrap();
        let mut wf = workflow(dir.path());

        for (number, name) in [
            ("1111111111", "Ada"),
            ("2222222222", "Bayo"),
            ("3333333333", "Chidi"),
        ] {
            wf.save_account(BankAccountRecord::new(number, name, "044"))
                .unwrap();
        }

        let names: Vec<&str> = wf
            .search("")
            .iter()
            .map(|a| a.account_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ada", "Bayo", "Chidi"]);
    }

    #[test]
    fn unverified_record_is_refused() {
        let dir = tempdir().unwrap();
        let mut wf = workflow(dir.path());

        let record = BankAccountRecord::new("0123456789", "", "044");
        assert!(wf.save_account(record).is_err());
        assert!(wf.saved_accounts().is_empty());
    }

    #[test]
    fn resolve_bank_name_falls_back_for_unknown_codes() {
        let dir = tempdir().unwrap();
        let wf = workflow(dir.path());
        assert_eq!(wf.resolve_bank_name("044"), "Access Bank");
        assert_eq!(wf.resolve_bank_name("999"), "Unknown Bank");
    }
}
