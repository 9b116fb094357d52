use serde::{Deserialize, Serialize};

/// A verified bank account as persisted locally. Records are created only by a
/// save after a successful verification and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountRecord {
    pub account_number: String,
    pub account_name: String,
    pub bank_code: String,
}

impl BankAccountRecord {
    pub fn new(account_number: &str, account_name: &str, bank_code: &str) -> Self {
        BankAccountRecord {
            account_number: account_number.to_string(),
            account_name: account_name.to_string(),
            bank_code: bank_code.to_string(),
        }
    }

    /// Two records collide when both the account number and the bank code match.
    pub fn same_account(&self, account_number: &str, bank_code: &str) -> bool {
        self.account_number == account_number && self.bank_code == bank_code
    }
}
