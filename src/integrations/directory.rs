use anyhow::{anyhow, Result};
use reqwest::Client;

use super::model::BankDirectoryEntry;

const UNKNOWN_BANK: &str = "Unknown Bank";

/// In-memory bank code → display name directory, refreshed once per session
/// from the third-party bank list endpoint. Never persisted.
pub struct BankDirectory {
    banks: Vec<BankDirectoryEntry>,
}

async fn fetch_bank_list(url: &str) -> Result<Vec<BankDirectoryEntry>> {
    let client = Client::new();
    let response = client.get(url).send().await?;

    if response.status().is_success() {
        let banks: Vec<BankDirectoryEntry> = response.json().await?;
        Ok(banks)
    } else {
        Err(anyhow!("Bank list API error: {}", response.status()))
    }
}

impl BankDirectory {
    pub fn empty() -> BankDirectory {
        BankDirectory { banks: Vec::new() }
    }

    pub fn from_entries(banks: Vec<BankDirectoryEntry>) -> BankDirectory {
        BankDirectory { banks }
    }

    /// Loads the directory at startup. A failed fetch leaves the directory
    /// empty; name resolution then falls back to the unknown-bank label and
    /// verification is unaffected.
    pub async fn fetch(url: &str) -> BankDirectory {
        match fetch_bank_list(url).await {
            Ok(banks) => {
                log::info!("Loaded {} banks from directory", banks.len());
                BankDirectory { banks }
            }
            Err(e) => {
                log::warn!("Error fetching banks: {}", e);
                BankDirectory::empty()
            }
        }
    }

    /// Looks up the display name for a bank code. Never fails: an unmatched
    /// code (or a directory that failed to load) yields the sentinel label.
    pub fn resolve(&self, bank_code: &str) -> &str {
        self.banks
            .iter()
            .find(|bank| bank.code == bank_code)
            .map_or(UNKNOWN_BANK, |bank| bank.name.as_str())
    }

    pub fn entries(&self) -> &[BankDirectoryEntry] {
        &self.banks
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
