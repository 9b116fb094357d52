use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub bank_list_url: String,
    pub state_dir: PathBuf,
}

impl Config {
    pub fn init() -> Config {
        let api_base_url = std::env::var("API_BASE_URL").expect("API_BASE_URL must be set");
        let bank_list_url = std::env::var("BANK_LIST_URL").expect("BANK_LIST_URL must be set");
        let state_dir = match std::env::var("BANKBOOK_STATE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .expect("could not determine home directory; set BANKBOOK_STATE_DIR")
                .join(".bankbook"),
        };

        Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            bank_list_url,
            state_dir,
        }
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.state_dir.join("saved_accounts.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join("session.json")
    }
}
