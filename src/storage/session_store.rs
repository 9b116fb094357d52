use std::fs;
use std::path::PathBuf;

use crate::integrations::model::SessionTokens;

/// Holds whatever token fields the gateway returned from the last login or
/// signup, one JSON file in the state directory. Tokens are stored as-is;
/// nothing here inspects them.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> SessionStore {
        SessionStore { path }
    }

    pub fn load(&self) -> Option<SessionTokens> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                log::warn!("Ignoring unreadable session {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, tokens: &SessionTokens) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create state directory: {}", e))?;
        }

        let contents = serde_json::to_string(tokens)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;

        fs::write(&self.path, contents).map_err(|e| format!("Failed to save session: {}", e))
    }

    pub fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to clear session: {}", e)),
        }
    }
}
