use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDirectoryEntry {
    pub code: String,
    pub name: String,
}

//  RESPONSES   //
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountVerificationResponse {
    /// Absent when the gateway omits the field; treated as an empty name, not an
    /// error.
    pub account_name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GatewayErrorResponse {
    pub error: Option<String>,
}

/// Token fields as the gateway hands them out. The client stores whatever it
/// receives and never inspects or validates the tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionTokens {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

//  SCHEMAS //
#[derive(Debug, Serialize, Deserialize)]
pub struct BankVerificationSchema {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginSchema {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupSchema {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutSchema {
    pub refresh_token: String,
}
