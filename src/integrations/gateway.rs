use super::model::{
    AccountVerificationResponse, BankVerificationSchema, GatewayErrorResponse, LoginSchema,
    LogoutSchema, SessionTokens, SignupSchema,
};

/// Client for the remote authentication/verification gateway. One instance per
/// process; no retries, every failed call is terminal for that attempt.
pub struct Gateway {
    base_url: String,
    client: reqwest::Client,
}

impl Gateway {
    pub fn new(base_url: &str) -> Gateway {
        Gateway {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Resolves the account holder name for an account number / bank code pair.
    /// A success response without an `account_name` field resolves to an empty
    /// string rather than an error.
    pub async fn verify_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<String, String> {
        let payload = BankVerificationSchema {
            account_number: account_number.to_string(),
            bank_code: bank_code.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/verify-account/", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Verification request failed: {}", e);
                "An error occurred while verifying the account".to_string()
            })?;

        match response.status().is_success() {
            true => {
                let verification: AccountVerificationResponse =
                    response.json().await.map_err(|e| {
                        log::error!("Failed to parse verification response: {}", e);
                        "An error occurred while verifying the account".to_string()
                    })?;
                Ok(verification.account_name.unwrap_or_default())
            }
            false => {
                let error_body: GatewayErrorResponse = response.json().await.unwrap_or_default();
                Err(error_body
                    .error
                    .unwrap_or_else(|| "Failed to verify account".to_string()))
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionTokens, String> {
        let payload = LoginSchema {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/api/login/", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Login request failed: {}", e);
                "An error occurred while logging in".to_string()
            })?;

        match response.status().is_success() {
            true => {
                let tokens: SessionTokens = response.json().await.map_err(|e| {
                    log::error!("Failed to parse login response: {}", e);
                    "An error occurred while logging in".to_string()
                })?;
                Ok(tokens)
            }
            false => {
                let error_body: GatewayErrorResponse = response.json().await.unwrap_or_default();
                Err(error_body
                    .error
                    .unwrap_or_else(|| "Login failed".to_string()))
            }
        }
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<SessionTokens, String> {
        let payload = SignupSchema {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/api/signup/", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Signup request failed: {}", e);
                "An error occurred while signing up".to_string()
            })?;

        match response.status().is_success() {
            true => {
                let tokens: SessionTokens = response.json().await.map_err(|e| {
                    log::error!("Failed to parse signup response: {}", e);
                    "An error occurred while signing up".to_string()
                })?;
                Ok(tokens)
            }
            false => {
                let error_body: GatewayErrorResponse = response.json().await.unwrap_or_default();
                Err(error_body
                    .error
                    .unwrap_or_else(|| "Signup failed".to_string()))
            }
        }
    }

    /// Asks the gateway to blacklist the refresh token. The local session is
    /// cleared by the caller regardless of the outcome here.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), String> {
        let payload = LogoutSchema {
            refresh_token: refresh_token.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/api/logout/", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Logout request failed: {}", e);
                "An error occurred while logging out".to_string()
            })?;

        match response.status().is_success() {
            true => Ok(()),
            false => {
                let error_body: GatewayErrorResponse = response.json().await.unwrap_or_default();
                Err(error_body
                    .error
                    .unwrap_or_else(|| "Logout failed".to_string()))
            }
        }
    }
}
