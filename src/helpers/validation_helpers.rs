use regex::Regex;

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
    if !pattern.is_match(&email.to_lowercase()) {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }

    Ok(())
}

pub fn validate_password_match(password: &str, confirm_password: &str) -> Result<(), String> {
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}

/// Presence-only check: the gateway owns number format and length rules.
pub fn validate_account_input(account_number: &str, bank_code: &str) -> Result<(), String> {
    if account_number.is_empty() {
        return Err("Account number is required".to_string());
    }

    if bank_code.is_empty() {
        return Err("Bank code is required".to_string());
    }

    Ok(())
}
