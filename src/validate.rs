/// Validate an email: basic `local@domain.tld` syntax, max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !trimmed.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Some("Email must be a valid address".to_string());
    }
    None
}

/// Validate a required free-text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate the collaboration message: required, at least 10 chars.
pub fn validate_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Some("Message is required".to_string());
    }
    if trimmed.len() < 10 {
        return Some("Message must be at least 10 characters".to_string());
    }
    if trimmed.len() > 5000 {
        return Some("Message must be at most 5000 characters".to_string());
    }
    None
}
