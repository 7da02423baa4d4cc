use email_address::EmailAddress;

pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_PERSON_NAME_LEN: usize = 100;
pub const MAX_DISPLAY_NAME_LEN: usize = 50;
pub const MIN_PASSWORD_BYTES: usize = 8;
// bcrypt silently ignores input past 72 bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// What a soft delete actually did. Both outcomes are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteOutcome {
    Deleted,
    AlreadyDeleted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Empty(&'static str),

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must not exceed 72 bytes")]
    PasswordTooLong,
}

impl FieldError {
    /// Stable error code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Empty(_) | FieldError::TooLong { .. } => "VALIDATION_ERROR",
            FieldError::InvalidEmail => "INVALID_EMAIL",
            FieldError::PasswordTooShort | FieldError::PasswordTooLong => "INVALID_PASSWORD",
        }
    }
}

fn bounded(value: &str, field: &'static str, max: usize) -> Result<String, FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FieldError::Empty(field));
    }

    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }

    Ok(value.to_string())
}

pub fn normalize_email(email: &str) -> Result<String, FieldError> {
    let email = bounded(email, "email", MAX_EMAIL_LEN)?;

    if !EmailAddress::is_valid(&email) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(email.to_lowercase())
}

pub fn person_name(value: &str, field: &'static str) -> Result<String, FieldError> {
    bounded(value, field, MAX_PERSON_NAME_LEN)
}

pub fn display_name(value: &str) -> Result<String, FieldError> {
    bounded(value, "display_name", MAX_DISPLAY_NAME_LEN)
}

pub fn check_password(password: &str) -> Result<(), FieldError> {
    if password.len() < MIN_PASSWORD_BYTES {
        return Err(FieldError::PasswordTooShort);
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(FieldError::PasswordTooLong);
    }

    Ok(())
}
