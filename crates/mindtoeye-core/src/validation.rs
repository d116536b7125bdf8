//! Input validation shared by services.
//!
//! Every check returns `CoreError::Validation` with a message suitable for
//! showing to the caller.

use crate::domain::{BrandInputs, NewUser};
use crate::ports::CoreError;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 6;
pub const PROJECT_NAME_MAX: usize = 100;

fn invalid(msg: impl Into<String>) -> CoreError {
    CoreError::Validation(msg.into())
}

pub fn validate_new_user(user: &NewUser) -> Result<(), CoreError> {
    validate_username(&user.username)?;
    let len = user.password.chars().count();
    if len < PASSWORD_MIN {
        return Err(invalid(format!(
            "password must be at least {PASSWORD_MIN} characters"
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.trim().chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(invalid(format!(
            "username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
        )));
    }
    Ok(())
}

pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid("project name is required"));
    }
    if trimmed.chars().count() > PROJECT_NAME_MAX {
        return Err(invalid(format!(
            "project name must be at most {PROJECT_NAME_MAX} characters"
        )));
    }
    Ok(())
}

pub fn validate_concept_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(invalid("concept name is required"));
    }
    Ok(())
}

pub fn validate_brand_inputs(inputs: &BrandInputs) -> Result<(), CoreError> {
    if inputs.brand_name.trim().is_empty() {
        return Err(invalid("brandName is required"));
    }
    if inputs.values.iter().any(|v| v.value.trim().is_empty()) {
        return Err(invalid("brand values must not be empty"));
    }
    Ok(())
}

/// Normalize a hex color to `#RRGGBB` upper-case.
///
/// Accepts an optional leading `#` and the 3-digit shorthand. Returns `None`
/// for anything else.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_ascii_uppercase()))
}
