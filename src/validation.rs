use regex::Regex;

use crate::prelude::{AppError, ContactMap, DuplicateError, ValidationError};

pub fn validate_name(name: &str) -> bool {
    // Anything goes as long as something is left after trimming
    !name.trim().is_empty()
}

pub fn validate_number(number: &str) -> Result<bool, AppError> {
    // Decimal digits only, at least one
    let re = Regex::new(r"^[0-9]+$")?;
    Ok(re.is_match(number))
}

/// Well-formedness of a (name, number) pair, independent of the store.
pub fn validate_new(name: &str, number: &str) -> Result<(), AppError> {
    if !validate_name(name) {
        return Err(ValidationError::EmptyName.into());
    }

    // One record per line in the contact file
    if name.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreakInName(name.to_string()).into());
    }

    if !validate_number(number)? {
        return Err(ValidationError::InvalidNumberFormat(number.to_string()).into());
    }

    Ok(())
}

/// Name collisions are reported before number collisions. `excluding` names
/// the contact being edited, which may keep its own name.
pub fn check_duplicate(
    contacts: &ContactMap,
    name: &str,
    number: &str,
    excluding: Option<&str>,
) -> Option<DuplicateError> {
    if contacts.contains_key(name) && excluding != Some(name) {
        return Some(DuplicateError::DuplicateName(name.to_string()));
    }

    let number_taken = contacts
        .iter()
        .any(|(other, other_number)| other_number == number && excluding != Some(other.as_str()));

    if number_taken {
        return Some(DuplicateError::DuplicateNumber(number.to_string()));
    }

    None
}
