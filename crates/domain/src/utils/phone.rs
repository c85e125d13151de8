//! WhatsApp number normalization.
//!
//! Participants type their numbers in every shape imaginable: `0812-3456-7890`,
//! `+62 812 3456 7890`, `6281234567890`, `812 3456 7890`. WhatsApp deep links
//! and the notification backend want one format: the E.164 number without the
//! leading `+`.
//!
//! Input without an international prefix is read as an Indonesian national
//! number. Bare digits starting with `62` are treated as already carrying the
//! Indonesian country code.

use phonenumber::country::Id;
use phonenumber::Mode;

use crate::{MeetNotifyError, Result};

const INDONESIA_CALLING_CODE: &str = "62";
const MIN_E164_DIGITS: usize = 8;
const MAX_E164_DIGITS: usize = 15;

/// Normalize a WhatsApp number to E.164 digits without `+`.
///
/// ```
/// use meetnotify_domain::utils::phone::normalize_whatsapp_number;
///
/// assert_eq!(normalize_whatsapp_number("0812-3456-7890").unwrap(), "6281234567890");
/// assert_eq!(normalize_whatsapp_number("+62 812 3456 7890").unwrap(), "6281234567890");
/// assert!(normalize_whatsapp_number("call me").is_err());
/// ```
///
/// # Errors
/// Returns `MeetNotifyError::InvalidInput` when the input holds no usable
/// number.
pub fn normalize_whatsapp_number(raw: &str) -> Result<String> {
    let prepared = prepare(raw).ok_or_else(|| invalid(raw, "no digits found"))?;

    let number = phonenumber::parse(Some(Id::ID), &prepared)
        .map_err(|err| invalid(raw, &err.to_string()))?;

    let digits: String = number
        .format()
        .mode(Mode::E164)
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if !(MIN_E164_DIGITS..=MAX_E164_DIGITS).contains(&digits.len()) {
        return Err(invalid(raw, "number has an implausible length"));
    }

    Ok(digits)
}

/// Strip formatting and make an implicit international prefix explicit.
fn prepare(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let explicit_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    if explicit_plus {
        return Some(format!("+{digits}"));
    }
    if let Some(rest) = digits.strip_prefix("00") {
        return Some(format!("+{rest}"));
    }
    if digits.starts_with(INDONESIA_CALLING_CODE) {
        return Some(format!("+{digits}"));
    }
    Some(digits)
}

fn invalid(raw: &str, reason: &str) -> MeetNotifyError {
    MeetNotifyError::InvalidInput(format!("invalid WhatsApp number '{raw}': {reason}"))
}
