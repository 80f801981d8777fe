//! Field validators.
//!
//! Pure functions: same input, same verdict. Each returns `Ok(())` or the
//! first rule that failed as a [`ValidationError`]; its `Display` is the
//! message shown inline under the field.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 13;
pub const PASSWORD_MIN: usize = 8;
pub const VALIDATION_CODE_LEN: usize = 6;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref USERNAME_CHARS: Regex = Regex::new(r"^[.\-A-Za-z0-9_]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    Email,
    #[error("Username must have between 3 and 13 characters")]
    UsernameLength,
    #[error("Username may only contain letters, digits, '.', '-' and '_'")]
    UsernameCharacters,
    #[error("Password must have at least 8 characters")]
    PasswordTooShort,
    #[error("Password needs at least one uppercase letter")]
    PasswordNoUppercase,
    #[error("Password needs at least one lowercase letter")]
    PasswordNoLowercase,
    #[error("Password needs at least one digit")]
    PasswordNoDigit,
    #[error("Password needs at least one special character")]
    PasswordNoSpecial,
    #[error("Name must not contain special characters")]
    NameCharacters,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Emails do not match")]
    EmailMismatch,
    #[error("Enter a date as YYYY-MM-DD or DD/MM/YYYY")]
    BirthdateFormat,
    #[error("Birthdate cannot be in the future")]
    BirthdateInFuture,
    #[error("Birthdate is too far in the past")]
    BirthdateTooOld,
    #[error("The validation code has 6 digits")]
    ValidationCode,
    #[error("Enter a phone number with 8 to 15 digits")]
    PhoneNumber,
}

pub type Verdict = Result<(), ValidationError>;

pub fn required(raw: &str) -> Verdict {
    if raw.trim().is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

pub fn email(raw: &str) -> Verdict {
    if EMAIL.is_match(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// 3 to 13 characters out of `A-Z a-z 0-9 . - _`.
pub fn username(raw: &str) -> Verdict {
    let len = raw.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(ValidationError::UsernameLength);
    }
    if !USERNAME_CHARS.is_match(raw) {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(())
}

/// Rules are checked in a fixed order and only the first failure is
/// reported: length, uppercase, lowercase, digit, special character.
pub fn password(raw: &str) -> Verdict {
    if raw.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !raw.chars().any(char::is_uppercase) {
        return Err(ValidationError::PasswordNoUppercase);
    }
    if !raw.chars().any(char::is_lowercase) {
        return Err(ValidationError::PasswordNoLowercase);
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNoDigit);
    }
    if !raw.chars().any(is_special) {
        return Err(ValidationError::PasswordNoSpecial);
    }
    Ok(())
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Letters of any script, spaces, apostrophes and hyphens.
pub fn name(raw: &str) -> Verdict {
    required(raw)?;
    let ok = raw
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(ValidationError::NameCharacters)
    }
}

pub fn password_confirmation(password: &str, confirmation: &str) -> Verdict {
    if password == confirmation {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn email_confirmation(email: &str, confirmation: &str) -> Verdict {
    if email.trim() == confirmation.trim() {
        Ok(())
    } else {
        Err(ValidationError::EmailMismatch)
    }
}

/// Accepts `YYYY-MM-DD` and `DD/MM/YYYY`.
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| ValidationError::BirthdateFormat)
}

/// A real calendar date between 1900-01-01 and `today`, inclusive.
pub fn birthdate(raw: &str, today: NaiveDate) -> Verdict {
    let date = parse_birthdate(raw)?;
    if date > today {
        return Err(ValidationError::BirthdateInFuture);
    }
    let earliest = NaiveDate::from_ymd_opt(1900, 1, 1).ok_or(ValidationError::BirthdateFormat)?;
    if date < earliest {
        return Err(ValidationError::BirthdateTooOld);
    }
    Ok(())
}

pub fn validation_code(raw: &str) -> Verdict {
    if raw.len() == VALIDATION_CODE_LEN && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::ValidationCode)
    }
}

/// Digits plus the usual separators (`+`, spaces, `-`, parentheses), 8 to
/// 15 digits in total.
pub fn phone_number(raw: &str) -> Verdict {
    let allowed = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    if allowed && (8..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::PhoneNumber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn short_passwords_report_length_first() {
        for pw in ["", "a", "Ab1*", "Abcde1*"] {
            assert_eq!(password(pw), Err(ValidationError::PasswordTooShort), "{pw:?}");
        }
    }

    #[test]
    fn each_missing_category_has_its_own_error() {
        assert_eq!(password("potato123*"), Err(ValidationError::PasswordNoUppercase));
        assert_eq!(password("POTATO123*"), Err(ValidationError::PasswordNoLowercase));
        assert_eq!(password("Potatoes**"), Err(ValidationError::PasswordNoDigit));
        assert_eq!(password("Potato1234"), Err(ValidationError::PasswordNoSpecial));
        assert_eq!(password("Potato123*"), Ok(()));
    }

    #[test]
    fn only_first_missing_category_is_reported() {
        // no uppercase, no digit, no special: uppercase wins
        assert_eq!(password("potatoes"), Err(ValidationError::PasswordNoUppercase));
        // no digit, no special: digit wins
        assert_eq!(password("Potatoes"), Err(ValidationError::PasswordNoDigit));
    }

    #[test]
    fn digits_and_symbols_do_not_count_as_letters() {
        assert_eq!(password("12345678*a"), Err(ValidationError::PasswordNoUppercase));
        assert_eq!(password("12345678*A"), Err(ValidationError::PasswordNoLowercase));
    }

    #[test]
    fn username_length_bounds() {
        assert_eq!(username("abc"), Ok(()));
        assert_eq!(username("a.b-c_d1"), Ok(()));
        let thirteen = "abcdefghijklm";
        assert_eq!(username(thirteen), Ok(()));
        let fourteen = format!("{thirteen}n");
        assert_eq!(username(&fourteen), Err(ValidationError::UsernameLength));
        assert_eq!(username("ab"), Err(ValidationError::UsernameLength));
    }

    #[test]
    fn username_characters() {
        assert_eq!(username("pot ato"), Err(ValidationError::UsernameCharacters));
        assert_eq!(username("potato!"), Err(ValidationError::UsernameCharacters));
        assert_eq!(username("batatá"), Err(ValidationError::UsernameCharacters));
    }

    #[test]
    fn email_shape() {
        assert_eq!(email("potato@dakasa.app"), Ok(()));
        assert_eq!(email("  potato@dakasa.app "), Ok(()));
        for bad in ["", "potato", "potato@", "@dakasa.app", "potato@dakasa", "po tato@x.io"] {
            assert_eq!(email(bad), Err(ValidationError::Email), "{bad:?}");
        }
    }

    #[test]
    fn names_reject_special_characters() {
        assert_eq!(name("João da Silva"), Ok(()));
        assert_eq!(name("Anne-Marie O'Neil"), Ok(()));
        assert_eq!(name("R2D2"), Err(ValidationError::NameCharacters));
        assert_eq!(name("Batata@"), Err(ValidationError::NameCharacters));
        assert_eq!(name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn confirmation_must_match_current_password() {
        assert_eq!(password_confirmation("Potato123*", "Potato123*"), Ok(()));
        assert_eq!(
            password_confirmation("Potato123*", "Potato123"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn email_confirmation_must_match() {
        assert_eq!(email_confirmation("a@b.co", "a@b.co"), Ok(()));
        assert_eq!(
            email_confirmation("a@b.co", "a@b.com"),
            Err(ValidationError::EmailMismatch)
        );
    }

    #[test]
    fn birthdate_formats_and_range() {
        assert_eq!(birthdate("1999-04-12", today()), Ok(()));
        assert_eq!(birthdate("12/04/1999", today()), Ok(()));
        assert_eq!(birthdate("2024-06-15", today()), Ok(()));
        assert_eq!(birthdate("2024-06-16", today()), Err(ValidationError::BirthdateInFuture));
        assert_eq!(birthdate("1899-12-31", today()), Err(ValidationError::BirthdateTooOld));
        assert_eq!(birthdate("1999-02-30", today()), Err(ValidationError::BirthdateFormat));
        assert_eq!(birthdate("yesterday", today()), Err(ValidationError::BirthdateFormat));
    }

    #[test]
    fn validation_code_is_six_digits() {
        assert_eq!(validation_code("012345"), Ok(()));
        assert_eq!(validation_code("12345"), Err(ValidationError::ValidationCode));
        assert_eq!(validation_code("1234567"), Err(ValidationError::ValidationCode));
        assert_eq!(validation_code("12a456"), Err(ValidationError::ValidationCode));
    }

    #[test]
    fn phone_numbers() {
        assert_eq!(phone_number("+55 (11) 91234-5678"), Ok(()));
        assert_eq!(phone_number("1234567"), Err(ValidationError::PhoneNumber));
        assert_eq!(phone_number("11 9123x5678"), Err(ValidationError::PhoneNumber));
    }
}
