// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation rules shared by the sign-up, login, and feedback forms.
//!
//! Every validator is a total, synchronous function from a raw input string
//! to `Ok(())` or a specific [`ValidationError`]. Validators never panic and
//! depend on nothing beyond their arguments. Check order is significant:
//! the first failing check's reason is returned.

use crate::dates::{validate_date_of_birth, validate_visit_date};
use crate::error::ValidationError;
use time::Date;

/// Which characters a person-name field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Letters and spaces only (feedback form).
    LettersAndSpaces,
    /// Letters, spaces, hyphens, and apostrophes (sign-up form).
    LettersSpacesHyphensApostrophes,
}

/// The kind of a form field, used to dispatch to the matching validator.
///
/// This is the single polymorphic entry point that replaces the per-form
/// validator copies; see [`validate_field`]. Password confirmation needs two
/// inputs and keeps its own function,
/// [`validate_password_confirmation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A person-name field with the given accepted character set.
    PersonName(NameStyle),
    /// An email address.
    Email,
    /// The login form's combined email-or-username field.
    LoginIdentifier,
    /// A sign-up username.
    Username,
    /// A sign-up password (length and composition checks).
    SignupPassword,
    /// A login password (length check only).
    LoginPassword,
    /// A phone number.
    Phone,
    /// A date of birth.
    DateOfBirth,
    /// A cinema visit date.
    VisitDate,
    /// A movie title.
    MovieTitle,
    /// A free-text feedback paragraph.
    FeedbackText,
    /// A star rating (set/unset only).
    StarRating,
    /// A numeric recommendation score (set/unset only).
    Recommendation,
}

/// Validates a raw field value against the rules for its kind.
///
/// # Arguments
///
/// * `kind` - The field kind to validate as
/// * `raw` - The raw field value (rating kinds use the empty string for
///   "not set")
/// * `today` - Today's date, used only by the date kinds
///
/// # Errors
///
/// Returns the first failing check's [`ValidationError`] for the field kind.
pub fn validate_field(kind: FieldKind, raw: &str, today: Date) -> Result<(), ValidationError> {
    match kind {
        FieldKind::PersonName(style) => validate_person_name(raw, style),
        FieldKind::Email => validate_email(raw),
        FieldKind::LoginIdentifier => validate_login_identifier(raw),
        FieldKind::Username => validate_username(raw),
        FieldKind::SignupPassword => validate_signup_password(raw),
        FieldKind::LoginPassword => validate_login_password(raw),
        FieldKind::Phone => validate_phone(raw),
        FieldKind::DateOfBirth => validate_date_of_birth(raw, today),
        FieldKind::VisitDate => validate_visit_date(raw, today),
        FieldKind::MovieTitle => validate_movie_title(raw),
        FieldKind::FeedbackText => validate_feedback_text(raw),
        FieldKind::StarRating => validate_rating(raw),
        FieldKind::Recommendation => validate_recommendation(raw),
    }
}

/// Validates a person name.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty, shorter than 2
/// characters, or contains a character outside the accepted set for `style`.
pub fn validate_person_name(value: &str, style: NameStyle) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    // Rule: required first, then length, then character scan.
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "Name" });
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::TooShort {
            field: "Name",
            min: 2,
        });
    }

    for c in trimmed.chars() {
        let accepted: bool = match style {
            NameStyle::LettersAndSpaces => c.is_ascii_alphabetic() || c == ' ',
            NameStyle::LettersSpacesHyphensApostrophes => {
                c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\''
            }
        };
        if !accepted {
            let allowed: &'static str = match style {
                NameStyle::LettersAndSpaces => "letters and spaces",
                NameStyle::LettersSpacesHyphensApostrophes => {
                    "letters, spaces, hyphens, and apostrophes"
                }
            };
            return Err(ValidationError::InvalidCharacter {
                field: "Name",
                allowed,
            });
        }
    }

    Ok(())
}

/// Validates an email address with the site's hand-rolled algorithm.
///
/// This is deliberately not a generic email regex: the exact check order is
/// part of the contract, because each malformed input must produce its
/// specific rejection reason. All checks are ASCII-only; there is no
/// internationalized-domain support.
///
/// # Errors
///
/// Returns the first failing check's reason, in this order: required, no
/// spaces, `@` placement, domain-dot placement, domain-name content, TLD
/// length, TLD content.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }
    if trimmed.contains(' ') {
        return Err(ValidationError::EmailContainsSpace);
    }

    let Some(first_at) = trimmed.find('@') else {
        return Err(ValidationError::EmailMissingAt);
    };
    let last_at: usize = trimmed.rfind('@').unwrap_or(first_at);
    if first_at != last_at {
        return Err(ValidationError::EmailMultipleAt);
    }
    if first_at == 0 {
        return Err(ValidationError::EmailStartsWithAt);
    }
    if first_at == trimmed.len() - 1 {
        return Err(ValidationError::EmailEndsWithAt);
    }

    // Everything after the @: domain name plus TLD.
    let domain_with_tld: &str = &trimmed[first_at + 1..];
    let Some(last_dot) = domain_with_tld.rfind('.') else {
        return Err(ValidationError::DomainMissingDot);
    };
    if last_dot == 0 {
        return Err(ValidationError::DomainStartsWithDot);
    }
    if last_dot == domain_with_tld.len() - 1 {
        return Err(ValidationError::DomainEndsWithDot);
    }

    let domain_name: &str = &domain_with_tld[..last_dot];
    let tld: &str = &domain_with_tld[last_dot + 1..];

    if domain_name.is_empty() {
        return Err(ValidationError::DomainNameMissing);
    }
    if domain_name.contains("..") {
        return Err(ValidationError::DomainConsecutiveDots);
    }

    let domain_len: usize = domain_name.len();
    for (i, c) in domain_name.char_indices() {
        if !(c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::DomainInvalidCharacter);
        }
        if c == '-' && (i == 0 || i == domain_len - 1) {
            return Err(ValidationError::DomainHyphenAtEdge);
        }
    }

    if tld.chars().count() < 2 {
        return Err(ValidationError::TldTooShort { min: 2 });
    }
    for c in tld.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(ValidationError::TldInvalidCharacter);
        }
    }

    Ok(())
}

/// Validates the login form's combined email-or-username field.
///
/// A trimmed value containing `@` is validated with the full email rules;
/// anything else is validated as a username with no upper length bound (the
/// login form never enforced the 20-character cap).
///
/// # Errors
///
/// Returns an error if the value is empty, a malformed email, or a malformed
/// username.
pub fn validate_login_identifier(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "Email or Username",
        });
    }

    if trimmed.contains('@') {
        return validate_email(trimmed);
    }

    if trimmed.chars().count() < 3 {
        return Err(ValidationError::TooShort {
            field: "Username",
            min: 3,
        });
    }
    validate_username_characters(trimmed)
}

/// Validates a sign-up username.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty, shorter than 3 or longer
/// than 20 characters, or contains a character outside letters, digits, and
/// underscore.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "Username" });
    }
    let len: usize = trimmed.chars().count();
    if len < 3 {
        return Err(ValidationError::TooShort {
            field: "Username",
            min: 3,
        });
    }
    if len > 20 {
        return Err(ValidationError::TooLong {
            field: "Username",
            max: 20,
        });
    }
    validate_username_characters(trimmed)
}

fn validate_username_characters(value: &str) -> Result<(), ValidationError> {
    for c in value.chars() {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacter {
                field: "Username",
                allowed: "letters, numbers, and underscores",
            });
        }
    }
    Ok(())
}

/// Validates a sign-up password.
///
/// Composition checks run in a fixed order - lowercase, uppercase, digit -
/// and the first missing class wins.
///
/// # Errors
///
/// Returns an error if the password is empty, shorter than 8 characters, or
/// missing a lowercase letter, an uppercase letter, or a digit.
pub fn validate_signup_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::TooShort {
            field: "Password",
            min: 8,
        });
    }

    let mut has_lowercase: bool = false;
    let mut has_uppercase: bool = false;
    let mut has_digit: bool = false;
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_uppercase() {
            has_uppercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        }
    }

    if !has_lowercase {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !has_uppercase {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !has_digit {
        return Err(ValidationError::PasswordMissingDigit);
    }

    Ok(())
}

/// Validates a login password. Weaker than the sign-up rule: length only.
///
/// # Errors
///
/// Returns an error if the password is empty or shorter than 6 characters.
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    if password.chars().count() < 6 {
        return Err(ValidationError::TooShort {
            field: "Password",
            min: 6,
        });
    }
    Ok(())
}

/// Validates that a password confirmation matches the primary password.
///
/// Both fields empty is accepted here; the primary password's own required
/// check reports that case.
///
/// # Errors
///
/// Returns an error if the confirmation is empty while the password is not,
/// or if both are non-empty and differ.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if confirmation.is_empty() && !password.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if !confirmation.is_empty() && password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validates a phone number.
///
/// A single leading `+` is allowed; spaces, hyphens, and parentheses are
/// discarded as separators; digits are counted. Any other character rejects
/// the value. The digit count (excluding the `+`) must be between 7 and 15
/// inclusive.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty, contains an invalid
/// character, or has a digit count outside 7..=15.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "Phone number",
        });
    }

    let mut digit_count: u32 = 0;
    for (i, c) in trimmed.chars().enumerate() {
        match c {
            '+' if i == 0 => {}
            '0'..='9' => digit_count += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(ValidationError::PhoneInvalidCharacter),
        }
    }

    if !(7..=15).contains(&digit_count) {
        return Err(ValidationError::PhoneDigitCount { min: 7, max: 15 });
    }
    Ok(())
}

/// Validates a movie title.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or shorter than 2
/// characters.
pub fn validate_movie_title(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "Movie title",
        });
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::TooShort {
            field: "Movie title",
            min: 2,
        });
    }
    Ok(())
}

/// Validates a free-text feedback paragraph.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or shorter than 10
/// characters.
pub fn validate_feedback_text(value: &str) -> Result<(), ValidationError> {
    let trimmed: &str = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "This field",
        });
    }
    if trimmed.chars().count() < 10 {
        return Err(ValidationError::FeedbackTooShort { min: 10 });
    }
    Ok(())
}

/// Validates a star rating. Valid iff a value has been explicitly set.
///
/// # Errors
///
/// Returns an error if no rating has been set (empty raw value).
pub fn validate_rating(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::RatingMissing);
    }
    Ok(())
}

/// Validates a numeric recommendation score. Valid iff explicitly set.
///
/// # Errors
///
/// Returns an error if no score has been set (empty raw value).
pub fn validate_recommendation(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::RecommendationMissing);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_required_check_runs_first() {
        let result = validate_person_name("   ", NameStyle::LettersAndSpaces);

        assert_eq!(result, Err(ValidationError::Required { field: "Name" }));
    }

    #[test]
    fn test_person_name_length_before_character_scan() {
        // A single invalid character fails the length check, not the scan.
        let result = validate_person_name("7", NameStyle::LettersAndSpaces);

        assert_eq!(
            result,
            Err(ValidationError::TooShort {
                field: "Name",
                min: 2
            })
        );
    }

    #[test]
    fn test_person_name_rejects_digits() {
        let result = validate_person_name("Anna3", NameStyle::LettersAndSpaces);

        assert!(matches!(
            result,
            Err(ValidationError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_person_name_hyphen_depends_on_style() {
        assert!(
            validate_person_name("Jean-Luc", NameStyle::LettersSpacesHyphensApostrophes).is_ok()
        );
        assert!(validate_person_name("Jean-Luc", NameStyle::LettersAndSpaces).is_err());
    }

    #[test]
    fn test_person_name_apostrophe_in_signup_style() {
        assert!(validate_person_name("O'Brien", NameStyle::LettersSpacesHyphensApostrophes).is_ok());
    }

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(validate_email("user@example.com").is_ok());
    }

    #[test]
    fn test_email_space_rejection_wins_over_everything_else() {
        // Any string containing a space is rejected for the space, regardless
        // of other content.
        assert_eq!(
            validate_email("user name@example.com"),
            Err(ValidationError::EmailContainsSpace)
        );
        assert_eq!(
            validate_email("no at sign here"),
            Err(ValidationError::EmailContainsSpace)
        );
    }

    #[test]
    fn test_email_rejects_multiple_at_symbols() {
        assert_eq!(
            validate_email("user@@example.com"),
            Err(ValidationError::EmailMultipleAt)
        );
    }

    #[test]
    fn test_email_rejects_at_at_either_end() {
        assert_eq!(
            validate_email("@example.com"),
            Err(ValidationError::EmailStartsWithAt)
        );
        assert_eq!(validate_email("user@"), Err(ValidationError::EmailEndsWithAt));
    }

    #[test]
    fn test_email_rejects_missing_domain_dot() {
        assert_eq!(
            validate_email("user@example"),
            Err(ValidationError::DomainMissingDot)
        );
    }

    #[test]
    fn test_email_rejects_dot_at_domain_edges() {
        assert_eq!(
            validate_email("user@.com"),
            Err(ValidationError::DomainStartsWithDot)
        );
        assert_eq!(
            validate_email("user@example."),
            Err(ValidationError::DomainEndsWithDot)
        );
    }

    #[test]
    fn test_email_rejects_consecutive_dots_in_domain() {
        assert_eq!(
            validate_email("user@ex..com"),
            Err(ValidationError::DomainConsecutiveDots)
        );
    }

    #[test]
    fn test_email_rejects_domain_hyphen_at_edge() {
        assert_eq!(
            validate_email("user@-example.com"),
            Err(ValidationError::DomainHyphenAtEdge)
        );
        assert!(validate_email("user@my-example.com").is_ok());
    }

    #[test]
    fn test_email_rejects_underscore_in_domain() {
        assert_eq!(
            validate_email("user@ex_ample.com"),
            Err(ValidationError::DomainInvalidCharacter)
        );
    }

    #[test]
    fn test_email_rejects_short_tld() {
        assert_eq!(
            validate_email("user@example.c"),
            Err(ValidationError::TldTooShort { min: 2 })
        );
    }

    #[test]
    fn test_email_rejects_digits_in_tld() {
        assert_eq!(
            validate_email("user@example.c0m"),
            Err(ValidationError::TldInvalidCharacter)
        );
    }

    #[test]
    fn test_email_allows_dots_in_local_part() {
        assert!(validate_email("first.last@example.com").is_ok());
    }

    #[test]
    fn test_login_identifier_dispatches_on_at_symbol() {
        assert!(validate_login_identifier("user@example.com").is_ok());
        assert!(validate_login_identifier("some_user42").is_ok());
        assert_eq!(
            validate_login_identifier("user@@example.com"),
            Err(ValidationError::EmailMultipleAt)
        );
    }

    #[test]
    fn test_login_identifier_has_no_upper_length_bound() {
        let long: String = "a".repeat(40);

        assert!(validate_login_identifier(&long).is_ok());
        assert!(validate_username(&long).is_err());
    }

    #[test]
    fn test_login_identifier_rejects_short_username() {
        assert_eq!(
            validate_login_identifier("ab"),
            Err(ValidationError::TooShort {
                field: "Username",
                min: 3
            })
        );
    }

    #[test]
    fn test_username_length_boundaries_are_inclusive() {
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"a".repeat(20)).is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_username_rejects_hyphen() {
        assert!(matches!(
            validate_username("some-user"),
            Err(ValidationError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_signup_password_composition_order_is_fixed() {
        // No uppercase and no digit: the uppercase check fires first.
        assert_eq!(
            validate_signup_password("abcdefgh"),
            Err(ValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_signup_password("ABCDEFGH"),
            Err(ValidationError::PasswordMissingLowercase)
        );
        assert_eq!(
            validate_signup_password("Abcdefgh"),
            Err(ValidationError::PasswordMissingDigit)
        );
    }

    #[test]
    fn test_signup_password_accepts_all_three_classes() {
        assert!(validate_signup_password("Abcdefg1").is_ok());
    }

    #[test]
    fn test_signup_password_length_before_composition() {
        assert_eq!(
            validate_signup_password("Ab1"),
            Err(ValidationError::TooShort {
                field: "Password",
                min: 8
            })
        );
    }

    #[test]
    fn test_login_password_has_no_composition_checks() {
        assert!(validate_login_password("abcdef").is_ok());
        assert_eq!(
            validate_login_password("abcde"),
            Err(ValidationError::TooShort {
                field: "Password",
                min: 6
            })
        );
    }

    #[test]
    fn test_password_confirmation_rules() {
        assert!(validate_password_confirmation("", "").is_ok());
        assert_eq!(
            validate_password_confirmation("Secret12", ""),
            Err(ValidationError::ConfirmationRequired)
        );
        assert_eq!(
            validate_password_confirmation("Secret12", "Secret13"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_password_confirmation("Secret12", "Secret12").is_ok());
    }

    #[test]
    fn test_phone_digit_count_boundaries() {
        assert!(validate_phone("1234567").is_ok());
        assert_eq!(
            validate_phone("123456"),
            Err(ValidationError::PhoneDigitCount { min: 7, max: 15 })
        );
        assert!(validate_phone("123456789012345").is_ok());
        assert_eq!(
            validate_phone("1234567890123456"),
            Err(ValidationError::PhoneDigitCount { min: 7, max: 15 })
        );
    }

    #[test]
    fn test_phone_separators_are_discarded_not_counted() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
    }

    #[test]
    fn test_phone_plus_only_allowed_at_start() {
        assert_eq!(
            validate_phone("555+1234567"),
            Err(ValidationError::PhoneInvalidCharacter)
        );
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert_eq!(
            validate_phone("555-CALL-NOW"),
            Err(ValidationError::PhoneInvalidCharacter)
        );
    }

    #[test]
    fn test_movie_title_minimum_length() {
        assert!(validate_movie_title("Up").is_ok());
        assert_eq!(
            validate_movie_title("U"),
            Err(ValidationError::TooShort {
                field: "Movie title",
                min: 2
            })
        );
    }

    #[test]
    fn test_feedback_text_minimum_length() {
        assert!(validate_feedback_text("Great sound system").is_ok());
        assert_eq!(
            validate_feedback_text("Nice"),
            Err(ValidationError::FeedbackTooShort { min: 10 })
        );
    }

    #[test]
    fn test_ratings_only_fail_when_unset() {
        assert_eq!(validate_rating(""), Err(ValidationError::RatingMissing));
        assert!(validate_rating("4").is_ok());
        assert_eq!(
            validate_recommendation(""),
            Err(ValidationError::RecommendationMissing)
        );
        assert!(validate_recommendation("9").is_ok());
    }

    #[test]
    fn test_validate_field_dispatches_by_kind() {
        let today: Date = time::macros::date!(2026 - 08 - 23);

        assert!(validate_field(FieldKind::Email, "user@example.com", today).is_ok());
        assert_eq!(
            validate_field(FieldKind::Phone, "123", today),
            Err(ValidationError::PhoneDigitCount { min: 7, max: 15 })
        );
        assert!(validate_field(FieldKind::DateOfBirth, "2000-01-15", today).is_ok());
    }
}
