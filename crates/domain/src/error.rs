// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during field validation.
///
/// Each variant is a distinct, human-readable rejection reason. Validators
/// short-circuit: the first failing check's reason is returned, never an
/// aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    Required {
        /// The display label for the field (e.g., "Email").
        field: &'static str,
    },
    /// A field value is shorter than the minimum length.
    TooShort {
        /// The display label for the field.
        field: &'static str,
        /// The minimum accepted length.
        min: usize,
    },
    /// A field value is longer than the maximum length.
    TooLong {
        /// The display label for the field.
        field: &'static str,
        /// The maximum accepted length.
        max: usize,
    },
    /// A field value contains a character outside its accepted set.
    InvalidCharacter {
        /// The display label for the field.
        field: &'static str,
        /// A description of the accepted characters.
        allowed: &'static str,
    },
    /// A feedback paragraph is shorter than the minimum length.
    FeedbackTooShort {
        /// The minimum accepted length.
        min: usize,
    },
    /// An email address contains a space.
    EmailContainsSpace,
    /// An email address has no `@` symbol.
    EmailMissingAt,
    /// An email address has more than one `@` symbol.
    EmailMultipleAt,
    /// The `@` symbol is the first character (missing local part).
    EmailStartsWithAt,
    /// The `@` symbol is the last character (missing domain part).
    EmailEndsWithAt,
    /// The domain part has no dot.
    DomainMissingDot,
    /// The domain part starts with a dot immediately after the `@`.
    DomainStartsWithDot,
    /// The address ends with a dot (empty TLD position).
    DomainEndsWithDot,
    /// The domain name before the final dot is empty.
    DomainNameMissing,
    /// The domain name contains consecutive dots.
    DomainConsecutiveDots,
    /// The domain name contains a character outside letters, digits, hyphen.
    DomainInvalidCharacter,
    /// The domain name starts or ends with a hyphen.
    DomainHyphenAtEdge,
    /// The TLD is shorter than the minimum length.
    TldTooShort {
        /// The minimum accepted TLD length.
        min: usize,
    },
    /// The TLD contains a non-letter character.
    TldInvalidCharacter,
    /// A sign-up password has no lowercase letter.
    PasswordMissingLowercase,
    /// A sign-up password has no uppercase letter.
    PasswordMissingUppercase,
    /// A sign-up password has no digit.
    PasswordMissingDigit,
    /// The confirmation field is empty while the password is not.
    ConfirmationRequired,
    /// The password and its confirmation differ.
    PasswordMismatch,
    /// A phone number contains a character outside digits, separators, and a
    /// leading `+`.
    PhoneInvalidCharacter,
    /// A phone number has too few or too many digits.
    PhoneDigitCount {
        /// The minimum accepted digit count.
        min: u32,
        /// The maximum accepted digit count.
        max: u32,
    },
    /// A date field could not be parsed.
    DateUnparseable {
        /// The display label for the field (e.g., "date of birth").
        field: &'static str,
    },
    /// A date of birth is today or in the future.
    BirthDateNotInPast,
    /// The computed age is below the minimum.
    TooYoung {
        /// The minimum accepted age in whole years.
        min: u8,
    },
    /// The computed age is above the plausible maximum.
    AgeUnrealistic,
    /// A visit date is strictly after today.
    VisitDateInFuture,
    /// A star rating has not been set.
    RatingMissing,
    /// A recommendation score has not been set.
    RecommendationMissing,
    /// A concession item name is not one of the fixed set.
    UnknownConcession(String),
    /// A payment method name is not one of the fixed set.
    UnknownPaymentMethod(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::TooShort { field, min } => {
                write!(f, "{field} must be at least {min} characters")
            }
            Self::TooLong { field, max } => {
                write!(f, "{field} must be less than {max} characters")
            }
            Self::InvalidCharacter { field, allowed } => {
                write!(f, "{field} can only contain {allowed}")
            }
            Self::FeedbackTooShort { min } => {
                write!(
                    f,
                    "Please provide more detailed feedback (at least {min} characters)"
                )
            }
            Self::EmailContainsSpace => write!(f, "Email cannot contain spaces"),
            Self::EmailMissingAt => write!(f, "Email must contain an @ symbol"),
            Self::EmailMultipleAt => write!(f, "Email can only contain one @ symbol"),
            Self::EmailStartsWithAt => write!(f, "Email cannot start with @"),
            Self::EmailEndsWithAt => write!(f, "Email cannot end with @"),
            Self::DomainMissingDot => write!(f, "Domain must contain a dot (e.g., .com)"),
            Self::DomainStartsWithDot => write!(f, "Domain cannot start with a dot after @"),
            Self::DomainEndsWithDot => write!(f, "Email cannot end with a dot"),
            Self::DomainNameMissing => write!(f, "Domain name is missing"),
            Self::DomainConsecutiveDots => {
                write!(f, "Domain name cannot have consecutive dots")
            }
            Self::DomainInvalidCharacter => write!(f, "Domain contains invalid characters"),
            Self::DomainHyphenAtEdge => {
                write!(f, "Domain cannot start or end with a hyphen")
            }
            Self::TldTooShort { min } => write!(f, "TLD must be at least {min} characters"),
            Self::TldInvalidCharacter => write!(f, "TLD can only contain letters"),
            Self::PasswordMissingLowercase => write!(f, "Must contain a lowercase letter"),
            Self::PasswordMissingUppercase => write!(f, "Must contain an uppercase letter"),
            Self::PasswordMissingDigit => write!(f, "Must contain a number"),
            Self::ConfirmationRequired => write!(f, "Please confirm your password"),
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
            Self::PhoneInvalidCharacter => {
                write!(f, "Phone number contains invalid characters")
            }
            Self::PhoneDigitCount { min, max } => {
                write!(f, "Phone number must be between {min} and {max} digits")
            }
            Self::DateUnparseable { field } => {
                write!(f, "Invalid date format for {field}")
            }
            Self::BirthDateNotInPast => write!(f, "Date of birth must be in the past"),
            Self::TooYoung { min } => write!(f, "You must be at least {min} years old"),
            Self::AgeUnrealistic => {
                write!(f, "Please enter a valid date of birth (age unrealistic)")
            }
            Self::VisitDateInFuture => write!(f, "Visit date cannot be in the future"),
            Self::RatingMissing => write!(f, "Please provide a rating"),
            Self::RecommendationMissing => {
                write!(f, "Please select a recommendation score")
            }
            Self::UnknownConcession(name) => write!(f, "Unknown concession item: {name}"),
            Self::UnknownPaymentMethod(name) => write!(f, "Unknown payment method: {name}"),
        }
    }
}

impl std::error::Error for ValidationError {}
