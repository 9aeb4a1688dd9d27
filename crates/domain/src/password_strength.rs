// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password strength scoring for the sign-up form's live meter.
//!
//! Scoring is advisory only and never blocks submission; the hard rules
//! live in [`crate::validate_signup_password`].

/// Special characters that earn the symbol point.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\",./<>?";

/// Scores a password in half-point increments, clamped to 5.0.
///
/// One point each for length of at least 8 (half a point for 5 to 7),
/// a lowercase letter, an uppercase letter, a digit, and a special
/// character. The empty password scores 0.0.
#[must_use]
pub fn strength_score(password: &str) -> f32 {
    if password.is_empty() {
        return 0.0;
    }

    let mut score: f32 = 0.0;
    let length: usize = password.chars().count();
    if length >= 8 {
        score += 1.0;
    } else if length >= 5 {
        score += 0.5;
    }

    let mut has_lowercase: bool = false;
    let mut has_uppercase: bool = false;
    let mut has_digit: bool = false;
    let mut has_special: bool = false;
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_uppercase() {
            has_uppercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if SPECIAL_CHARACTERS.contains(c) {
            has_special = true;
        }
    }

    if has_lowercase {
        score += 1.0;
    }
    if has_uppercase {
        score += 1.0;
    }
    if has_digit {
        score += 1.0;
    }
    if has_special {
        score += 1.0;
    }

    score.min(5.0)
}

/// Converts a raw score into the meter's display level, 0 through 5.
///
/// Level 0 means the meter is blank (empty password). Any non-empty
/// password shows at least level 1; fractional scores round up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn strength_level(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }
    let score: f32 = strength_score(password);
    // The smallest nonzero score is 0.5.
    if score < 0.5 {
        return 1;
    }
    (score.ceil() as u8).clamp(1, 5)
}

/// Returns the meter label for a display level from [`strength_level`].
///
/// Level 0 has no label (the meter shows its idle caption instead).
#[must_use]
pub const fn strength_label(level: u8) -> Option<&'static str> {
    match level {
        1 => Some("Very Weak"),
        2 => Some("Weak"),
        3 => Some("Fair"),
        4 => Some("Good"),
        5 => Some("Strong"),
        _ => None,
    }
}
