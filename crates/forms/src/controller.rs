// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book_domain::{FieldKind, ValidationError, validate_field};
use time::Date;

/// How a field is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Untouched, or edited since its last failed check.
    #[default]
    Neutral,
    /// Last check passed.
    Valid,
    /// Last check failed; the error message is showing.
    Invalid,
}

/// One form field: its raw value, visual state, and current error.
///
/// The interaction contract is the same for every field. Leaving the field
/// (blur) always validates. Typing (input) revalidates only while an error
/// is showing, so the message clears as soon as the value becomes
/// acceptable but never appears mid-typing.
#[derive(Debug, Clone)]
pub struct FieldController {
    kind: FieldKind,
    value: String,
    visual: VisualState,
    error: Option<ValidationError>,
}

impl FieldController {
    /// Creates a neutral, empty controller for a field kind.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            visual: VisualState::Neutral,
            error: None,
        }
    }

    /// Returns the raw field value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the current visual state.
    #[must_use]
    pub const fn visual(&self) -> VisualState {
        self.visual
    }

    /// Returns the error currently showing, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Handles a keystroke: stores the value and, only if an error is
    /// showing, revalidates.
    pub fn input(&mut self, raw: &str, today: Date) {
        self.value = raw.to_string();
        if self.visual == VisualState::Invalid {
            self.validate(today);
        }
    }

    /// Handles the field losing focus: always validates.
    pub fn blur(&mut self, today: Date) {
        self.validate(today);
    }

    /// Validates the current value, updating the visual state and error.
    /// Returns whether the value passed.
    pub fn validate(&mut self, today: Date) -> bool {
        match validate_field(self.kind, &self.value, today) {
            Ok(()) => {
                self.visual = VisualState::Valid;
                self.error = None;
                true
            }
            Err(err) => {
                self.visual = VisualState::Invalid;
                self.error = Some(err);
                false
            }
        }
    }

    /// Returns to the untouched state with an empty value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.visual = VisualState::Neutral;
        self.error = None;
    }
}
