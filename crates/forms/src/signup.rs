// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::controller::FieldController;
use crate::error::FormError;
use crate::submission::{FlowState, SubmissionFlow};
use cine_book::Clock;
use cine_book_domain::{
    FieldKind, NameStyle, ValidationError, strength_label, strength_level,
    validate_password_confirmation, validate_signup_password,
};
use time::{Date, Duration};

/// Simulated processing time for a sign-up submission.
pub const SIGNUP_SUBMIT_DELAY: Duration = Duration::seconds(2);

/// The sign-up page's form state.
///
/// Six fields follow the standard blur/input contract. The password pair is
/// different: the password revalidates on every keystroke so the strength
/// meter stays live, and the confirmation revalidates whenever either side
/// changes.
#[derive(Debug)]
pub struct SignupForm<C: Clock> {
    clock: C,
    /// First name field.
    pub first_name: FieldController,
    /// Last name field.
    pub last_name: FieldController,
    /// Email field.
    pub email: FieldController,
    /// Phone number field.
    pub phone: FieldController,
    /// Username field.
    pub username: FieldController,
    /// Date of birth field.
    pub date_of_birth: FieldController,
    password: String,
    password_error: Option<ValidationError>,
    confirmation: String,
    confirmation_error: Option<ValidationError>,
    terms_accepted: bool,
    flow: SubmissionFlow,
}

impl<C: Clock> SignupForm<C> {
    /// Creates an empty sign-up form.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            first_name: FieldController::new(FieldKind::PersonName(
                NameStyle::LettersSpacesHyphensApostrophes,
            )),
            last_name: FieldController::new(FieldKind::PersonName(
                NameStyle::LettersSpacesHyphensApostrophes,
            )),
            email: FieldController::new(FieldKind::Email),
            phone: FieldController::new(FieldKind::Phone),
            username: FieldController::new(FieldKind::Username),
            date_of_birth: FieldController::new(FieldKind::DateOfBirth),
            password: String::new(),
            password_error: None,
            confirmation: String::new(),
            confirmation_error: None,
            terms_accepted: false,
            flow: SubmissionFlow::new(),
        }
    }

    /// Returns today per the form's clock, for the date field.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.now().date()
    }

    /// Handles a password keystroke: validates immediately and, when the
    /// confirmation is non-empty, rechecks the match.
    pub fn input_password(&mut self, raw: &str) {
        self.password = raw.to_string();
        self.password_error = validate_signup_password(&self.password).err();
        if !self.confirmation.is_empty() {
            self.confirmation_error =
                validate_password_confirmation(&self.password, &self.confirmation).err();
        }
    }

    /// Handles a confirmation keystroke: always rechecks the match.
    pub fn input_confirmation(&mut self, raw: &str) {
        self.confirmation = raw.to_string();
        self.confirmation_error =
            validate_password_confirmation(&self.password, &self.confirmation).err();
    }

    /// Returns the password error currently showing, if any.
    #[must_use]
    pub const fn password_error(&self) -> Option<&ValidationError> {
        self.password_error.as_ref()
    }

    /// Returns the confirmation error currently showing, if any.
    #[must_use]
    pub const fn confirmation_error(&self) -> Option<&ValidationError> {
        self.confirmation_error.as_ref()
    }

    /// Returns the strength meter level for the current password, 0 to 5.
    #[must_use]
    pub fn strength_level(&self) -> u8 {
        strength_level(&self.password)
    }

    /// Returns the strength meter label, or `None` while the meter is blank.
    #[must_use]
    pub fn strength_label(&self) -> Option<&'static str> {
        strength_label(self.strength_level())
    }

    /// Ticks or unticks the terms checkbox.
    pub const fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Returns the current submission flow state.
    #[must_use]
    pub const fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Attempts to submit: validates every field, then starts the
    /// processing delay.
    ///
    /// All fields are validated even after the first failure, so every
    /// problem is marked at once.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is invalid, the terms are not
    /// accepted, or a submission is already running.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let today: Date = self.today();

        let mut fields_ok: bool = true;
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.email,
            &mut self.phone,
            &mut self.username,
            &mut self.date_of_birth,
        ] {
            fields_ok &= field.validate(today);
        }

        self.password_error = validate_signup_password(&self.password).err();
        self.confirmation_error =
            validate_password_confirmation(&self.password, &self.confirmation).err();
        fields_ok &= self.password_error.is_none() && self.confirmation_error.is_none();

        if !fields_ok {
            return Err(FormError::FieldsInvalid);
        }
        if !self.terms_accepted {
            return Err(FormError::TermsNotAccepted);
        }

        self.flow.begin(self.clock.now(), SIGNUP_SUBMIT_DELAY)
    }

    /// Advances the submission flow. Returns `true` exactly once, when the
    /// processing delay elapses.
    pub fn tick(&mut self) -> bool {
        self.flow.tick(self.clock.now())
    }
}
