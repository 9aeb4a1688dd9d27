// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::controller::FieldController;
use crate::error::FormError;
use crate::submission::{FlowState, SubmissionFlow};
use cine_book::Clock;
use cine_book_domain::FieldKind;
use time::{Date, Duration};

/// Simulated processing time for a login submission.
pub const LOGIN_SUBMIT_DELAY: Duration = Duration::milliseconds(1500);

/// The login page's form state: one combined email-or-username field and a
/// password with the relaxed length-only rule.
#[derive(Debug)]
pub struct LoginForm<C: Clock> {
    clock: C,
    /// The combined email-or-username field.
    pub identifier: FieldController,
    /// The password field.
    pub password: FieldController,
    remember_me: bool,
    flow: SubmissionFlow,
}

impl<C: Clock> LoginForm<C> {
    /// Creates an empty login form.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            identifier: FieldController::new(FieldKind::LoginIdentifier),
            password: FieldController::new(FieldKind::LoginPassword),
            remember_me: false,
            flow: SubmissionFlow::new(),
        }
    }

    /// Returns today per the form's clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.now().date()
    }

    /// Ticks or unticks the remember-me checkbox.
    pub const fn set_remember_me(&mut self, remembered: bool) {
        self.remember_me = remembered;
    }

    /// Returns whether remember-me is ticked.
    #[must_use]
    pub const fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Returns the current submission flow state.
    #[must_use]
    pub const fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Attempts to submit: validates both fields, then starts the
    /// processing delay.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is invalid or a submission is
    /// already running.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let today: Date = self.today();

        let identifier_ok: bool = self.identifier.validate(today);
        let password_ok: bool = self.password.validate(today);
        if !(identifier_ok && password_ok) {
            return Err(FormError::FieldsInvalid);
        }

        self.flow.begin(self.clock.now(), LOGIN_SUBMIT_DELAY)
    }

    /// Advances the submission flow. Returns `true` exactly once, when the
    /// processing delay elapses.
    pub fn tick(&mut self) -> bool {
        self.flow.tick(self.clock.now())
    }
}
