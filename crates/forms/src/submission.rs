// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FormError;
use time::{Duration, OffsetDateTime};

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// No submission running.
    #[default]
    Idle,
    /// Submitting; succeeds once the ready instant passes.
    Submitting {
        /// When the simulated processing completes.
        ready_at: OffsetDateTime,
    },
    /// The success state is showing.
    Succeeded,
}

/// Drives the submit-button lifecycle: idle, a fixed processing delay, then
/// success.
///
/// The delay simulates server processing; nothing is actually sent. The
/// button must be disabled for the whole `Submitting` window so a double
/// click cannot start a second submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    state: FlowState,
}

impl SubmissionFlow {
    /// Creates an idle flow.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FlowState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.state
    }

    /// Starts a submission that completes `delay` after `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if a submission is already running or the success
    /// state is still showing.
    pub fn begin(&mut self, now: OffsetDateTime, delay: Duration) -> Result<(), FormError> {
        if self.state != FlowState::Idle {
            return Err(FormError::SubmissionInProgress);
        }
        self.state = FlowState::Submitting {
            ready_at: now + delay,
        };
        Ok(())
    }

    /// Advances the flow. Returns `true` exactly once, on the tick where the
    /// processing delay has elapsed.
    pub fn tick(&mut self, now: OffsetDateTime) -> bool {
        if let FlowState::Submitting { ready_at } = self.state
            && now >= ready_at
        {
            self.state = FlowState::Succeeded;
            return true;
        }
        false
    }

    /// Returns to idle, ready for another submission.
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
    }
}
