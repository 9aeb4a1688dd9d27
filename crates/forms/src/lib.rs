// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod controller;
mod error;
mod feedback;
mod login;
mod payment;
mod signup;
mod submission;

#[cfg(test)]
mod tests;

pub use controller::{FieldController, VisualState};
pub use error::FormError;
pub use feedback::{FEEDBACK_SUBMIT_DELAY, FeedbackForm};
pub use login::{LOGIN_SUBMIT_DELAY, LoginForm};
pub use payment::{PAYMENT_SUBMIT_DELAY, PaymentFlow};
pub use signup::{SIGNUP_SUBMIT_DELAY, SignupForm};
pub use submission::{FlowState, SubmissionFlow};
