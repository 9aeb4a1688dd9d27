// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book::CheckoutError;
use cine_book_domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A single field failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Checkout preconditions are not met.
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// Submission was attempted with one or more invalid fields; each field
    /// shows its own message.
    #[error("Please fix the highlighted fields")]
    FieldsInvalid,

    /// The terms checkbox is not ticked.
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,

    /// A submission is already running; the button stays disabled until it
    /// finishes.
    #[error("Submission already in progress")]
    SubmissionInProgress,
}
