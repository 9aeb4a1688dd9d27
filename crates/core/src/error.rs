// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can block a checkout.
///
/// Cart commands themselves are total; only the checkout step can refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no selected seats.
    NoSeatsSelected,
    /// No payment method has been chosen.
    NoPaymentMethod,
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSeatsSelected => {
                write!(f, "Please select at least one seat to continue.")
            }
            Self::NoPaymentMethod => write!(f, "Please select a payment method."),
        }
    }
}

impl std::error::Error for CheckoutError {}
