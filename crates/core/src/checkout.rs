// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::CheckoutError;
use crate::state::CartState;
use cine_book_domain::PaymentMethod;
use rand::{Rng, RngExt};

/// A confirmed order's display number, e.g., `#43201057`.
///
/// Built from the last five digits of the checkout instant in milliseconds
/// plus a three-digit zero-padded random serial. Not globally unique; it
/// only needs to look distinct on a confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNumber {
    value: String,
}

impl OrderNumber {
    /// Returns the display string, including the leading `#`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Checks whether a cart and payment selection are ready for checkout.
///
/// # Errors
///
/// Returns an error if the cart has no seats, or if seats are selected but
/// no payment method is chosen. The seat check runs first.
pub fn validate_checkout(
    state: &CartState,
    payment: Option<PaymentMethod>,
) -> Result<(), CheckoutError> {
    if state.seats.is_empty() {
        return Err(CheckoutError::NoSeatsSelected);
    }
    if payment.is_none() {
        return Err(CheckoutError::NoPaymentMethod);
    }
    Ok(())
}

/// Completes a checkout, returning the confirmed order number.
///
/// # Arguments
///
/// * `state` - The cart being checked out
/// * `payment` - The chosen payment method, if any
/// * `clock` - The time source for the order number
/// * `rng` - The randomness source for the order serial
///
/// # Errors
///
/// Returns an error if [`validate_checkout`] rejects the cart or payment
/// selection.
pub fn finish_transaction<C: Clock, R: Rng>(
    state: &CartState,
    payment: Option<PaymentMethod>,
    clock: &C,
    rng: &mut R,
) -> Result<OrderNumber, CheckoutError> {
    validate_checkout(state, payment)?;

    let millis: String = clock.now_ms().to_string();
    let tail_start: usize = millis.len().saturating_sub(5);
    let serial: u32 = rng.random_range(0..1000);

    Ok(OrderNumber {
        value: format!("#{}{serial:03}", &millis[tail_start..]),
    })
}
