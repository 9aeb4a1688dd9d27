// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FormError;
use crate::submission::{FlowState, SubmissionFlow};
use cine_book::{Clock, OrderNumber, validate_checkout};
use cine_book_audit::{Cause, SessionId};
use cine_book_domain::{PaymentMethod, SeatId};
use cine_book_persistence::OrderCalculator;
use cine_book_persistence::backend::StorageBackend;
use rand::Rng;
use time::Duration;

/// Simulated processing time for a payment submission.
pub const PAYMENT_SUBMIT_DELAY: Duration = Duration::seconds(2);

/// The payment page's flow: the persisted calculator plus the confirm
/// button's lifecycle.
///
/// Validation happens when the visitor presses confirm; the checkout itself
/// (and the order number) only happens once the processing delay elapses,
/// so an abandoned page never half-completes an order.
#[derive(Debug)]
pub struct PaymentFlow<B: StorageBackend, C: Clock + Clone> {
    calculator: OrderCalculator<B, C>,
    clock: C,
    flow: SubmissionFlow,
    order: Option<OrderNumber>,
}

impl<B: StorageBackend, C: Clock + Clone> PaymentFlow<B, C> {
    /// Creates the flow, restoring any saved cart. Visa starts selected,
    /// matching the page's default radio.
    #[must_use]
    pub fn new(backend: B, clock: C, session: SessionId, occupied: &[SeatId]) -> Self {
        let mut calculator: OrderCalculator<B, C> =
            OrderCalculator::new(backend, clock.clone(), session, occupied);
        calculator.select_payment(PaymentMethod::Visa);

        Self {
            calculator,
            clock,
            flow: SubmissionFlow::new(),
            order: None,
        }
    }

    /// Returns the underlying calculator.
    #[must_use]
    pub const fn calculator(&self) -> &OrderCalculator<B, C> {
        &self.calculator
    }

    /// Returns the underlying calculator for cart edits.
    pub const fn calculator_mut(&mut self) -> &mut OrderCalculator<B, C> {
        &mut self.calculator
    }

    /// Picks a payment method radio.
    pub const fn select_payment(&mut self, method: PaymentMethod) {
        self.calculator.select_payment(method);
    }

    /// Returns the current flow state.
    #[must_use]
    pub const fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Returns the confirmed order number, once checkout has completed.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderNumber> {
        self.order.as_ref()
    }

    /// Handles the confirm button: validates the cart and payment
    /// selection, then starts the processing delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart has no seats, no payment method is
    /// selected, or a submission is already running.
    pub fn confirm(&mut self) -> Result<(), FormError> {
        validate_checkout(self.calculator.state(), self.calculator.payment())?;
        self.flow.begin(self.clock.now(), PAYMENT_SUBMIT_DELAY)
    }

    /// Advances the flow. On the completing tick the checkout runs: the
    /// order number is recorded, the cart empties, and the saved copy is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart changed since [`Self::confirm`] and no
    /// longer passes checkout; the flow resets to idle in that case.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Result<bool, FormError> {
        if !self.flow.tick(self.clock.now()) {
            return Ok(false);
        }

        match self.calculator.checkout(rng) {
            Ok(order) => {
                self.order = Some(order);
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "checkout failed after the processing delay");
                self.flow.reset();
                Err(err.into())
            }
        }
    }

    /// Handles the confirmation screen's home button: clears everything for
    /// the next booking.
    pub fn go_home(&mut self) {
        self.calculator.reset(Cause::UiEvent(String::from("go-home")));
        self.calculator.select_payment(PaymentMethod::Visa);
        self.flow.reset();
        self.order = None;
    }
}
