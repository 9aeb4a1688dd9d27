// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::store::{BookingStore, LoadOutcome};
use cine_book::{
    CartState, CheckoutError, Clock, Command, Invoice, OrderNumber, TransitionResult, apply,
    finish_transaction, invoice_for,
};
use cine_book_audit::{Action, Actor, AuditEvent, Cause, SessionId};
use cine_book_domain::{ConcessionItem, PaymentMethod, SeatId};
use rand::Rng;

/// The order calculator: a persisted cart plus its derived invoice.
///
/// Every mutation goes through the pure [`apply`] function, appends the
/// resulting audit event to the session trail, and then saves the new cart.
/// A failing save never blocks the mutation: the calculator keeps working
/// in memory and logs the degradation, matching how the pages behave when
/// storage is unavailable.
#[derive(Debug)]
pub struct OrderCalculator<B: StorageBackend, C: Clock> {
    store: BookingStore<B>,
    clock: C,
    session: SessionId,
    state: CartState,
    payment: Option<PaymentMethod>,
    trail: Vec<AuditEvent>,
}

impl<B: StorageBackend, C: Clock> OrderCalculator<B, C> {
    /// Creates a calculator, restoring any usable saved cart.
    ///
    /// Restore degrades to an empty cart when the backend fails; a missing
    /// save is simply an empty cart. An expired save is discarded and noted
    /// in the trail.
    ///
    /// # Arguments
    ///
    /// * `backend` - The storage backend for saved carts
    /// * `clock` - The time source for expiry and checkout
    /// * `session` - The session the audit trail belongs to
    /// * `occupied` - Seats taken by other bookings, never restorable
    #[must_use]
    pub fn new(backend: B, clock: C, session: SessionId, occupied: &[SeatId]) -> Self {
        let store: BookingStore<B> = BookingStore::new(backend);
        let (state, expired): (CartState, bool) = match store.load(clock.now(), occupied) {
            Ok(LoadOutcome::Restored(state)) => (state, false),
            Ok(LoadOutcome::Expired) => (CartState::new(), true),
            Ok(LoadOutcome::Empty) => (CartState::new(), false),
            Err(err) => {
                tracing::warn!(error = %err, "cart restore failed, starting empty");
                (CartState::new(), false)
            }
        };

        let mut calculator: Self = Self {
            store,
            clock,
            session,
            state,
            payment: None,
            trail: Vec::new(),
        };
        if expired {
            calculator.record_expiry();
        } else if !calculator.state.is_empty() {
            calculator.record_restore();
        }
        calculator
    }

    /// Returns the current cart.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Returns the invoice derived from the current cart.
    #[must_use]
    pub fn invoice(&self) -> Invoice {
        invoice_for(&self.state)
    }

    /// Returns the session's audit trail, oldest first.
    #[must_use]
    pub fn trail(&self) -> &[AuditEvent] {
        &self.trail
    }

    /// Returns the chosen payment method, if any.
    #[must_use]
    pub const fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    /// Chooses the payment method for checkout.
    pub const fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    /// Toggles a seat and persists the new cart.
    pub fn toggle_seat(&mut self, seat: SeatId, cause: Cause) {
        self.mutate(Command::ToggleSeat { seat }, Actor::Visitor, cause);
    }

    /// Adjusts a concession quantity and persists the new cart.
    pub fn adjust_quantity(&mut self, item: ConcessionItem, delta: i32, cause: Cause) {
        self.mutate(Command::AdjustQuantity { item, delta }, Actor::Visitor, cause);
    }

    /// Empties the cart, persists, and forgets the payment selection.
    pub fn reset(&mut self, cause: Cause) {
        self.mutate(Command::Reset, Actor::Visitor, cause);
        self.payment = None;
    }

    /// Completes checkout: validates, produces the order number, empties the
    /// cart, and removes the saved copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart has no seats or no payment method is
    /// chosen; the cart is left untouched in that case.
    pub fn checkout<R: Rng>(&mut self, rng: &mut R) -> Result<OrderNumber, CheckoutError> {
        let order: OrderNumber =
            finish_transaction(&self.state, self.payment, &self.clock, rng)?;

        let result: TransitionResult = apply(
            &self.state,
            Command::Reset,
            Actor::System,
            Cause::Checkout,
            &self.session,
        );
        self.state = result.new_state;
        self.trail.push(result.audit_event);
        self.payment = None;

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear saved cart after checkout");
        }

        Ok(order)
    }

    fn mutate(&mut self, command: Command, actor: Actor, cause: Cause) {
        let result: TransitionResult = apply(&self.state, command, actor, cause, &self.session);
        self.state = result.new_state;
        self.trail.push(result.audit_event);

        if let Err(err) = self.store.save(&self.state, self.clock.now()) {
            tracing::warn!(error = %err, "failed to persist cart state");
        }
    }

    fn record_restore(&mut self) {
        let event: AuditEvent = AuditEvent::new(
            self.session.clone(),
            Actor::System,
            Cause::Restore,
            Action::new(
                String::from("Restore"),
                Some(format!("Restored {} seat(s)", self.state.seat_count())),
            ),
            CartState::new().to_snapshot(),
            self.state.to_snapshot(),
        );
        self.trail.push(event);
    }

    fn record_expiry(&mut self) {
        let event: AuditEvent = AuditEvent::new(
            self.session.clone(),
            Actor::System,
            Cause::Expiry,
            Action::new(
                String::from("Expire"),
                Some(String::from("Discarded a saved cart past its lifetime")),
            ),
            CartState::new().to_snapshot(),
            CartState::new().to_snapshot(),
        );
        self.trail.push(event);
    }
}
