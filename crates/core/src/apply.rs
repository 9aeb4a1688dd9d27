// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::{CartState, TransitionResult};
use cine_book_audit::{Action, Actor, AuditEvent, Cause, SessionId, StateSnapshot};
use cine_book_domain::SeatId;

/// Applies a command to the current cart, producing a new cart and audit
/// event.
///
/// The input cart is never mutated. Commands are total, so this function is
/// infallible: toggling an already-selected seat deselects it, and quantity
/// decrements saturate at zero.
///
/// # Arguments
///
/// * `state` - The current cart (immutable)
/// * `command` - The command to apply
/// * `actor` - Who initiated this change
/// * `cause` - Why this change happened
/// * `session` - The session the resulting event belongs to
///
/// # Returns
///
/// A [`TransitionResult`] holding the new cart and exactly one audit event.
#[must_use]
pub fn apply(
    state: &CartState,
    command: Command,
    actor: Actor,
    cause: Cause,
    session: &SessionId,
) -> TransitionResult {
    let before: StateSnapshot = state.to_snapshot();

    let (new_state, action) = match command {
        Command::ToggleSeat { seat } => apply_toggle_seat(state, seat),
        Command::AdjustQuantity { item, delta } => {
            let mut new_state: CartState = state.clone();
            new_state.quantities.adjust(item, delta);

            let action: Action = Action::new(
                String::from("AdjustQuantity"),
                Some(format!("{} {delta:+}", item.as_str())),
            );
            (new_state, action)
        }
        Command::Reset => {
            let action: Action = Action::new(
                String::from("Reset"),
                Some(String::from("Cart emptied")),
            );
            (CartState::new(), action)
        }
    };

    let after: StateSnapshot = new_state.to_snapshot();
    let audit_event: AuditEvent =
        AuditEvent::new(session.clone(), actor, cause, action, before, after);

    TransitionResult {
        new_state,
        audit_event,
    }
}

fn apply_toggle_seat(state: &CartState, seat: SeatId) -> (CartState, Action) {
    let mut new_state: CartState = state.clone();

    let detail: String = if new_state.has_seat(&seat) {
        new_state.seats.retain(|s| *s != seat);
        format!("Deselected seat {seat}")
    } else {
        new_state.seats.push(seat.clone());
        format!("Selected seat {seat}")
    };

    let action: Action = Action::new(String::from("ToggleSeat"), Some(detail));
    (new_state, action)
}
