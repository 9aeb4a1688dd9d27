// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CartState, Command, TransitionResult, apply};
use cine_book_audit::{Actor, Cause, SessionId};
use cine_book_domain::{ConcessionItem, SeatId};

pub fn create_test_session() -> SessionId {
    SessionId::new(String::from("sess-test"))
}

pub fn create_test_cause() -> Cause {
    Cause::UiEvent(String::from("test"))
}

/// Builds a cart by applying a toggle for each seat label and a +quantity
/// adjustment for each item.
pub fn create_test_cart(seats: &[&str], items: &[(ConcessionItem, u32)]) -> CartState {
    let session: SessionId = create_test_session();
    let mut state: CartState = CartState::new();

    for label in seats {
        let result: TransitionResult = apply(
            &state,
            Command::ToggleSeat {
                seat: SeatId::new(label),
            },
            Actor::Visitor,
            create_test_cause(),
            &session,
        );
        state = result.new_state;
    }

    for (item, quantity) in items {
        let result: TransitionResult = apply(
            &state,
            Command::AdjustQuantity {
                item: *item,
                delta: i32::try_from(*quantity).unwrap(),
            },
            Actor::Visitor,
            create_test_cause(),
            &session,
        );
        state = result.new_state;
    }

    state
}
