// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book_audit::{AuditEvent, StateSnapshot};
use cine_book_domain::{ConcessionItem, SeatId};

/// Per-item concession quantities, all starting at zero.
///
/// Quantities saturate at zero on decrement; there is no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConcessionQuantities {
    counts: [u32; 4],
}

impl ConcessionQuantities {
    /// Creates a new set of quantities, all zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 4] }
    }

    /// Returns the quantity for `item`.
    #[must_use]
    pub const fn get(&self, item: ConcessionItem) -> u32 {
        self.counts[Self::index(item)]
    }

    /// Sets the quantity for `item` directly, used when restoring saved
    /// state.
    pub const fn set(&mut self, item: ConcessionItem, quantity: u32) {
        self.counts[Self::index(item)] = quantity;
    }

    /// Adjusts the quantity for `item` by `delta`, saturating at zero.
    pub const fn adjust(&mut self, item: ConcessionItem, delta: i32) {
        let current: u32 = self.get(item);
        let next: u32 = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        self.set(item, next);
    }

    /// Iterates all items with their quantities, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ConcessionItem, u32)> + '_ {
        ConcessionItem::ALL.into_iter().map(|item| (item, self.get(item)))
    }

    /// Returns the sum of all item quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.counts.iter().sum()
    }

    const fn index(item: ConcessionItem) -> usize {
        match item {
            ConcessionItem::Popcorn => 0,
            ConcessionItem::Cola => 1,
            ConcessionItem::Hotdog => 2,
            ConcessionItem::Fries => 3,
        }
    }
}

/// The complete cart for one booking session.
///
/// A cart is immutable: [`crate::apply`] consumes a command and produces a
/// new cart rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    /// Selected seats, in selection order, no duplicates.
    pub seats: Vec<SeatId>,
    /// Concession quantities.
    pub quantities: ConcessionQuantities,
}

impl CartState {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seats: Vec::new(),
            quantities: ConcessionQuantities::new(),
        }
    }

    /// Builds a cart from restored parts, dropping duplicate seats while
    /// keeping first-seen order.
    #[must_use]
    pub fn from_parts(seats: Vec<SeatId>, quantities: ConcessionQuantities) -> Self {
        let mut deduped: Vec<SeatId> = Vec::with_capacity(seats.len());
        for seat in seats {
            if !deduped.contains(&seat) {
                deduped.push(seat);
            }
        }
        Self {
            seats: deduped,
            quantities,
        }
    }

    /// Returns whether `seat` is currently selected.
    #[must_use]
    pub fn has_seat(&self, seat: &SeatId) -> bool {
        self.seats.contains(seat)
    }

    /// Returns the number of selected seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns whether the cart holds no seats and no concessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty() && self.quantities.total_items() == 0
    }

    /// Renders this cart as an audit snapshot.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "seats={} items={}",
            self.seats.len(),
            self.quantities.total_items()
        ))
    }
}

/// The result of applying a command: the new cart plus its audit event.
#[derive(Debug, Clone)]
pub struct TransitionResult {
    /// The cart after the transition.
    pub new_state: CartState,
    /// The audit event recording the transition.
    pub audit_event: AuditEvent,
}
