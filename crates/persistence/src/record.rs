// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book::{CartState, ConcessionQuantities};
use cine_book_domain::{ConcessionItem, SeatId};
use serde::{Deserialize, Serialize};

/// The stored wire form of per-item quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredQuantities {
    /// Popcorn quantity.
    #[serde(default)]
    pub popcorn: u32,
    /// Cola quantity.
    #[serde(default)]
    pub cola: u32,
    /// Hotdog quantity.
    #[serde(default)]
    pub hotdog: u32,
    /// Fries quantity.
    #[serde(default)]
    pub fries: u32,
}

/// The stored wire form of a saved cart.
///
/// Field names are part of the stored format and must not change: existing
/// saved carts use `selectedSeats` and `beverageQuantities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBooking {
    /// Selected seat labels, in selection order.
    pub selected_seats: Vec<String>,
    /// Per-item concession quantities.
    pub beverage_quantities: StoredQuantities,
    /// When the cart was saved, as milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl StoredBooking {
    /// Captures a cart into its stored form, stamped with `now_ms`.
    #[must_use]
    pub fn from_state(state: &CartState, now_ms: i64) -> Self {
        Self {
            selected_seats: state.seats.iter().map(ToString::to_string).collect(),
            beverage_quantities: StoredQuantities {
                popcorn: state.quantities.get(ConcessionItem::Popcorn),
                cola: state.quantities.get(ConcessionItem::Cola),
                hotdog: state.quantities.get(ConcessionItem::Hotdog),
                fries: state.quantities.get(ConcessionItem::Fries),
            },
            timestamp: now_ms,
        }
    }

    /// Rebuilds a cart from this record, dropping any seat in `occupied`.
    ///
    /// Seats taken by another booking since the save must not reappear as
    /// selected.
    #[must_use]
    pub fn into_state(self, occupied: &[SeatId]) -> CartState {
        let seats: Vec<SeatId> = self
            .selected_seats
            .iter()
            .map(|label| SeatId::new(label))
            .filter(|seat| !occupied.contains(seat))
            .collect();

        let mut quantities: ConcessionQuantities = ConcessionQuantities::new();
        quantities.set(ConcessionItem::Popcorn, self.beverage_quantities.popcorn);
        quantities.set(ConcessionItem::Cola, self.beverage_quantities.cola);
        quantities.set(ConcessionItem::Hotdog, self.beverage_quantities.hotdog);
        quantities.set(ConcessionItem::Fries, self.beverage_quantities.fries);

        CartState::from_parts(seats, quantities)
    }
}
