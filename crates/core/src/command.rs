// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book_domain::{ConcessionItem, SeatId};

/// A cart transition command.
///
/// Commands are the only way to change a cart. Every command is total: each
/// one succeeds on any cart, so a sequence of commands always yields a
/// well-formed cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Selects `seat` if free, deselects it if already selected.
    ToggleSeat {
        /// The seat to toggle.
        seat: SeatId,
    },
    /// Adjusts the quantity of `item` by `delta`, saturating at zero.
    AdjustQuantity {
        /// The concession item to adjust.
        item: ConcessionItem,
        /// The signed change, usually +1 or -1.
        delta: i32,
    },
    /// Empties the cart entirely.
    Reset,
}
