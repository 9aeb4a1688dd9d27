// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod checkout;
mod clock;
mod command;
mod error;
mod invoice;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use checkout::{OrderNumber, finish_transaction, validate_checkout};
pub use clock::{Clock, ManualClock, SystemClock};
pub use command::Command;
pub use error::CheckoutError;
pub use invoice::{
    Invoice, LineItem, SEAT_PRICE, TAX_RATE, concession_unit_price, format_amount, invoice_for,
};
pub use state::{CartState, ConcessionQuantities, TransitionResult};
