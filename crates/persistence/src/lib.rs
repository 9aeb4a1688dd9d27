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

pub mod backend;
mod calculator;
mod error;
mod record;
mod store;

#[cfg(test)]
mod tests;

pub use calculator::OrderCalculator;
pub use error::PersistenceError;
pub use record::{StoredBooking, StoredQuantities};
pub use store::{BookingStore, CART_LIFETIME, LoadOutcome, STORAGE_KEY};
