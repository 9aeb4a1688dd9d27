// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::record::StoredBooking;
use cine_book::CartState;
use cine_book_domain::SeatId;
use time::{Duration, OffsetDateTime};

/// The key a saved cart lives under.
pub const STORAGE_KEY: &str = "cinemaBooking";

/// How long a saved cart stays restorable.
pub const CART_LIFETIME: Duration = Duration::hours(1);

/// The result of a restore attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing usable was saved.
    Empty,
    /// A saved cart had aged [`CART_LIFETIME`] or more and was removed.
    Expired,
    /// The saved cart, minus any seats in the occupied set.
    Restored(CartState),
}

/// Saves and restores carts through a [`StorageBackend`].
///
/// The store owns the expiry rule: a cart aged [`CART_LIFETIME`] or more is
/// treated as absent and removed on the next load.
#[derive(Debug)]
pub struct BookingStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> BookingStore<B> {
    /// Creates a store over `backend`.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Saves `state`, stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&self, state: &CartState, now: OffsetDateTime) -> Result<(), PersistenceError> {
        let record: StoredBooking = StoredBooking::from_state(state, now_ms(now));
        let json: String = serde_json::to_string(&record)?;
        self.backend.write(STORAGE_KEY, &json)
    }

    /// Restores the saved cart.
    ///
    /// An absent record yields [`LoadOutcome::Empty`]; so does a corrupt
    /// record, which is also removed. A record aged [`CART_LIFETIME`] or more
    /// is removed and yields [`LoadOutcome::Expired`]. Restored seats present
    /// in `occupied` are dropped.
    ///
    /// # Arguments
    ///
    /// * `now` - The current instant, for the expiry check
    /// * `occupied` - Seats taken by other bookings since the save
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(
        &self,
        now: OffsetDateTime,
        occupied: &[SeatId],
    ) -> Result<LoadOutcome, PersistenceError> {
        let Some(json) = self.backend.read(STORAGE_KEY)? else {
            return Ok(LoadOutcome::Empty);
        };

        let record: StoredBooking = match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt saved cart");
                self.backend.remove(STORAGE_KEY)?;
                return Ok(LoadOutcome::Empty);
            }
        };

        // Rule: a cart exactly at the lifetime boundary has expired.
        let age_ms: i64 = now_ms(now) - record.timestamp;
        let lifetime_ms: i64 = i64::try_from(CART_LIFETIME.whole_milliseconds()).unwrap_or(i64::MAX);
        if age_ms >= lifetime_ms {
            tracing::debug!(age_ms, "discarding expired saved cart");
            self.backend.remove(STORAGE_KEY)?;
            return Ok(LoadOutcome::Expired);
        }

        Ok(LoadOutcome::Restored(record.into_state(occupied)))
    }

    /// Removes any saved cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.backend.remove(STORAGE_KEY)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn now_ms(now: OffsetDateTime) -> i64 {
    (now.unix_timestamp_nanos() / 1_000_000) as i64
}
