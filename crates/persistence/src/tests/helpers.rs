// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use cine_book_audit::{Cause, SessionId};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: OffsetDateTime = datetime!(2026-08-23 12:00 UTC);

pub fn create_test_session() -> SessionId {
    SessionId::new(String::from("sess-test"))
}

pub fn create_test_cause() -> Cause {
    Cause::UiEvent(String::from("test"))
}

/// A backend whose every operation fails, for degraded-path tests.
#[derive(Debug, Default)]
pub struct FailingBackend;

impl StorageBackend for FailingBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::StorageUnavailable(String::from(
            "backend offline",
        )))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::StorageUnavailable(String::from(
            "backend offline",
        )))
    }

    fn remove(&self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::StorageUnavailable(String::from(
            "backend offline",
        )))
    }
}
