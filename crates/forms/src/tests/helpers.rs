// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SignupForm;
use cine_book::ManualClock;
use cine_book_audit::SessionId;
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: OffsetDateTime = datetime!(2026-08-23 12:00 UTC);

pub fn create_test_clock() -> ManualClock {
    ManualClock::new(TEST_NOW)
}

pub fn create_test_session() -> SessionId {
    SessionId::new(String::from("sess-test"))
}

/// Fills every sign-up field with an acceptable value and ticks the terms
/// box, leaving the form one `submit` away from success.
pub fn fill_valid_signup(form: &mut SignupForm<ManualClock>) {
    let today = form.today();
    form.first_name.input("Ada", today);
    form.last_name.input("Lovelace", today);
    form.email.input("ada@example.com", today);
    form.phone.input("+1 555 123 4567", today);
    form.username.input("ada_lovelace", today);
    form.date_of_birth.input("1990-12-10", today);
    form.input_password("Str0ngPass!");
    form.input_confirmation("Str0ngPass!");
    form.set_terms_accepted(true);
}
