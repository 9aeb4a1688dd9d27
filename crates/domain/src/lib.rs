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

mod catalog;
mod dates;
mod error;
mod password_strength;
mod types;
mod validation;

pub use catalog::{CinemaFilter, FilmFilter, cinema_matches, film_matches};
pub use dates::{validate_date_of_birth, validate_visit_date};
pub use error::ValidationError;
pub use password_strength::{strength_label, strength_level, strength_score};
pub use types::{ConcessionItem, PaymentMethod, SeatId};
pub use validation::{
    FieldKind, NameStyle, validate_email, validate_feedback_text, validate_field,
    validate_login_identifier, validate_login_password, validate_movie_title,
    validate_password_confirmation, validate_person_name, validate_phone, validate_rating,
    validate_recommendation, validate_signup_password, validate_username,
};
