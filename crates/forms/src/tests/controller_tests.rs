// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FieldController, VisualState};
use cine_book_domain::{FieldKind, ValidationError};
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 08 - 23);

#[test]
fn test_new_field_starts_neutral() {
    let field: FieldController = FieldController::new(FieldKind::Email);

    assert_eq!(field.visual(), VisualState::Neutral);
    assert_eq!(field.error(), None);
    assert_eq!(field.value(), "");
}

#[test]
fn test_typing_alone_never_shows_an_error() {
    let mut field: FieldController = FieldController::new(FieldKind::Email);

    field.input("not-an-email", TODAY);

    assert_eq!(field.visual(), VisualState::Neutral);
    assert_eq!(field.error(), None);
}

#[test]
fn test_blur_validates_and_shows_the_error() {
    let mut field: FieldController = FieldController::new(FieldKind::Email);
    field.input("not-an-email", TODAY);

    field.blur(TODAY);

    assert_eq!(field.visual(), VisualState::Invalid);
    assert_eq!(field.error(), Some(&ValidationError::EmailMissingAt));
}

#[test]
fn test_typing_clears_the_error_as_soon_as_the_value_passes() {
    let mut field: FieldController = FieldController::new(FieldKind::Email);
    field.input("user@", TODAY);
    field.blur(TODAY);
    assert_eq!(field.visual(), VisualState::Invalid);

    // Still invalid mid-correction: the message updates, never hides.
    field.input("user@example", TODAY);
    assert_eq!(field.error(), Some(&ValidationError::DomainMissingDot));

    field.input("user@example.com", TODAY);
    assert_eq!(field.visual(), VisualState::Valid);
    assert_eq!(field.error(), None);
}

#[test]
fn test_blur_on_a_valid_value_marks_valid() {
    let mut field: FieldController = FieldController::new(FieldKind::Phone);
    field.input("+1 (555) 123-4567", TODAY);

    field.blur(TODAY);

    assert_eq!(field.visual(), VisualState::Valid);
}

#[test]
fn test_reset_returns_to_untouched() {
    let mut field: FieldController = FieldController::new(FieldKind::Username);
    field.input("x", TODAY);
    field.blur(TODAY);

    field.reset();

    assert_eq!(field.visual(), VisualState::Neutral);
    assert_eq!(field.value(), "");
    assert_eq!(field.error(), None);
}
