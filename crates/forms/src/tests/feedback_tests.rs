// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_clock;
use crate::{FeedbackForm, FlowState, FormError, VisualState};
use cine_book::ManualClock;
use cine_book_domain::ValidationError;
use time::Duration;

fn fill_valid(form: &mut FeedbackForm<ManualClock>) {
    let today = form.today();
    form.full_name.input("Ada Lovelace", today);
    form.email.input("ada@example.com", today);
    form.visit_date.input("2026-08-20", today);
    form.movie_title.input("Dune", today);
    form.positive_experience.input("Great sound and comfy seats", today);
    form.improvements.input("Shorter queues at the snack bar", today);
    form.rate_overall(5);
    form.rate_service(4);
    form.recommend(9);
}

#[test]
fn test_complete_feedback_submits_and_resets_after_the_delay() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock.clone());
    fill_valid(&mut form);

    form.submit().unwrap();
    clock.advance(Duration::seconds(2));

    assert!(form.tick());
    assert_eq!(form.flow_state(), FlowState::Succeeded);
    // The form is blank again for the next review.
    assert_eq!(form.full_name.value(), "");
    assert_eq!(form.overall_rating.value(), "");
    assert_eq!(form.full_name.visual(), VisualState::Neutral);
}

#[test]
fn test_unset_ratings_block_submission() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock);
    fill_valid(&mut form);
    form.overall_rating.reset();
    form.recommendation.reset();

    assert_eq!(form.submit(), Err(FormError::FieldsInvalid));
    assert_eq!(
        form.overall_rating.error(),
        Some(&ValidationError::RatingMissing)
    );
    assert_eq!(
        form.recommendation.error(),
        Some(&ValidationError::RecommendationMissing)
    );
}

#[test]
fn test_picking_a_rating_clears_its_error() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock);
    fill_valid(&mut form);
    form.service_rating.reset();
    let _ = form.submit();
    assert_eq!(form.service_rating.visual(), VisualState::Invalid);

    form.rate_service(3);

    assert_eq!(form.service_rating.visual(), VisualState::Valid);
    assert_eq!(form.service_rating.value(), "3");
}

#[test]
fn test_feedback_name_rejects_hyphens() {
    // The feedback form is stricter than sign-up: letters and spaces only.
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock);
    form.full_name.input("Jean-Luc Picard", form.today());
    form.full_name.blur(form.today());

    assert!(matches!(
        form.full_name.error(),
        Some(&ValidationError::InvalidCharacter { .. })
    ));
}

#[test]
fn test_future_visit_date_is_rejected() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock);
    form.visit_date.input("2026-08-24", form.today());
    form.visit_date.blur(form.today());

    assert_eq!(
        form.visit_date.error(),
        Some(&ValidationError::VisitDateInFuture)
    );
}

#[test]
fn test_short_free_text_is_rejected() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock);
    form.positive_experience.input("Nice", form.today());
    form.positive_experience.blur(form.today());

    assert_eq!(
        form.positive_experience.error(),
        Some(&ValidationError::FeedbackTooShort { min: 10 })
    );
}

#[test]
fn test_dismiss_returns_the_flow_to_idle() {
    let clock: ManualClock = create_test_clock();
    let mut form: FeedbackForm<ManualClock> = FeedbackForm::new(clock.clone());
    fill_valid(&mut form);
    form.submit().unwrap();
    clock.advance(Duration::seconds(2));
    form.tick();

    form.dismiss();

    assert_eq!(form.flow_state(), FlowState::Idle);
}
