// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::controller::FieldController;
use crate::error::FormError;
use crate::submission::{FlowState, SubmissionFlow};
use cine_book::Clock;
use cine_book_domain::{FieldKind, NameStyle};
use time::{Date, Duration};

/// Simulated processing time for a feedback submission.
pub const FEEDBACK_SUBMIT_DELAY: Duration = Duration::seconds(2);

/// The feedback page's form state.
///
/// The two star ratings and the recommendation score are modeled as fields
/// over their hidden-input values: empty until the visitor picks something,
/// after which they can only change, never clear.
#[derive(Debug)]
pub struct FeedbackForm<C: Clock> {
    clock: C,
    /// Full name field; stricter than sign-up, letters and spaces only.
    pub full_name: FieldController,
    /// Email field.
    pub email: FieldController,
    /// Cinema visit date field.
    pub visit_date: FieldController,
    /// Movie title field.
    pub movie_title: FieldController,
    /// "What did you enjoy" free-text field.
    pub positive_experience: FieldController,
    /// "What could we improve" free-text field.
    pub improvements: FieldController,
    /// Overall star rating.
    pub overall_rating: FieldController,
    /// Service star rating.
    pub service_rating: FieldController,
    /// Zero-to-ten recommendation score.
    pub recommendation: FieldController,
    flow: SubmissionFlow,
}

impl<C: Clock> FeedbackForm<C> {
    /// Creates an empty feedback form.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            full_name: FieldController::new(FieldKind::PersonName(NameStyle::LettersAndSpaces)),
            email: FieldController::new(FieldKind::Email),
            visit_date: FieldController::new(FieldKind::VisitDate),
            movie_title: FieldController::new(FieldKind::MovieTitle),
            positive_experience: FieldController::new(FieldKind::FeedbackText),
            improvements: FieldController::new(FieldKind::FeedbackText),
            overall_rating: FieldController::new(FieldKind::StarRating),
            service_rating: FieldController::new(FieldKind::StarRating),
            recommendation: FieldController::new(FieldKind::Recommendation),
            flow: SubmissionFlow::new(),
        }
    }

    /// Returns today per the form's clock, for the visit date field.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.now().date()
    }

    /// Records a star pick (1 to 5) for the overall rating, clearing any
    /// "please provide a rating" error.
    pub fn rate_overall(&mut self, stars: u8) {
        Self::set_rating(&mut self.overall_rating, stars, self.clock.now().date());
    }

    /// Records a star pick (1 to 5) for the service rating.
    pub fn rate_service(&mut self, stars: u8) {
        Self::set_rating(&mut self.service_rating, stars, self.clock.now().date());
    }

    /// Records a recommendation score pick (0 to 10).
    pub fn recommend(&mut self, score: u8) {
        Self::set_rating(&mut self.recommendation, score, self.clock.now().date());
    }

    fn set_rating(field: &mut FieldController, value: u8, today: Date) {
        field.input(&value.to_string(), today);
        field.validate(today);
    }

    /// Returns the current submission flow state.
    #[must_use]
    pub const fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Attempts to submit: validates every field and rating, then starts
    /// the processing delay.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is invalid or a submission is already
    /// running.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let today: Date = self.today();

        let mut fields_ok: bool = true;
        for field in [
            &mut self.full_name,
            &mut self.email,
            &mut self.visit_date,
            &mut self.movie_title,
            &mut self.positive_experience,
            &mut self.improvements,
            &mut self.overall_rating,
            &mut self.service_rating,
            &mut self.recommendation,
        ] {
            fields_ok &= field.validate(today);
        }

        if !fields_ok {
            return Err(FormError::FieldsInvalid);
        }

        self.flow.begin(self.clock.now(), FEEDBACK_SUBMIT_DELAY)
    }

    /// Advances the submission flow. On the completing tick the whole form
    /// resets to empty, ready for another review, and `true` is returned.
    pub fn tick(&mut self) -> bool {
        let completed: bool = self.flow.tick(self.clock.now());
        if completed {
            self.reset_fields();
        }
        completed
    }

    /// Puts the flow back to idle (the thank-you popup was dismissed).
    pub fn dismiss(&mut self) {
        self.flow.reset();
    }

    fn reset_fields(&mut self) {
        for field in [
            &mut self.full_name,
            &mut self.email,
            &mut self.visit_date,
            &mut self.movie_title,
            &mut self.positive_experience,
            &mut self.improvements,
            &mut self.overall_rating,
            &mut self.service_rating,
            &mut self.recommendation,
        ] {
            field.reset();
        }
    }
}
