//! Publication rules for questions.
//!
//! A question is published once its `pub_date` is no longer in the future.
//! Nothing is stored about this; every check takes the current time
//! explicitly so the answer moves forward as time passes.

use chrono::{DateTime, Duration, Utc};

use errors::Error;

use crate::models::Question;

pub const QUESTION_NOT_FOUND: &str = "Question not found";

pub fn is_published(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// True when `pub_date` falls inside the trailing day ending at `now`.
/// A question exactly one day old no longer counts.
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let age = now.signed_duration_since(pub_date);
    age >= Duration::zero() && age < Duration::days(1)
}

/// Published questions, most recently published first. Questions sharing a
/// `pub_date` are ordered by descending id.
pub fn list_visible(questions: &[Question], now: DateTime<Utc>) -> Vec<Question> {
    let mut visible: Vec<Question> = questions
        .iter()
        .filter(|question| is_published(question.pub_date, now))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        b.pub_date
            .cmp(&a.pub_date)
            .then_with(|| b.id.cmp(&a.id))
    });

    visible
}

/// Unpublished questions are reported exactly like missing ones.
pub fn get_visible_by_id(
    questions: &[Question],
    id: i32,
    now: DateTime<Utc>,
) -> Result<Question, Error> {
    questions
        .iter()
        .find(|question| question.id == id && is_published(question.pub_date, now))
        .cloned()
        .ok_or_else(|| Error::NotFound(QUESTION_NOT_FOUND.into()))
}
