use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultsResponse {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub total_votes: i32,
}

pub async fn get_question_results(
    connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<ResultsResponse, Error> {
    let (question, choices) = block(move || -> Result<_, Error> {
        let question = Question::find_visible_by_id(&connection, question_id, now)?;
        let choices = Choice::find_by_question_id(&connection, question.id)?;

        Ok((question, choices))
    })
    .await??;

    let total_votes = choices.iter().map(|choice| choice.votes).sum();

    Ok(ResultsResponse {
        question,
        choices,
        total_votes,
    })
}
