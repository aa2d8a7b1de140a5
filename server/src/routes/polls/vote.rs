use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    DbPool,
};
use errors::Error;

use crate::handlers::{get_question_results, ResultsResponse};

#[derive(Clone, Deserialize, Serialize)]
pub struct VoteRequest {
    pub choice_id: i32,
}

pub async fn vote(
    question_id: Path<i32>,
    pool: Data<DbPool>,
    params: Json<VoteRequest>,
) -> Result<Json<ResultsResponse>, Error> {
    let question_id = question_id.into_inner();
    let choice_id = params.choice_id;
    let now = Utc::now();

    let connection = get_conn(&pool)?;
    let res = block(move || -> Result<Choice, Error> {
        let question = Question::find_visible_by_id(&connection, question_id, now)?;
        Choice::vote(&connection, question.id, choice_id)
    })
    .await?;

    let choice = res?;
    debug!("Vote recorded for choice {} of question {}", choice.id, question_id);

    let connection = get_conn(&pool)?;
    let response = get_question_results(connection, question_id, now).await?;

    Ok(Json(response))
}
