use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, ChoiceDetails, Question},
    DbPool,
};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct DetailResponse {
    pub question: Question,
    pub choices: Vec<ChoiceDetails>,
}

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<Json<DetailResponse>, Error> {
    let question_id = question_id.into_inner();
    let connection = get_conn(&pool)?;
    let now = Utc::now();

    let res = block(move || -> Result<_, Error> {
        let question = Question::find_visible_by_id(&connection, question_id, now)?;
        let choices = Choice::find_details_by_question_id(&connection, question.id)?;

        Ok(DetailResponse { question, choices })
    })
    .await?;

    let response = res?;

    Ok(Json(response))
}
