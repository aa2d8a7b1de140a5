use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, DbPool};
use errors::Error;

pub const NO_POLLS_AVAILABLE: &str = "No polls are available.";

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(pool: Data<DbPool>) -> Result<Json<IndexResponse>, Error> {
    let connection = get_conn(&pool)?;
    let now = Utc::now();

    let latest_question_list = block(move || Question::find_visible(&connection, now)).await??;

    let message = if latest_question_list.is_empty() {
        Some(NO_POLLS_AVAILABLE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list,
        message,
    }))
}
