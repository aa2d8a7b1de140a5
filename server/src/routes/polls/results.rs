use actix_web::web::{Data, Json, Path};
use chrono::Utc;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::{get_question_results, ResultsResponse};

pub async fn results(
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<Json<ResultsResponse>, Error> {
    let connection = get_conn(&pool)?;
    let response = get_question_results(connection, question_id.into_inner(), Utc::now()).await?;

    Ok(Json(response))
}
