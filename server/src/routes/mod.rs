use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use db::models::NO_CHOICE_SELECTED;
use errors::{Error, ErrorResponse};

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .service(
                web::resource("/")
                    .name("polls:index")
                    .route(web::get().to(polls::index)),
            )
            .service(
                web::resource("/{question_id}/")
                    .name("polls:detail")
                    .route(web::get().to(polls::detail)),
            )
            .service(
                web::resource("/{question_id}/results/")
                    .name("polls:results")
                    .route(web::get().to(polls::results)),
            )
            .service(
                web::resource("/{question_id}/vote/")
                    .name("polls:vote")
                    .app_data(web::JsonConfig::default().error_handler(vote_payload_error))
                    .route(web::post().to(polls::vote)),
            ),
    );
}

// a missing or unreadable vote body means no choice was picked
fn vote_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected vote payload - {}", err);
    Error::BadRequest(NO_CHOICE_SELECTED.into()).into()
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
