#[cfg(test)]
pub mod tests {
    use actix_web::{http::header, test, web, App};
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use db::{
        get_conn,
        models::{Choice, Question},
        new_pool, DbPool, MEMORY_DATABASE_URL,
    };

    use crate::routes::{not_found, routes};

    /// A fresh in-memory database, dropped with the pool at the end of a test.
    pub fn get_pool() -> DbPool {
        new_pool(MEMORY_DATABASE_URL).unwrap()
    }

    /// Creates a question published `days` from now: negative for the past,
    /// positive for the future.
    pub fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
        let conn = get_conn(pool).unwrap();
        Question::create(&conn, question_text, Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choice(pool: &DbPool, question_id: i32, choice_text: &str) -> Choice {
        let conn = get_conn(pool).unwrap();
        Choice::create(&conn, question_id, choice_text).unwrap()
    }

    pub fn vote_for(pool: &DbPool, question_id: i32, choice_id: i32) -> Choice {
        let conn = get_conn(pool).unwrap();
        Choice::vote(&conn, question_id, choice_id).unwrap()
    }

    async fn send(pool: &DbPool, req: test::TestRequest) -> (u16, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        (status, body)
    }

    fn parse_json<R>(status: u16, body: &str) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_str(body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                body, status
            )
        })
    }

    /// Helper for HTTP GET integration tests that inspect the raw body
    pub async fn test_get_body(pool: &DbPool, route: &str) -> (u16, String) {
        send(pool, test::TestRequest::get().uri(route)).await
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = test_get_body(pool, route).await;

        (status, parse_json(status, &body))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(pool: &DbPool, route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post().set_json(&params).uri(route);
        let (status, body) = send(pool, req).await;

        (status, parse_json(status, &body))
    }

    /// Helper for HTTP POST integration tests sending a body as-is,
    /// with no content type when `content_type` is `None`
    pub async fn test_post_raw<R>(
        pool: &DbPool,
        route: &str,
        payload: &'static str,
        content_type: Option<&'static str>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let mut req = test::TestRequest::post().uri(route).set_payload(payload);
        if let Some(content_type) = content_type {
            req = req.insert_header((header::CONTENT_TYPE, content_type));
        }
        let (status, body) = send(pool, req).await;

        (status, parse_json(status, &body))
    }
}
