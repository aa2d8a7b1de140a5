#[macro_use]
extern crate log;

use std::io;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger;

mod config;
mod handlers;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::{not_found, routes};

fn cors(client_host: Option<&str>) -> Cors {
    match client_host {
        Some(host) => Cors::default()
            .allowed_origin(host)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = db::new_pool(&config.database_url)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    info!(
        "Serving polls from {} on {}",
        config.database_url, config.bind_address
    );

    let client_host = config.client_host.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors(client_host.as_deref()))
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
