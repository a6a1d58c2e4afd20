use std::sync::Arc;

use actix_files::Files;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use serde::{Deserialize, Serialize};

mod api;
mod config;
mod errors;
mod models;
mod repository;

use crate::config::Config;
use crate::repository::database::PgTaskStore;
use crate::repository::TaskStore;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "task-tracker is up".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store = PgTaskStore::new(&config.database_url).map_err(std::io::Error::other)?;
    let store: Arc<dyn TaskStore> = Arc::new(store);
    let store_data = web::Data::from(store);

    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .configure(api::tasks::config)
            .service(healthcheck)
            .service(Files::new("/", "./static").index_file("index.html"))
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
