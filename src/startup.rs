use crate::configuration::Settings;
use crate::db;
use crate::helpers;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http::StatusCode, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Opens the database and makes sure the schema exists. The server must not
/// be started when this fails.
pub async fn prepare_storage(settings: &Settings) -> Result<SqlitePool, db::StorageError> {
    let pool = db::connect(&settings.database).await?;
    db::initialize(&pool).await?;
    Ok(pool)
}

pub fn run(
    listener: TcpListener,
    pool: SqlitePool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pool = web::Data::new(pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON body at line {}, column {}",
                err.line(),
                err.column()
            ),
            _ => "Request body must be JSON".to_string(),
        };
        tracing::info!("Rejected request body: {}", err);
        helpers::error(StatusCode::BAD_REQUEST, &msg)
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        tracing::info!("Rejected query string: {}", err);
        helpers::error(StatusCode::BAD_REQUEST, "Invalid query parameters")
    });
    // {id} that does not parse as an integer can't match any row
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::info!("Rejected path: {}", err);
        helpers::error(StatusCode::NOT_FOUND, routes::conversation::NOT_FOUND)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(
                web::scope("/api")
                    .service(routes::health_check)
                    .service(routes::stats_handler)
                    .service(
                        web::scope("/conversations")
                            .service(routes::conversation::add_handler)
                            .service(routes::conversation::list_handler)
                            .service(routes::conversation::item_handler)
                            .service(routes::conversation::delete_handler),
                    ),
            )
            .service(routes::download_handler)
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(path_config.clone())
            .app_data(pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
