use crate::configuration::Settings;
use actix_files::NamedFile;
use actix_web::error::InternalError;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{get, web, Result};

pub const DOWNLOAD_NAME: &str = "conversations.db";

/// Streams the raw SQLite file as an attachment.
#[tracing::instrument(name = "Download database.", skip(settings))]
#[get("/download-db")]
pub async fn download_handler(settings: web::Data<Settings>) -> Result<NamedFile> {
    let file = NamedFile::open_async(&settings.database.path)
        .await
        .map_err(|err| {
            tracing::error!(
                "Failed to open database file {}: {:?}",
                settings.database.path,
                err
            );
            InternalError::new(
                "Failed to download the database",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        })?;

    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(DOWNLOAD_NAME.to_string())],
    }))
}
