use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, ResponseError, get, web::Data};
use thiserror::Error;
use tracing::error;

use tablesync_replication::{ReplicationError, ReplicationPipeline};

#[derive(Debug, Error)]
pub enum ReplicateError {
    #[error(transparent)]
    Replication(#[from] ReplicationError),
}

impl ResponseError for ReplicateError {
    // Every failure aborts the whole run, so every variant maps to 500. The
    // body carries the error's own description as plain text.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "replication run failed");

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Triggers one replication run and reports the inserted row count.
#[get("/replicate")]
pub async fn replicate(
    pipeline: Data<ReplicationPipeline>,
) -> Result<impl Responder, ReplicateError> {
    let inserted = pipeline.replicate().await?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body(confirmation_message(
            inserted,
            pipeline.source_table(),
            pipeline.destination_table(),
        )))
}

/// Plain-text confirmation returned on a successful run.
fn confirmation_message(inserted: u64, source_table: &str, destination_table: &str) -> String {
    format!("replicated {inserted} row(s) from {source_table} to {destination_table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_both_tables_and_the_row_count() {
        assert_eq!(
            confirmation_message(3, "users", "users_copy"),
            "replicated 3 row(s) from users to users_copy"
        );
    }

    #[test]
    fn replication_failures_map_to_internal_server_error() {
        let error = ReplicateError::from(ReplicationError::SchemaDerivation {
            table: "users".to_string(),
        });

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().contains("zero-column schema"));
    }
}
