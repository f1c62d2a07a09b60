use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use crate::config::environment::UploadLimits;
use crate::controllers::attachment_controller::{AttachmentController, UploadedFile};
use crate::models::{AttachmentKind, AttachmentMetadata};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

/// Rutas de adjuntos, anidadas bajo /drivers
pub fn create_attachment_router(limits: &UploadLimits) -> Router<AppState> {
    Router::new()
        .route("/:id/attachments", get(list_attachments))
        .route(
            "/:id/attachments/:kind",
            get(download_attachment)
                .put(upload_attachment)
                .delete(delete_attachment),
        )
        .layer(DefaultBodyLimit::max(limits.body_limit()))
}

fn parse_kind(raw: &str) -> Result<AttachmentKind, AppError> {
    raw.parse()
        .map_err(|_| bad_request_error(&format!("Unknown attachment kind '{}'", raw)))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(e.body_text())
    }
}

/// Leer el campo `file` del multipart
async fn read_file_field(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.map_err(multipart_error)?.to_vec();

        return Ok(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }

    Err(bad_request_error("Multipart field 'file' is required"))
}

async fn list_attachments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<AttachmentMetadata>>, AppError> {
    let controller = AttachmentController::new(state.pool.clone(), state.config.upload_limits);
    let attachments = controller.list(id).await?;
    Ok(Json(attachments))
}

async fn upload_attachment(
    State(state): State<AppState>,
    Path((id, kind)): Path<(i64, String)>,
    multipart: Multipart,
) -> Result<Json<AttachmentMetadata>, AppError> {
    let kind = parse_kind(&kind)?;
    let file = read_file_field(multipart).await?;
    let controller = AttachmentController::new(state.pool.clone(), state.config.upload_limits);
    let metadata = controller.store(id, kind, file).await?;
    Ok(Json(metadata))
}

async fn download_attachment(
    State(state): State<AppState>,
    Path((id, kind)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    let controller = AttachmentController::new(state.pool.clone(), state.config.upload_limits);
    let attachment = controller.fetch(id, kind).await?;

    let disposition = format!(
        "inline; filename=\"{}\"",
        attachment.metadata.file_name.replace('"', "")
    );
    Ok((
        [
            (header::CONTENT_TYPE, attachment.metadata.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        attachment.data,
    ))
}

async fn delete_attachment(
    State(state): State<AppState>,
    Path((id, kind)): Path<(i64, String)>,
) -> Result<StatusCode, AppError> {
    let kind = parse_kind(&kind)?;
    let controller = AttachmentController::new(state.pool.clone(), state.config.upload_limits);
    controller.delete(id, kind).await?;
    Ok(StatusCode::NO_CONTENT)
}
