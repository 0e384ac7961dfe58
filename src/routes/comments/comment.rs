use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::{
    domain::{CommentId, CommentPayload, PostId},
    services::{CommentError, CommentService},
    utils,
};

impl ResponseError for CommentError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            CommentError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CommentError::NotFound => StatusCode::NOT_FOUND,
            CommentError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the logs
        let message = match self {
            CommentError::UnexpectedError(_) => "something went wrong".to_string(),
            other => other.to_string(),
        };

        utils::build_error_response(status_code, message)
    }
}

#[tracing::instrument(skip(service))]
pub async fn show_all_comments(
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comments = service.get_all_comments().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "comments": comments })))
}

#[tracing::instrument(skip(service), fields(post_id=%path))]
pub async fn show_comments_for_post(
    path: web::Path<String>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let post_id = PostId::parse(path.into_inner()).map_err(CommentError::ValidationError)?;

    let comments = service.get_all_comments_by_post_id(&post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "comments": comments })))
}

#[tracing::instrument(skip(payload, service))]
pub async fn create_comment(
    payload: web::Json<CommentPayload>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comment = service.save_comment(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(comment))
}

#[tracing::instrument(skip(payload, service))]
pub async fn patch_comment(
    payload: web::Json<CommentPayload>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comment = service.patch_comment(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[tracing::instrument(skip(service), fields(comment_id=%path))]
pub async fn delete_comment(
    path: web::Path<String>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, CommentError> {
    let comment_id = CommentId::parse(path.into_inner()).map_err(CommentError::ValidationError)?;

    if !service.delete_comment_by_id(&comment_id).await? {
        return Err(CommentError::NotFound);
    }

    Ok(HttpResponse::Ok().finish())
}
