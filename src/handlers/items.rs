use crate::core::error::ServiceError;
use crate::core::state::AppState;
use crate::handlers::bearer::bearer_token;
use crate::listing::{filter_and_sort, SortOrder};
use crate::models::api::{ItemResponse, ItemsResponse, ListQuery};
use crate::models::item::{ItemKind, ReportForm, UploadedImage};
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

fn parse_kind(segment: &str) -> Result<ItemKind, ServiceError> {
    match segment {
        "lost" => Ok(ItemKind::Lost),
        "found" => Ok(ItemKind::Found),
        other => Err(ServiceError::Validation(format!(
            "Unknown collection: {}",
            other
        ))),
    }
}

/// List a collection, optionally filtered and sorted
///
/// GET /api/{lost|found}?search=<text>&sort=<|ascending|descending>
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let kind = parse_kind(&kind)?;

    let order = query
        .sort
        .parse::<SortOrder>()
        .map_err(ServiceError::Validation)?;

    let items = state.backend.fetch_items(kind).await?;
    let items = filter_and_sort(&items, &query.search, order);

    Ok((StatusCode::OK, Json(ItemsResponse { items })).into_response())
}

/// Submit a lost or found report (multipart form, bearer-authenticated)
///
/// POST /api/{lost|found}
pub async fn report_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, ServiceError> {
    let kind = parse_kind(&kind)?;
    let token = bearer_token(&headers)?;
    let form = read_report_form(multipart).await?;

    let item = state.report.submit(form, kind, &token).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            success: true,
            item,
        }),
    )
        .into_response())
}

/// Collect the multipart fields into a raw report form. Unknown parts are
/// ignored; validation happens in the service.
async fn read_report_form(mut multipart: Multipart) -> Result<ReportForm, ServiceError> {
    let mut form = ReportForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Validation(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "imageURL" | "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::Validation(e.to_string()))?;

                if !bytes.is_empty() {
                    form.image = Some(UploadedImage {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ServiceError::Validation(e.to_string()))?;

                match name.as_str() {
                    "name" => form.name = value,
                    "description" => form.description = value,
                    "location" => form.location = value,
                    "contact" => form.contact = value,
                    "Category" | "category" => form.category = value,
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("lost").unwrap(), ItemKind::Lost);
        assert_eq!(parse_kind("found").unwrap(), ItemKind::Found);
        assert!(parse_kind("stolen").is_err());
    }
}
