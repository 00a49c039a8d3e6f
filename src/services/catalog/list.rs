use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::services::respond;

pub async fn list_groups(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(respond(
        storage.list_groups().await,
        "Group list retrieved successfully",
    ))
}

pub async fn list_teachers(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(respond(
        storage.list_teachers().await,
        "Teacher list retrieved successfully",
    ))
}

pub async fn list_subjects(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(respond(
        storage.list_subjects().await,
        "Subject list retrieved successfully",
    ))
}

pub async fn list_students(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(respond(
        storage.list_students().await,
        "Student list retrieved successfully",
    ))
}
