use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::requests::{SubjectQuery, TeacherQuery};
use crate::models::reports::responses::AverageScore;
use crate::services::respond;

pub async fn top_students(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.top_students().await;
    Ok(respond(result, "Top students retrieved successfully"))
}

pub async fn best_student(
    service: &ReportService,
    request: &HttpRequest,
    query: SubjectQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.best_student_in_subject(&query.subject).await;
    Ok(respond(result, "Best student retrieved successfully"))
}

pub async fn group_averages(
    service: &ReportService,
    request: &HttpRequest,
    query: SubjectQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.group_averages_in_subject(&query.subject).await;
    Ok(respond(result, "Group averages retrieved successfully"))
}

pub async fn overall_average(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage
        .overall_average()
        .await
        .map(|avg_score| AverageScore { avg_score });
    Ok(respond(result, "Overall average retrieved successfully"))
}

pub async fn teacher_average(
    service: &ReportService,
    request: &HttpRequest,
    query: TeacherQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage
        .teacher_average(&query.teacher)
        .await
        .map(|avg_score| AverageScore { avg_score });
    Ok(respond(result, "Teacher average retrieved successfully"))
}
