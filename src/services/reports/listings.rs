use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::requests::{
    GroupQuery, GroupSubjectQuery, StudentQuery, StudentTeacherQuery, TeacherQuery,
};
use crate::services::respond;

pub async fn teacher_subjects(
    service: &ReportService,
    request: &HttpRequest,
    query: TeacherQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.teacher_subjects(&query.teacher).await;
    Ok(respond(result, "Teacher subjects retrieved successfully"))
}

pub async fn group_students(
    service: &ReportService,
    request: &HttpRequest,
    query: GroupQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.group_students(&query.group).await;
    Ok(respond(result, "Group students retrieved successfully"))
}

pub async fn group_subject_grades(
    service: &ReportService,
    request: &HttpRequest,
    query: GroupSubjectQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage
        .group_subject_grades(&query.group, &query.subject)
        .await;
    Ok(respond(result, "Group grades retrieved successfully"))
}

pub async fn student_subjects(
    service: &ReportService,
    request: &HttpRequest,
    query: StudentQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage.student_subjects(&query.student).await;
    Ok(respond(result, "Student subjects retrieved successfully"))
}

pub async fn student_teacher_subjects(
    service: &ReportService,
    request: &HttpRequest,
    query: StudentTeacherQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = storage
        .student_teacher_subjects(&query.student, &query.teacher)
        .await;
    Ok(respond(result, "Student subjects retrieved successfully"))
}
