use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::reports::requests::{
    GroupQuery, GroupSubjectQuery, StudentQuery, StudentTeacherQuery, SubjectQuery, TeacherQuery,
};
use crate::services::ReportService;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn top_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.top_students(&req).await
}

pub async fn best_student(
    req: HttpRequest,
    query: web::Query<SubjectQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.best_student(&req, query.into_inner()).await
}

pub async fn group_averages(
    req: HttpRequest,
    query: web::Query<SubjectQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.group_averages(&req, query.into_inner()).await
}

pub async fn overall_average(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.overall_average(&req).await
}

pub async fn teacher_subjects(
    req: HttpRequest,
    query: web::Query<TeacherQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.teacher_subjects(&req, query.into_inner()).await
}

pub async fn group_students(
    req: HttpRequest,
    query: web::Query<GroupQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.group_students(&req, query.into_inner()).await
}

pub async fn group_subject_grades(
    req: HttpRequest,
    query: web::Query<GroupSubjectQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .group_subject_grades(&req, query.into_inner())
        .await
}

pub async fn teacher_average(
    req: HttpRequest,
    query: web::Query<TeacherQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.teacher_average(&req, query.into_inner()).await
}

pub async fn student_subjects(
    req: HttpRequest,
    query: web::Query<StudentQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.student_subjects(&req, query.into_inner()).await
}

pub async fn student_teacher_subjects(
    req: HttpRequest,
    query: web::Query<StudentTeacherQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .student_teacher_subjects(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .service(web::resource("/top-students").route(web::get().to(top_students)))
            .service(web::resource("/best-student").route(web::get().to(best_student)))
            .service(web::resource("/group-averages").route(web::get().to(group_averages)))
            .service(web::resource("/overall-average").route(web::get().to(overall_average)))
            .service(web::resource("/teacher-subjects").route(web::get().to(teacher_subjects)))
            .service(web::resource("/group-students").route(web::get().to(group_students)))
            .service(
                web::resource("/group-subject-grades").route(web::get().to(group_subject_grades)),
            )
            .service(web::resource("/teacher-average").route(web::get().to(teacher_average)))
            .service(web::resource("/student-subjects").route(web::get().to(student_subjects)))
            .service(
                web::resource("/student-teacher-subjects")
                    .route(web::get().to(student_teacher_subjects)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::seed::Seeder;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::query_error_handler;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    async fn seeded_storage() -> Arc<dyn Storage> {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 21)
            .populate(&storage)
            .await
            .unwrap();
        Arc::new(storage)
    }

    #[actix_web::test]
    async fn test_report_endpoints() {
        let storage = seeded_storage().await;
        let teacher = storage.list_teachers().await.unwrap().remove(0);

        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_report_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/reports/overall-average")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert!(body["data"]["avg_score"].is_number());

        let uri = format!(
            "/api/v1/reports/teacher-subjects?teacher={}",
            teacher.name.replace(' ', "%20")
        );
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_report_error_statuses() {
        let storage = seeded_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new(storage))
                .configure(configure_report_routes),
        )
        .await;

        // 未知名称
        let req = test::TestRequest::get()
            .uri("/api/v1/reports/teacher-average?teacher=Nobody")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // 缺少参数
        let req = test::TestRequest::get()
            .uri("/api/v1/reports/group-students")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_empty_aggregate_status() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_report_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/reports/overall-average")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
