pub mod averages;
pub mod listings;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{
    GroupQuery, GroupSubjectQuery, StudentQuery, StudentTeacherQuery, SubjectQuery, TeacherQuery,
};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 平均分最高的 5 名学生
    pub async fn top_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        averages::top_students(self, request).await
    }

    // 某科目平均分最高的学生
    pub async fn best_student(
        &self,
        request: &HttpRequest,
        query: SubjectQuery,
    ) -> ActixResult<HttpResponse> {
        averages::best_student(self, request, query).await
    }

    // 某科目各班组平均分
    pub async fn group_averages(
        &self,
        request: &HttpRequest,
        query: SubjectQuery,
    ) -> ActixResult<HttpResponse> {
        averages::group_averages(self, request, query).await
    }

    pub async fn overall_average(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        averages::overall_average(self, request).await
    }

    pub async fn teacher_average(
        &self,
        request: &HttpRequest,
        query: TeacherQuery,
    ) -> ActixResult<HttpResponse> {
        averages::teacher_average(self, request, query).await
    }

    // 教师所授科目
    pub async fn teacher_subjects(
        &self,
        request: &HttpRequest,
        query: TeacherQuery,
    ) -> ActixResult<HttpResponse> {
        listings::teacher_subjects(self, request, query).await
    }

    pub async fn group_students(
        &self,
        request: &HttpRequest,
        query: GroupQuery,
    ) -> ActixResult<HttpResponse> {
        listings::group_students(self, request, query).await
    }

    pub async fn group_subject_grades(
        &self,
        request: &HttpRequest,
        query: GroupSubjectQuery,
    ) -> ActixResult<HttpResponse> {
        listings::group_subject_grades(self, request, query).await
    }

    pub async fn student_subjects(
        &self,
        request: &HttpRequest,
        query: StudentQuery,
    ) -> ActixResult<HttpResponse> {
        listings::student_subjects(self, request, query).await
    }

    // 学生从某位教师处修读的科目
    pub async fn student_teacher_subjects(
        &self,
        request: &HttpRequest,
        query: StudentTeacherQuery,
    ) -> ActixResult<HttpResponse> {
        listings::student_teacher_subjects(self, request, query).await
    }
}
