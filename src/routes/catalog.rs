use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::CatalogService;

// 懒加载的全局 CATALOG_SERVICE 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_groups(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_groups(&req).await
}

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_teachers(&req).await
}

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_subjects(&req).await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_students(&req).await
}

// 配置路由
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(web::resource("/groups").route(web::get().to(list_groups)))
            .service(web::resource("/teachers").route(web::get().to(list_teachers)))
            .service(web::resource("/subjects").route(web::get().to(list_subjects)))
            .service(web::resource("/students").route(web::get().to(list_students))),
    );
}
