use actix_web::error::{PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::errors::AppError;
use crate::handlers;

/// Registers every resource plus the extractor error handlers, so malformed
/// parameters come back as JSON 400s.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::resource("/department")
                .route(web::get().to(handlers::department::get_departments))
                .route(web::post().to(handlers::department::create_department)),
        )
        .service(
            web::resource("/department/{department_id}")
                .route(web::get().to(handlers::department::get_department))
                .route(web::put().to(handlers::department::update_department))
                .route(web::delete().to(handlers::department::delete_department)),
        )
        .service(
            web::resource("/employee")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/employee/{employee_id}")
                .route(web::get().to(handlers::employee::get_employee))
                .route(web::put().to(handlers::employee::update_employee))
                .route(web::delete().to(handlers::employee::delete_employee)),
        )
        .service(
            web::resource("/jobhistory")
                .route(web::get().to(handlers::job_history::get_job_histories))
                .route(web::post().to(handlers::job_history::create_job_history)),
        )
        .service(
            web::resource("/jobhistory/{jobhistory_id}")
                .route(web::put().to(handlers::job_history::update_job_history))
                .route(web::delete().to(handlers::job_history::delete_job_history)),
        );
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
