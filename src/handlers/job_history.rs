use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::Deserialize;

use crate::db::{self, Database};
use crate::errors::{found, AppError};
use crate::models::{EmployeeDetail, JobHistoryFields};

const ENTITY: &str = "JobHistory";

#[derive(Deserialize)]
pub struct JobHistoryQueryParams {
    employee_id: i64,
}

#[derive(Deserialize)]
pub struct JobHistoryDeleteParams {
    employee_id: Option<i64>,
}

/// Returns the employee's document with the whole job history table attached.
///
/// The employee must exist, but the listing is not filtered by `employee_id`:
/// every job history row is returned.
pub async fn get_job_histories(
    database: web::Data<Database>,
    query: web::Query<JobHistoryQueryParams>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let employee = db::employee::find(&mut session, query.employee_id).await?;
    let employee = found(employee, "Employee")?;
    let jobhistory = db::job_history::list(&mut session).await?;
    session.commit().await?;

    Ok(HttpResponse::Ok().json(EmployeeDetail {
        employee,
        jobhistory,
    }))
}

pub async fn create_job_history(
    database: web::Data<Database>,
    params: web::Query<JobHistoryFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let job_history = db::job_history::insert(&mut session, &params).await?;
    session.commit().await?;

    info!(
        "Created job history {} for employee {}",
        job_history.id, params.employee_id
    );
    Ok(HttpResponse::Created().json(job_history))
}

pub async fn update_job_history(
    database: web::Data<Database>,
    job_history_id: web::Path<i64>,
    params: web::Query<JobHistoryFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let job_history =
        db::job_history::update(&mut session, job_history_id.into_inner(), &params).await?;
    let job_history = found(job_history, ENTITY)?;
    session.commit().await?;

    info!("Updated job history {}", job_history.id);
    Ok(HttpResponse::Ok().json(job_history))
}

pub async fn delete_job_history(
    database: web::Data<Database>,
    job_history_id: web::Path<i64>,
    query: web::Query<JobHistoryDeleteParams>,
) -> Result<HttpResponse, AppError> {
    if let Some(employee_id) = query.employee_id {
        debug!("Ignoring employee_id {} on job history delete", employee_id);
    }

    let mut session = database.session().await?;
    let job_history = db::job_history::delete(&mut session, job_history_id.into_inner()).await?;
    let job_history = found(job_history, ENTITY)?;
    session.commit().await?;

    info!("Deleted job history {}", job_history.id);
    Ok(HttpResponse::Ok().json(job_history))
}
