use actix_web::{web, HttpResponse};
use log::info;

use crate::db::{self, Database};
use crate::errors::{found, AppError};
use crate::models::EmployeeFields;

const ENTITY: &str = "Employee";

pub async fn get_employees(database: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let employees = db::employee::list(&mut session).await?;
    session.commit().await?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    database: web::Data<Database>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let detail = db::employee::find_detail(&mut session, employee_id.into_inner()).await?;
    let detail = found(detail, ENTITY)?;
    session.commit().await?;

    Ok(HttpResponse::Ok().json(detail))
}

pub async fn create_employee(
    database: web::Data<Database>,
    params: web::Query<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    // department_id is stored as given, even if no such department exists.
    let employee = db::employee::insert(&mut session, &params).await?;
    session.commit().await?;

    info!("Created employee {}", employee.id);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    database: web::Data<Database>,
    employee_id: web::Path<i64>,
    params: web::Query<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let employee = db::employee::update(&mut session, employee_id.into_inner(), &params).await?;
    let employee = found(employee, ENTITY)?;
    session.commit().await?;

    info!("Updated employee {}", employee.id);
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    database: web::Data<Database>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let employee = db::employee::delete(&mut session, employee_id.into_inner()).await?;
    let employee = found(employee, ENTITY)?;
    session.commit().await?;

    info!("Deleted employee {}", employee.id);
    Ok(HttpResponse::Ok().json(employee))
}
