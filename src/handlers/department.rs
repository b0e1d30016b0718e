use actix_web::{web, HttpResponse};
use log::info;

use crate::db::{self, Database};
use crate::errors::{found, AppError};
use crate::models::DepartmentFields;

const ENTITY: &str = "Department";

pub async fn get_departments(database: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let departments = db::department::list(&mut session).await?;
    session.commit().await?;

    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    database: web::Data<Database>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let detail = db::department::find_detail(&mut session, department_id.into_inner()).await?;
    let detail = found(detail, ENTITY)?;
    session.commit().await?;

    Ok(HttpResponse::Ok().json(detail))
}

pub async fn create_department(
    database: web::Data<Database>,
    params: web::Query<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let department = db::department::insert(&mut session, &params).await?;
    session.commit().await?;

    info!("Created department {}", department.id);
    Ok(HttpResponse::Created().json(department))
}

pub async fn update_department(
    database: web::Data<Database>,
    department_id: web::Path<i64>,
    params: web::Query<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let department =
        db::department::update(&mut session, department_id.into_inner(), &params).await?;
    let department = found(department, ENTITY)?;
    session.commit().await?;

    info!("Updated department {}", department.id);
    Ok(HttpResponse::Ok().json(department))
}

pub async fn delete_department(
    database: web::Data<Database>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut session = database.session().await?;
    let department = db::department::delete(&mut session, department_id.into_inner()).await?;
    let department = found(department, ENTITY)?;
    session.commit().await?;

    info!("Deleted department {}", department.id);
    Ok(HttpResponse::Ok().json(department))
}
