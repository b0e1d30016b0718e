use sqlx::SqliteConnection;

use crate::db::{employee, job_history};
use crate::models::{Department, DepartmentDetail, DepartmentFields, EmployeeDetail};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name, region FROM department ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name, region FROM department WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Loads a department with its employees, each carrying its job history.
pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<DepartmentDetail>, sqlx::Error> {
    let Some(department) = find(conn, id).await? else {
        return Ok(None);
    };

    let employees = employee::list_by_department(conn, id).await?;
    let mut histories = job_history::grouped_by_employee_in_department(conn, id).await?;

    let employees = employees
        .into_iter()
        .map(|employee| EmployeeDetail {
            jobhistory: histories.remove(&employee.id).unwrap_or_default(),
            employee,
        })
        .collect();

    Ok(Some(DepartmentDetail {
        department,
        employees,
    }))
}

pub async fn insert(
    conn: &mut SqliteConnection,
    fields: &DepartmentFields,
) -> Result<Department, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        "INSERT INTO department (name, region) VALUES (?, ?) RETURNING id, name, region",
    )
    .bind(&fields.name)
    .bind(&fields.region)
    .fetch_one(&mut *conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &DepartmentFields,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        "UPDATE department SET name = ?, region = ? WHERE id = ? RETURNING id, name, region",
    )
    .bind(&fields.name)
    .bind(&fields.region)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Deletes the department only; its employees are left in place.
pub async fn delete(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        "DELETE FROM department WHERE id = ? RETURNING id, name, region",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}
