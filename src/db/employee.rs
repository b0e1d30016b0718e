use sqlx::SqliteConnection;

use crate::db::job_history;
use crate::models::{Employee, EmployeeDetail, EmployeeFields};

const COLUMNS: &str = "id, department_id, name, birthday, salary, job";

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {} FROM employee ORDER BY id", COLUMNS))
        .fetch_all(&mut *conn)
        .await
}

pub async fn list_by_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "SELECT {} FROM employee WHERE department_id = ? ORDER BY id",
        COLUMNS
    ))
    .bind(department_id)
    .fetch_all(&mut *conn)
    .await
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {} FROM employee WHERE id = ?", COLUMNS))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<EmployeeDetail>, sqlx::Error> {
    let Some(employee) = find(conn, id).await? else {
        return Ok(None);
    };
    let jobhistory = job_history::list_by_employee(conn, id).await?;
    Ok(Some(EmployeeDetail {
        employee,
        jobhistory,
    }))
}

pub async fn insert(
    conn: &mut SqliteConnection,
    fields: &EmployeeFields,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "INSERT INTO employee (department_id, name, birthday, salary, job) \
         VALUES (?, ?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(fields.department_id)
    .bind(&fields.name)
    .bind(&fields.birthday)
    .bind(fields.salary)
    .bind(&fields.job)
    .fetch_one(&mut *conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &EmployeeFields,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "UPDATE employee SET department_id = ?, name = ?, birthday = ?, salary = ?, job = ? \
         WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(fields.department_id)
    .bind(&fields.name)
    .bind(&fields.birthday)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Deletes the employee only; job history rows become orphans.
pub async fn delete(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "DELETE FROM employee WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}
