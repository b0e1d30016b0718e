use std::collections::HashMap;

use sqlx::SqliteConnection;

use crate::models::{JobHistory, JobHistoryFields};

const COLUMNS: &str = "id, employee_id, startdate, enddate, salary, job, title";

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<JobHistory>, sqlx::Error> {
    sqlx::query_as::<_, JobHistory>(&format!("SELECT {} FROM jobhistory ORDER BY id", COLUMNS))
        .fetch_all(&mut *conn)
        .await
}

pub async fn list_by_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Vec<JobHistory>, sqlx::Error> {
    sqlx::query_as::<_, JobHistory>(&format!(
        "SELECT {} FROM jobhistory WHERE employee_id = ? ORDER BY id",
        COLUMNS
    ))
    .bind(employee_id)
    .fetch_all(&mut *conn)
    .await
}

/// Job history of every employee in the department, keyed by employee id.
pub async fn grouped_by_employee_in_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<HashMap<i64, Vec<JobHistory>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobHistory>(
        "SELECT h.id, h.employee_id, h.startdate, h.enddate, h.salary, h.job, h.title \
         FROM jobhistory h JOIN employee e ON e.id = h.employee_id \
         WHERE e.department_id = ? ORDER BY h.id",
    )
    .bind(department_id)
    .fetch_all(&mut *conn)
    .await?;

    let mut grouped: HashMap<i64, Vec<JobHistory>> = HashMap::new();
    for row in rows {
        if let Some(employee_id) = row.employee_id {
            grouped.entry(employee_id).or_default().push(row);
        }
    }
    Ok(grouped)
}

pub async fn insert(
    conn: &mut SqliteConnection,
    fields: &JobHistoryFields,
) -> Result<JobHistory, sqlx::Error> {
    sqlx::query_as::<_, JobHistory>(&format!(
        "INSERT INTO jobhistory (employee_id, startdate, enddate, salary, job, title) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {}",
        COLUMNS
    ))
    .bind(fields.employee_id)
    .bind(&fields.startdate)
    .bind(&fields.enddate)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(&fields.title)
    .fetch_one(&mut *conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &JobHistoryFields,
) -> Result<Option<JobHistory>, sqlx::Error> {
    sqlx::query_as::<_, JobHistory>(&format!(
        "UPDATE jobhistory SET employee_id = ?, startdate = ?, enddate = ?, salary = ?, \
         job = ?, title = ? WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(fields.employee_id)
    .bind(&fields.startdate)
    .bind(&fields.enddate)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(&fields.title)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn delete(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<JobHistory>, sqlx::Error> {
    sqlx::query_as::<_, JobHistory>(&format!(
        "DELETE FROM jobhistory WHERE id = ? RETURNING {}",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}
