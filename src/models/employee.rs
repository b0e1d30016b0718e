use serde::{Deserialize, Serialize};

use crate::models::job_history::JobHistory;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub department_id: Option<i64>,
    pub name: String,
    pub birthday: String,
    pub salary: Option<f64>,
    pub job: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: Employee,
    pub jobhistory: Vec<JobHistory>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EmployeeFields {
    pub name: String,
    pub birthday: String,
    pub salary: Option<f64>,
    pub job: String,
    pub department_id: Option<i64>,
}
