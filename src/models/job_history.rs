use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobHistory {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub startdate: String,
    pub enddate: String,
    pub salary: Option<f64>,
    pub job: String,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JobHistoryFields {
    pub employee_id: i64,
    pub startdate: String,
    pub enddate: String,
    pub salary: Option<f64>,
    pub job: String,
    pub title: String,
}
