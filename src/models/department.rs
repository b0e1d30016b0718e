use serde::{Deserialize, Serialize};

use crate::models::employee::EmployeeDetail;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub region: String,
}

/// A department together with its employees and their job histories.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    pub employees: Vec<EmployeeDetail>,
}

/// Full field set accepted by create and update; update overwrites every field.
#[derive(Deserialize, Debug, Clone)]
pub struct DepartmentFields {
    pub name: String,
    pub region: String,
}
