pub mod department;
pub mod employee;
pub mod job_history;

pub use department::{Department, DepartmentDetail, DepartmentFields};
pub use employee::{Employee, EmployeeDetail, EmployeeFields};
pub use job_history::{JobHistory, JobHistoryFields};
