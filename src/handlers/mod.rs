pub mod department;
pub mod employee;
pub mod job_history;
