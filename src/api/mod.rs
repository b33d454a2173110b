pub mod health;
pub mod job_posting;
pub mod validation;
