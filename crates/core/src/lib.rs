//! Domain model for the campus course-feedback service.

pub mod domain;
