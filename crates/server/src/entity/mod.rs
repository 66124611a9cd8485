pub mod announcement;
pub mod course;
pub mod faculty;
pub mod faculty_course;
pub mod feedback;
pub mod feedback_config;
pub mod student;
