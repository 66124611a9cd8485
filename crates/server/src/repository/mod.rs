pub mod announcement_repository;
pub mod course_repository;
pub mod faculty_repository;
pub mod feedback_config_repository;
pub mod feedback_repository;
pub mod student_repository;

pub use announcement_repository::{AnnouncementRepository, SeaOrmAnnouncementRepository};
pub use course_repository::{
    CourseRecord, CourseRepository, FacultyAssignment, NewCourse, SeaOrmCourseRepository,
};
pub use faculty_repository::{
    FacultyRecord, FacultyRepository, NewFaculty, SeaOrmFacultyRepository,
};
pub use feedback_config_repository::{FeedbackConfigRepository, SeaOrmFeedbackConfigRepository};
pub use feedback_repository::{FeedbackKey, FeedbackRepository, SeaOrmFeedbackRepository};
pub use student_repository::{NewStudent, SeaOrmStudentRepository, StudentRecord, StudentRepository};
