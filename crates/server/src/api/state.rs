//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    AnnouncementRepository, CourseRepository, FacultyRepository, FeedbackConfigRepository,
    FeedbackRepository, SeaOrmAnnouncementRepository, SeaOrmCourseRepository,
    SeaOrmFacultyRepository, SeaOrmFeedbackConfigRepository, SeaOrmFeedbackRepository,
    SeaOrmStudentRepository, StudentRepository,
};

/// Repositories every handler reaches the store through.
#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseRepository>,
    pub faculty: Arc<dyn FacultyRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub feedback_config: Arc<dyn FeedbackConfigRepository>,
    pub announcements: Arc<dyn AnnouncementRepository>,
    /// Author name stamped on announcements posted by the service.
    pub announcement_poster: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, announcement_poster: impl Into<String>) -> Self {
        Self {
            courses: Arc::new(SeaOrmCourseRepository::new(db.clone())),
            faculty: Arc::new(SeaOrmFacultyRepository::new(db.clone())),
            students: Arc::new(SeaOrmStudentRepository::new(db.clone())),
            feedback: Arc::new(SeaOrmFeedbackRepository::new(db.clone())),
            feedback_config: Arc::new(SeaOrmFeedbackConfigRepository::new(db.clone())),
            announcements: Arc::new(SeaOrmAnnouncementRepository::new(db)),
            announcement_poster: announcement_poster.into(),
        }
    }
}
