mod announcement;
mod error;
mod feedback;
mod feedback_window;
mod ids;
mod rating;
pub mod statistics;
pub mod taxonomy;

pub use announcement::{AcademicSession, Announcement, AnnouncementTargets, Importance};
pub use error::DomainError;
pub use feedback::{FeedbackContent, FeedbackSubmission, QuestionRating};
pub use feedback_window::{EndDateInput, FeedbackWindow};
pub use ids::{AnnouncementId, CourseId, FacultyId, FeedbackId, StudentId};
pub use rating::Rating;
pub use statistics::{
    ANONYMOUS_STUDENT, AttributedFeedback, FeedbackReport, FeedbackResponse, QuestionStatistics,
    SectionStatistics, aggregate,
};
pub use taxonomy::{FEEDBACK_SECTIONS, FeedbackSection};
