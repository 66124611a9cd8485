use chrono::{DateTime, Datelike, Utc};

use super::{AnnouncementId, FeedbackWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    Low,
    Medium,
    High,
}

/// Teaching term a date falls in, as named in academic announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademicSession {
    Winter,
    Summer,
    Spring,
}

impl AcademicSession {
    pub fn containing(at: DateTime<Utc>) -> Self {
        match at.month() {
            1..=5 => Self::Winter,
            6..=8 => Self::Summer,
            _ => Self::Spring,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Winter => "Winter Semester",
            Self::Summer => "Summer Course",
            Self::Spring => "Spring Semester",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementTargets {
    pub all_university: bool,
    pub students: bool,
    pub faculty: bool,
}

impl AnnouncementTargets {
    pub fn everyone() -> Self {
        Self {
            all_university: true,
            students: true,
            faculty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub content: String,
    pub importance: Importance,
    pub posted_by: String,
    pub targets: AnnouncementTargets,
    pub date: DateTime<Utc>,
}

impl Announcement {
    /// The university-wide notice posted whenever feedback collection is
    /// opened or closed.
    pub fn feedback_toggled(window: &FeedbackWindow, posted_by: &str, now: DateTime<Utc>) -> Self {
        let title = format!(
            "Feedback {} for all courses",
            if window.is_active { "Open" } else { "Closed" }
        );

        let content = match (window.is_active, window.end_date) {
            (true, Some(end_date)) => format!(
                "This is to inform you that the online course feedback module for your feedback \
                 of registered courses of {} is activated. It will be active only till {}. \
                 Please provide your feedback for the courses you have registered for. Your \
                 feedback is valuable to us and will help us improve the quality of education \
                 and services provided by the university. Thank you for your cooperation.",
                AcademicSession::containing(now).label(),
                end_date.format("%B %-d, %Y"),
            ),
            _ => "Feedback collection is now closed for all courses. Thank you for your \
                  participation."
                .to_string(),
        };

        Self {
            id: AnnouncementId::new(),
            title,
            content,
            importance: Importance::High,
            posted_by: posted_by.to_string(),
            targets: AnnouncementTargets::everyone(),
            date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn sessions_follow_the_calendar() {
        let at = |month| Utc.with_ymd_and_hms(2026, month, 10, 0, 0, 0).unwrap();

        assert_eq!(AcademicSession::containing(at(1)), AcademicSession::Winter);
        assert_eq!(AcademicSession::containing(at(5)), AcademicSession::Winter);
        assert_eq!(AcademicSession::containing(at(6)), AcademicSession::Summer);
        assert_eq!(AcademicSession::containing(at(8)), AcademicSession::Summer);
        assert_eq!(AcademicSession::containing(at(9)), AcademicSession::Spring);
        assert_eq!(AcademicSession::containing(at(12)), AcademicSession::Spring);
    }

    #[test]
    fn opening_notice_names_session_and_end_date() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let window = FeedbackWindow {
            is_active: true,
            end_date: Some(Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap()),
        };

        let notice = Announcement::feedback_toggled(&window, "Admin", now);

        assert_eq!(notice.title, "Feedback Open for all courses");
        assert!(notice.content.contains("Spring Semester"));
        assert!(notice.content.contains("October 20, 2026"));
        assert_eq!(notice.importance, Importance::High);
        assert_eq!(notice.posted_by, "Admin");
        assert_eq!(notice.targets, AnnouncementTargets::everyone());
        assert_eq!(notice.date, now);
    }

    #[test]
    fn closing_notice_is_fixed_text() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
        let notice = Announcement::feedback_toggled(&FeedbackWindow::default(), "Dean", now);

        assert_eq!(notice.title, "Feedback Closed for all courses");
        assert!(notice.content.starts_with("Feedback collection is now closed"));
    }
}
