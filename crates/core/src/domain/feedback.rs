use chrono::{DateTime, Utc};

use super::{CourseId, DomainError, FacultyId, FeedbackId, Rating, StudentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRating {
    pub question_id: String,
    pub rating: Rating,
}

impl QuestionRating {
    pub fn new(question_id: impl Into<String>, rating: Rating) -> Self {
        Self {
            question_id: question_id.into(),
            rating,
        }
    }
}

/// One student's feedback about one faculty member teaching one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub id: FeedbackId,
    pub student_id: StudentId,
    pub faculty_id: FacultyId,
    pub course_id: CourseId,
    pub ratings: Vec<QuestionRating>,
    pub comments: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The ratings and comment of a submission as they will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackContent {
    pub ratings: Vec<QuestionRating>,
    pub comments: String,
}

impl FeedbackContent {
    /// Normalises raw client input: every rating is clamped into the 1–5
    /// scale and the comment is trimmed. Question ids are kept verbatim,
    /// including ones the taxonomy does not know.
    pub fn from_raw<I, S>(ratings: I, comments: Option<&str>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let ratings: Vec<QuestionRating> = ratings
            .into_iter()
            .map(|(question_id, raw)| QuestionRating::new(question_id, Rating::clamped(raw)))
            .collect();

        if ratings.is_empty() {
            return Err(DomainError::EmptyRatings);
        }

        Ok(Self {
            ratings,
            comments: comments.map(str::trim).unwrap_or_default().to_string(),
        })
    }
}
