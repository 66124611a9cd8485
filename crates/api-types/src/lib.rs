//! Request and response bodies of the campus feedback HTTP API.
//!
//! Field names follow the camelCase JSON the browser client already speaks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// `message` mirrors `error`; the admin client reads `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: message.clone(),
            message,
            code: code.into(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub question_id: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// Student user id.
    pub student: String,
    /// Faculty user id.
    pub faculty: String,
    /// Course code.
    pub course: String,
    pub ratings: Vec<RatingEntry>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    pub id: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReceiptResponse {
    pub message: String,
    pub feedback: FeedbackReceipt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatusResponse {
    pub feedback_submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submitted: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStatisticsDto {
    pub average: f64,
    /// Keyed by rating value `1`..=`5`.
    pub distribution: BTreeMap<u8, u32>,
    pub total_responses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStatisticsDto {
    pub id: String,
    pub questions: BTreeMap<String, QuestionStatisticsDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatisticsDto {
    pub total_feedbacks: usize,
    pub sections: Vec<SectionStatisticsDto>,
    /// Course name.
    pub course: String,
    /// Faculty code.
    pub faculty: String,
    pub course_code: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponseDto {
    pub student: String,
    pub ratings: Vec<RatingEntry>,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyCourseFeedbackResponse {
    pub feedback: Vec<FeedbackResponseDto>,
    pub statistics: FeedbackStatisticsDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFacultyResponse {
    pub faculty_id: String,
    pub session: String,
    pub year: i32,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailsResponse {
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub credits: i32,
    pub faculty_name: String,
    pub session: String,
    pub year: i32,
    pub faculty_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFeedbackStatus {
    pub is_active: bool,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGlobalFeedbackRequest {
    pub active: bool,
    /// A date string or epoch milliseconds; validated by the handler.
    #[serde(default)]
    pub end_date: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGlobalFeedbackResponse {
    pub message: String,
    pub is_active: bool,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn error_body_carries_message_alongside_error() {
        let body = serde_json::to_value(ErrorResponse::new("Feedback not found", "NOT_FOUND"))
            .expect("serialize error");

        assert_eq!(
            body,
            serde_json::json!({
                "error": "Feedback not found",
                "message": "Feedback not found",
                "code": "NOT_FOUND"
            })
        );
    }

    #[test]
    fn submit_request_accepts_client_payload() {
        let raw = r#"{
            "student": "u-1",
            "faculty": "u-2",
            "course": "CS501",
            "ratings": [{"questionId": "teaching_quality", "rating": 5}]
        }"#;

        let request: SubmitFeedbackRequest =
            serde_json::from_str(raw).expect("deserialize submit request");

        assert_eq!(request.ratings[0].question_id, "teaching_quality");
        assert_eq!(request.ratings[0].rating, 5.0);
        assert_eq!(request.comments, None);
    }

    #[test]
    fn status_omits_last_submitted_when_absent() {
        let body = serde_json::to_value(FeedbackStatusResponse {
            feedback_submitted: false,
            last_submitted: None,
        })
        .expect("serialize status");

        assert_eq!(body, serde_json::json!({ "feedbackSubmitted": false }));
    }

    #[test]
    fn set_request_keeps_end_date_of_any_json_type() {
        let request: SetGlobalFeedbackRequest =
            serde_json::from_str(r#"{"active": true, "endDate": 4102444800000}"#)
                .expect("numeric end date should deserialize");

        assert!(request.active);
        assert_eq!(request.end_date, Some(serde_json::json!(4102444800000_i64)));

        let err = serde_json::from_str::<SetGlobalFeedbackRequest>(r#"{"active": "yes"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn distribution_keys_serialize_as_rating_strings() {
        let dto = QuestionStatisticsDto {
            average: 4.5,
            distribution: (1..=5).map(|r| (r, u32::from(r == 5))).collect(),
            total_responses: 1,
        };

        let body = serde_json::to_value(&dto).expect("serialize question statistics");

        assert_eq!(body["distribution"]["5"], 1);
        assert_eq!(body["distribution"]["1"], 0);
        assert_eq!(body["totalResponses"], 1);
    }
}
