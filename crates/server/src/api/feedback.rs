//! Course feedback routes used by students and faculty.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get, post},
};
use campus_api_types::{
    CourseDetailsResponse, CourseFacultyResponse, FacultyCourseFeedbackResponse,
    FeedbackReceipt, FeedbackReceiptResponse, FeedbackResponseDto, FeedbackStatisticsDto,
    FeedbackStatusResponse, QuestionStatisticsDto, RatingEntry, SectionStatisticsDto,
    SubmitFeedbackRequest,
};
use campus_core::domain::{
    AttributedFeedback, FeedbackContent, FeedbackId, FeedbackReport, FeedbackSubmission,
    QuestionRating, Rating, StudentId, aggregate,
};
use chrono::Utc;
use tracing::{info, warn};

use super::error::ApiError;
use super::state::AppState;
use crate::repository::FeedbackKey;

/// Student submission, faculty statistics and course lookup routes.
pub fn create_feedback_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/feedback/submit", post(submit_feedback))
        .route(
            "/api/feedback/faculty/{faculty_id}/{course_code}",
            get(get_faculty_course_feedback),
        )
        .route(
            "/api/feedback/status/{student_id}/{course_code}/{faculty_id}",
            get(check_feedback_status),
        )
        .route("/api/feedback/course/{course_code}", get(get_course_details))
        .route(
            "/api/feedback/course/{course_code}/faculty",
            get(get_course_faculty),
        )
        .route("/api/feedback/{feedback_id}", delete(withdraw_feedback))
}

/// Aggregated statistics plus the individual responses for one
/// faculty/course pair.
async fn get_faculty_course_feedback(
    State(state): State<Arc<AppState>>,
    Path((faculty_id, course_code)): Path<(String, String)>,
) -> Result<Json<FacultyCourseFeedbackResponse>, ApiError> {
    const FAILURE: &str = "Failed to fetch feedback data";

    let course = state
        .courses
        .find_by_code(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    let faculty = state
        .faculty
        .find_by_user_id(&faculty_id)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Faculty not found"))?;

    let submissions = state
        .feedback
        .list_active_for(faculty.id, course.id)
        .await
        .map_err(ApiError::internal(FAILURE))?;

    let student_ids: Vec<StudentId> = submissions.iter().map(|s| s.student_id).collect();
    let roll_numbers: HashMap<StudentId, String> = state
        .students
        .find_by_ids(&student_ids)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .into_iter()
        .map(|student| (student.id, student.roll_no))
        .collect();

    let report = aggregate(submissions.iter().map(|submission| AttributedFeedback {
        student_label: roll_numbers.get(&submission.student_id).map(String::as_str),
        submission,
    }));

    info!(
        course_code = %course.course_code,
        faculty = %faculty.faculty_code,
        total = report.total_feedbacks,
        "feedback statistics computed"
    );

    let FeedbackReport {
        total_feedbacks,
        sections,
        responses,
    } = report;

    Ok(Json(FacultyCourseFeedbackResponse {
        feedback: responses
            .into_iter()
            .map(|response| FeedbackResponseDto {
                student: response.student,
                ratings: rating_entries(&response.ratings),
                comments: response.comments,
                created_at: response.created_at,
            })
            .collect(),
        statistics: FeedbackStatisticsDto {
            total_feedbacks,
            sections: sections
                .into_iter()
                .map(|section| SectionStatisticsDto {
                    id: section.id.to_string(),
                    questions: section
                        .questions
                        .into_iter()
                        .map(|q| {
                            let distribution = (Rating::MIN..=Rating::MAX)
                                .zip(q.distribution)
                                .collect();
                            (
                                q.question_id.to_string(),
                                QuestionStatisticsDto {
                                    average: q.average,
                                    distribution,
                                    total_responses: q.total_responses,
                                },
                            )
                        })
                        .collect(),
                })
                .collect(),
            course: course.course_name,
            faculty: faculty.faculty_code,
            course_code: course.course_code,
            department: course.department,
        },
    }))
}

/// Whether the student has an active submission for the course and
/// faculty member. An unknown student has simply not submitted.
async fn check_feedback_status(
    State(state): State<Arc<AppState>>,
    Path((student_id, course_code, faculty_id)): Path<(String, String, String)>,
) -> Result<Json<FeedbackStatusResponse>, ApiError> {
    const FAILURE: &str = "Failed to check feedback status";

    let course = state
        .courses
        .find_by_code(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    let faculty = state
        .faculty
        .find_by_user_id(&faculty_id)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Faculty not found"))?;

    let Some(student) = state
        .students
        .find_by_user_id(&student_id)
        .await
        .map_err(ApiError::internal(FAILURE))?
    else {
        return Ok(Json(FeedbackStatusResponse {
            feedback_submitted: false,
            last_submitted: None,
        }));
    };

    let existing = state
        .feedback
        .find_by_key(FeedbackKey {
            student_id: student.id,
            faculty_id: faculty.id,
            course_id: course.id,
        })
        .await
        .map_err(ApiError::internal(FAILURE))?
        .filter(|submission| submission.is_active);

    Ok(Json(FeedbackStatusResponse {
        feedback_submitted: existing.is_some(),
        last_submitted: existing.map(|submission| submission.updated_at),
    }))
}

/// Records a submission. 409 while an active one exists for the same
/// triple; a withdrawn one is overwritten in place.
async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitFeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackReceiptResponse>), ApiError> {
    const FAILURE: &str = "Failed to submit feedback";

    let Json(request) = payload.map_err(|rejection| {
        ApiError::bad_request("Invalid feedback data").with_details(rejection.body_text())
    })?;

    let course = state
        .courses
        .find_by_code(&request.course)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::bad_request("Invalid course code"))?;
    let faculty = state
        .faculty
        .find_by_user_id(&request.faculty)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::bad_request("Invalid faculty"))?;
    let student = state
        .students
        .find_by_user_id(&request.student)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::bad_request("Invalid student"))?;

    let content = FeedbackContent::from_raw(
        request.ratings.into_iter().map(|r| (r.question_id, r.rating)),
        request.comments.as_deref(),
    )?;

    let key = FeedbackKey {
        student_id: student.id,
        faculty_id: faculty.id,
        course_id: course.id,
    };

    let existing = state
        .feedback
        .find_by_key(key)
        .await
        .map_err(ApiError::internal(FAILURE))?;
    if existing.is_some_and(|submission| submission.is_active) {
        warn!(
            roll_no = %student.roll_no,
            course_code = %course.course_code,
            "duplicate feedback submission rejected"
        );
        return Err(ApiError::conflict(
            "Feedback already exists for this course and faculty",
        ));
    }

    let saved = state
        .feedback
        .upsert(key, content, Utc::now())
        .await
        .map_err(ApiError::internal(FAILURE))?;

    info!(
        feedback_id = %saved.id,
        roll_no = %student.roll_no,
        course_code = %course.course_code,
        "feedback submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackReceiptResponse {
            message: "Feedback submitted successfully".to_string(),
            feedback: receipt(&saved),
        }),
    ))
}

/// Marks a submission inactive so it drops out of statistics.
async fn withdraw_feedback(
    State(state): State<Arc<AppState>>,
    Path(feedback_id): Path<String>,
) -> Result<Json<FeedbackReceiptResponse>, ApiError> {
    let feedback_id = feedback_id
        .parse::<FeedbackId>()
        .map_err(|_| ApiError::not_found("Feedback not found"))?;

    let withdrawn = state
        .feedback
        .withdraw(feedback_id, Utc::now())
        .await
        .map_err(ApiError::internal("Failed to withdraw feedback"))?
        .ok_or_else(|| ApiError::not_found("Feedback not found"))?;

    info!(feedback_id = %withdrawn.id, "feedback withdrawn");

    Ok(Json(FeedbackReceiptResponse {
        message: "Feedback withdrawn successfully".to_string(),
        feedback: receipt(&withdrawn),
    }))
}

/// Latest faculty assignment for a course.
async fn get_course_faculty(
    State(state): State<Arc<AppState>>,
    Path(course_code): Path<String>,
) -> Result<Json<CourseFacultyResponse>, ApiError> {
    const FAILURE: &str = "Failed to fetch faculty details";

    let assignment = state
        .courses
        .find_assignment(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("No faculty assigned to this course"))?;
    let course = state
        .courses
        .find_by_code(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    Ok(Json(CourseFacultyResponse {
        faculty_id: assignment.faculty_user_id,
        session: assignment.session,
        year: assignment.year,
        department: course.department,
    }))
}

/// Course catalogue entry together with its assigned faculty member.
async fn get_course_details(
    State(state): State<Arc<AppState>>,
    Path(course_code): Path<String>,
) -> Result<Json<CourseDetailsResponse>, ApiError> {
    const FAILURE: &str = "Failed to fetch course details";

    let course = state
        .courses
        .find_by_code(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    let assignment = state
        .courses
        .find_assignment(&course_code)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Faculty not found"))?;
    let faculty = state
        .faculty
        .find_by_user_id(&assignment.faculty_user_id)
        .await
        .map_err(ApiError::internal(FAILURE))?
        .ok_or_else(|| ApiError::not_found("Faculty not found"))?;

    Ok(Json(CourseDetailsResponse {
        course_code: course.course_code,
        course_name: course.course_name,
        department: course.department,
        credits: course.credits,
        faculty_name: faculty.name,
        session: assignment.session,
        year: assignment.year,
        faculty_id: assignment.faculty_user_id,
    }))
}

fn rating_entries(ratings: &[QuestionRating]) -> Vec<RatingEntry> {
    ratings
        .iter()
        .map(|r| RatingEntry {
            question_id: r.question_id.clone(),
            rating: f64::from(r.rating.value()),
        })
        .collect()
}

fn receipt(submission: &FeedbackSubmission) -> FeedbackReceipt {
    FeedbackReceipt {
        id: submission.id.to_string(),
        updated_at: submission.updated_at,
    }
}
