#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use campus_server::api::{AppState, create_app};
use campus_server::db::init_pool_and_migrate;
use campus_server::repository::{
    CourseRecord, CourseRepository, FacultyAssignment, FacultyRecord, FacultyRepository,
    NewCourse, NewFaculty, NewStudent, SeaOrmCourseRepository, SeaOrmFacultyRepository,
    SeaOrmStudentRepository, StudentRecord, StudentRepository,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

pub struct Fixture {
    pub db: DatabaseConnection,
    pub app: Router,
    pub course: CourseRecord,
    pub faculty: FacultyRecord,
    pub student: StudentRecord,
}

pub async fn test_db() -> DatabaseConnection {
    init_pool_and_migrate("sqlite::memory:", 1)
        .await
        .expect("in-memory database should initialize")
}

pub fn app_for(db: DatabaseConnection) -> Router {
    create_app(Arc::new(AppState::new(db, "Admin")), CorsLayer::permissive())
}

/// One course taught by one faculty member and one registered student.
pub async fn fixture() -> Fixture {
    let db = test_db().await;

    let courses = SeaOrmCourseRepository::new(db.clone());
    let course = courses
        .create(NewCourse {
            course_code: "CS501".to_string(),
            course_name: "Advanced Database Systems".to_string(),
            department: "Computer Science".to_string(),
            credits: 4,
        })
        .await
        .expect("course should be created");

    let faculty = SeaOrmFacultyRepository::new(db.clone())
        .create(NewFaculty {
            user_id: "fac-user-1".to_string(),
            faculty_code: "FAC001".to_string(),
            name: "Test Faculty".to_string(),
            department: "Computer Science".to_string(),
        })
        .await
        .expect("faculty should be created");

    courses
        .assign_faculty(FacultyAssignment {
            course_code: "CS501".to_string(),
            faculty_user_id: "fac-user-1".to_string(),
            session: "Spring Semester".to_string(),
            year: 2026,
        })
        .await
        .expect("assignment should be created");

    let student = add_student(&db, "stu-user-1", "CS20B001").await;

    Fixture {
        app: app_for(db.clone()),
        db,
        course,
        faculty,
        student,
    }
}

pub async fn add_student(db: &DatabaseConnection, user_id: &str, roll_no: &str) -> StudentRecord {
    SeaOrmStudentRepository::new(db.clone())
        .create(NewStudent {
            user_id: user_id.to_string(),
            roll_no: roll_no.to_string(),
        })
        .await
        .expect("student should be created")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
