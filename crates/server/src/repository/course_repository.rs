use crate::entity::{course, faculty_course};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use campus_core::domain::CourseId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub id: CourseId,
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub credits: i32,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_code: String,
    pub course_name: String,
    pub department: String,
    pub credits: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyAssignment {
    pub course_code: String,
    pub faculty_user_id: String,
    pub session: String,
    pub year: i32,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, new_course: NewCourse) -> Result<CourseRecord>;
    async fn find_by_code(&self, course_code: &str) -> Result<Option<CourseRecord>>;
    async fn assign_faculty(&self, assignment: FacultyAssignment) -> Result<FacultyAssignment>;
    /// Latest recorded assignment for the course, if any.
    async fn find_assignment(&self, course_code: &str) -> Result<Option<FacultyAssignment>>;
}

#[derive(Clone)]
pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: course::Model) -> Result<CourseRecord> {
        let id = model
            .id
            .parse::<CourseId>()
            .map_err(|e| anyhow!("invalid course.id '{}' from database: {e}", model.id))?;

        Ok(CourseRecord {
            id,
            course_code: model.course_code,
            course_name: model.course_name,
            department: model.department,
            credits: model.credits,
        })
    }

    fn map_assignment(model: faculty_course::Model) -> FacultyAssignment {
        FacultyAssignment {
            course_code: model.course_code,
            faculty_user_id: model.faculty_user_id,
            session: model.session,
            year: model.year,
        }
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<CourseRecord> {
        let active_model = course::ActiveModel {
            id: Set(CourseId::new().to_string()),
            course_code: Set(new_course.course_code),
            course_name: Set(new_course.course_name),
            department: Set(new_course.department),
            credits: Set(new_course.credits),
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn find_by_code(&self, course_code: &str) -> Result<Option<CourseRecord>> {
        let model = course::Entity::find()
            .filter(course::Column::CourseCode.eq(course_code))
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn assign_faculty(&self, assignment: FacultyAssignment) -> Result<FacultyAssignment> {
        let active_model = faculty_course::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            course_code: Set(assignment.course_code),
            faculty_user_id: Set(assignment.faculty_user_id),
            session: Set(assignment.session),
            year: Set(assignment.year),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_assignment(model))
    }

    async fn find_assignment(&self, course_code: &str) -> Result<Option<FacultyAssignment>> {
        let model = faculty_course::Entity::find()
            .filter(faculty_course::Column::CourseCode.eq(course_code))
            .order_by_desc(faculty_course::Column::Year)
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_assignment))
    }
}
