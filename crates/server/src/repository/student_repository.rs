use crate::entity::student;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use campus_core::domain::StudentId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub id: StudentId,
    pub user_id: String,
    pub roll_no: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub user_id: String,
    pub roll_no: String,
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, new_student: NewStudent) -> Result<StudentRecord>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<StudentRecord>>;
    /// Students among `ids` that still exist; missing ids are skipped.
    async fn find_by_ids(&self, ids: &[StudentId]) -> Result<Vec<StudentRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: student::Model) -> Result<StudentRecord> {
        let id = model
            .id
            .parse::<StudentId>()
            .map_err(|e| anyhow!("invalid student.id '{}' from database: {e}", model.id))?;

        Ok(StudentRecord {
            id,
            user_id: model.user_id,
            roll_no: model.roll_no,
        })
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<StudentRecord> {
        let active_model = student::ActiveModel {
            id: Set(StudentId::new().to_string()),
            user_id: Set(new_student.user_id),
            roll_no: Set(new_student.roll_no),
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<StudentRecord>> {
        let model = student::Entity::find()
            .filter(student::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn find_by_ids(&self, ids: &[StudentId]) -> Result<Vec<StudentRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = student::Entity::find()
            .filter(student::Column::Id.is_in(ids.iter().map(ToString::to_string)))
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }
}
