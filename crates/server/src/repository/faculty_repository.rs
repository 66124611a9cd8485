use crate::entity::faculty;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use campus_core::domain::FacultyId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

#[derive(Debug, Clone)]
pub struct FacultyRecord {
    pub id: FacultyId,
    pub user_id: String,
    pub faculty_code: String,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone)]
pub struct NewFaculty {
    pub user_id: String,
    pub faculty_code: String,
    pub name: String,
    pub department: String,
}

#[async_trait]
pub trait FacultyRepository: Send + Sync {
    async fn create(&self, new_faculty: NewFaculty) -> Result<FacultyRecord>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<FacultyRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmFacultyRepository {
    db: DatabaseConnection,
}

impl SeaOrmFacultyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: faculty::Model) -> Result<FacultyRecord> {
        let id = model
            .id
            .parse::<FacultyId>()
            .map_err(|e| anyhow!("invalid faculty.id '{}' from database: {e}", model.id))?;

        Ok(FacultyRecord {
            id,
            user_id: model.user_id,
            faculty_code: model.faculty_code,
            name: model.name,
            department: model.department,
        })
    }
}

#[async_trait]
impl FacultyRepository for SeaOrmFacultyRepository {
    async fn create(&self, new_faculty: NewFaculty) -> Result<FacultyRecord> {
        let active_model = faculty::ActiveModel {
            id: Set(FacultyId::new().to_string()),
            user_id: Set(new_faculty.user_id),
            faculty_code: Set(new_faculty.faculty_code),
            name: Set(new_faculty.name),
            department: Set(new_faculty.department),
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<FacultyRecord>> {
        let model = faculty::Entity::find()
            .filter(faculty::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }
}
