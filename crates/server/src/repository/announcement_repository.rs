use crate::entity::announcement;
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{Announcement, Importance};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: &Announcement) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmAnnouncementRepository {
    db: DatabaseConnection,
}

impl SeaOrmAnnouncementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_importance_code(importance: Importance) -> i16 {
        match importance {
            Importance::Low => 0,
            Importance::Medium => 1,
            Importance::High => 2,
        }
    }
}

#[async_trait]
impl AnnouncementRepository for SeaOrmAnnouncementRepository {
    async fn create(&self, announcement: &Announcement) -> Result<()> {
        let active_model = announcement::ActiveModel {
            id: Set(announcement.id.to_string()),
            title: Set(announcement.title.clone()),
            content: Set(announcement.content.clone()),
            importance: Set(Self::map_importance_code(announcement.importance)),
            posted_by: Set(announcement.posted_by.clone()),
            target_all_university: Set(announcement.targets.all_university),
            target_students: Set(announcement.targets.students),
            target_faculty: Set(announcement.targets.faculty),
            date: Set(announcement.date),
            created_at: Set(announcement.date),
            updated_at: Set(announcement.date),
        };

        active_model.insert(&self.db).await?;
        Ok(())
    }
}
