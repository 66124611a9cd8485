use crate::entity::feedback_config;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use campus_core::domain::FeedbackWindow;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};

const CONFIG_ROW_ID: i32 = 1;

#[async_trait]
pub trait FeedbackConfigRepository: Send + Sync {
    /// Reads the window, creating a closed one on first access.
    async fn get_or_create(&self) -> Result<FeedbackWindow>;
    async fn save(&self, window: FeedbackWindow) -> Result<FeedbackWindow>;
}

#[derive(Clone)]
pub struct SeaOrmFeedbackConfigRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeedbackConfigRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: feedback_config::Model) -> FeedbackWindow {
        FeedbackWindow {
            is_active: model.is_active,
            end_date: model.end_date,
        }
    }

    fn active_model(window: FeedbackWindow) -> feedback_config::ActiveModel {
        feedback_config::ActiveModel {
            id: Set(CONFIG_ROW_ID),
            is_active: Set(window.is_active),
            end_date: Set(window.end_date),
        }
    }

    async fn find(&self) -> Result<Option<FeedbackWindow>> {
        let model = feedback_config::Entity::find_by_id(CONFIG_ROW_ID)
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }
}

#[async_trait]
impl FeedbackConfigRepository for SeaOrmFeedbackConfigRepository {
    async fn get_or_create(&self) -> Result<FeedbackWindow> {
        if let Some(window) = self.find().await? {
            return Ok(window);
        }

        // A concurrent first access may have created the row already.
        feedback_config::Entity::insert(Self::active_model(FeedbackWindow::default()))
            .on_conflict(
                OnConflict::column(feedback_config::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find()
            .await?
            .ok_or_else(|| anyhow!("feedback_config row missing after creation"))
    }

    async fn save(&self, window: FeedbackWindow) -> Result<FeedbackWindow> {
        feedback_config::Entity::insert(Self::active_model(window))
            .on_conflict(
                OnConflict::column(feedback_config::Column::Id)
                    .update_columns([
                        feedback_config::Column::IsActive,
                        feedback_config::Column::EndDate,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(window)
    }
}
