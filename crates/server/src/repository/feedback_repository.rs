use crate::entity::feedback;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use campus_core::domain::{
    CourseId, FacultyId, FeedbackContent, FeedbackId, FeedbackSubmission, QuestionRating, Rating,
    StudentId,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, sea_query::OnConflict,
};
use serde::{Deserialize, Serialize};

/// The (student, faculty, course) triple a submission is unique on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackKey {
    pub student_id: StudentId,
    pub faculty_id: FacultyId,
    pub course_id: CourseId,
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// The submission for `key`, withdrawn or not.
    async fn find_by_key(&self, key: FeedbackKey) -> Result<Option<FeedbackSubmission>>;
    /// Writes `content` for `key`, creating the record or overwriting the
    /// existing one in a single statement. Overwriting reactivates a
    /// withdrawn record and keeps its id and creation time.
    async fn upsert(
        &self,
        key: FeedbackKey,
        content: FeedbackContent,
        now: DateTime<Utc>,
    ) -> Result<FeedbackSubmission>;
    /// Active submissions for a faculty/course pair, oldest first.
    async fn list_active_for(
        &self,
        faculty_id: FacultyId,
        course_id: CourseId,
    ) -> Result<Vec<FeedbackSubmission>>;
    async fn withdraw(
        &self,
        feedback_id: FeedbackId,
        now: DateTime<Utc>,
    ) -> Result<Option<FeedbackSubmission>>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRating {
    question_id: String,
    rating: u8,
}

#[derive(Clone)]
pub struct SeaOrmFeedbackRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn encode_ratings(ratings: &[QuestionRating]) -> Result<serde_json::Value> {
        let stored: Vec<StoredRating> = ratings
            .iter()
            .map(|r| StoredRating {
                question_id: r.question_id.clone(),
                rating: r.rating.value(),
            })
            .collect();

        serde_json::to_value(stored).context("failed to encode feedback ratings")
    }

    fn decode_ratings(value: serde_json::Value) -> Result<Vec<QuestionRating>> {
        let stored: Vec<StoredRating> = serde_json::from_value(value)
            .context("invalid feedback.ratings from database")?;

        stored
            .into_iter()
            .map(|r| {
                let rating = Rating::new(r.rating)
                    .map_err(|e| anyhow!("invalid feedback.ratings from database: {e}"))?;
                Ok(QuestionRating::new(r.question_id, rating))
            })
            .collect()
    }

    fn map_model(model: feedback::Model) -> Result<FeedbackSubmission> {
        let id = model
            .id
            .parse::<FeedbackId>()
            .map_err(|e| anyhow!("invalid feedback.id '{}' from database: {e}", model.id))?;
        let student_id = model.student_id.parse::<StudentId>().map_err(|e| {
            anyhow!(
                "invalid feedback.student_id '{}' from database: {e}",
                model.student_id
            )
        })?;
        let faculty_id = model.faculty_id.parse::<FacultyId>().map_err(|e| {
            anyhow!(
                "invalid feedback.faculty_id '{}' from database: {e}",
                model.faculty_id
            )
        })?;
        let course_id = model.course_id.parse::<CourseId>().map_err(|e| {
            anyhow!(
                "invalid feedback.course_id '{}' from database: {e}",
                model.course_id
            )
        })?;

        Ok(FeedbackSubmission {
            id,
            student_id,
            faculty_id,
            course_id,
            ratings: Self::decode_ratings(model.ratings)?,
            comments: model.comments,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn find_by_key(&self, key: FeedbackKey) -> Result<Option<FeedbackSubmission>> {
        let model = feedback::Entity::find()
            .filter(feedback::Column::StudentId.eq(key.student_id.to_string()))
            .filter(feedback::Column::FacultyId.eq(key.faculty_id.to_string()))
            .filter(feedback::Column::CourseId.eq(key.course_id.to_string()))
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn upsert(
        &self,
        key: FeedbackKey,
        content: FeedbackContent,
        now: DateTime<Utc>,
    ) -> Result<FeedbackSubmission> {
        let active_model = feedback::ActiveModel {
            id: Set(FeedbackId::new().to_string()),
            student_id: Set(key.student_id.to_string()),
            faculty_id: Set(key.faculty_id.to_string()),
            course_id: Set(key.course_id.to_string()),
            ratings: Set(Self::encode_ratings(&content.ratings)?),
            comments: Set(content.comments),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        feedback::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([
                    feedback::Column::StudentId,
                    feedback::Column::FacultyId,
                    feedback::Column::CourseId,
                ])
                .update_columns([
                    feedback::Column::Ratings,
                    feedback::Column::Comments,
                    feedback::Column::IsActive,
                    feedback::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find_by_key(key)
            .await?
            .ok_or_else(|| anyhow!("feedback row for {key:?} missing after upsert"))
    }

    async fn list_active_for(
        &self,
        faculty_id: FacultyId,
        course_id: CourseId,
    ) -> Result<Vec<FeedbackSubmission>> {
        let models = feedback::Entity::find()
            .filter(feedback::Column::FacultyId.eq(faculty_id.to_string()))
            .filter(feedback::Column::CourseId.eq(course_id.to_string()))
            .filter(feedback::Column::IsActive.eq(true))
            .order_by_asc(feedback::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }

    async fn withdraw(
        &self,
        feedback_id: FeedbackId,
        now: DateTime<Utc>,
    ) -> Result<Option<FeedbackSubmission>> {
        let Some(model) = feedback::Entity::find_by_id(feedback_id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: feedback::ActiveModel = model.into();
        active_model.is_active = Set(false);
        active_model.updated_at = Set(now);

        let updated = active_model.update(&self.db).await?;
        Self::map_model(updated).map(Some)
    }
}
