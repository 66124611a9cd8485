use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

use crate::m20261001_090000_directory::{Course, Faculty, Student};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(string_len(Feedback::Id, 36).primary_key())
                    .col(string_len(Feedback::StudentId, 36))
                    .col(string_len(Feedback::FacultyId, 36))
                    .col(string_len(Feedback::CourseId, 36))
                    // Ordered array of {questionId, rating} objects, rating in [1, 5].
                    .col(json(Feedback::Ratings))
                    .col(text(Feedback::Comments))
                    .col(boolean(Feedback::IsActive).default(true))
                    .col(timestamp_with_time_zone(Feedback::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Feedback::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-feedback-student_id")
                            .from(Feedback::Table, Feedback::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-feedback-faculty_id")
                            .from(Feedback::Table, Feedback::FacultyId)
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-feedback-course_id")
                            .from(Feedback::Table, Feedback::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert-by-triple conflicts on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_triple")
                    .table(Feedback::Table)
                    .col(Feedback::StudentId)
                    .col(Feedback::FacultyId)
                    .col(Feedback::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_faculty_course")
                    .table(Feedback::Table)
                    .col(Feedback::FacultyId)
                    .col(Feedback::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeedbackConfig::Table)
                    .if_not_exists()
                    .col(integer(FeedbackConfig::Id).primary_key())
                    .col(boolean(FeedbackConfig::IsActive).default(false))
                    .col(timestamp_with_time_zone_null(FeedbackConfig::EndDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(string_len(Announcement::Id, 36).primary_key())
                    .col(string_len(Announcement::Title, 200))
                    .col(text(Announcement::Content))
                    // Importance enum is represented in app code.
                    // 0=low, 1=medium, 2=high
                    .col(
                        small_integer(Announcement::Importance)
                            .check(Expr::col(Announcement::Importance).gte(0))
                            .check(Expr::col(Announcement::Importance).lte(2)),
                    )
                    .col(string_len(Announcement::PostedBy, 120))
                    .col(boolean(Announcement::TargetAllUniversity).default(false))
                    .col(boolean(Announcement::TargetStudents).default(false))
                    .col(boolean(Announcement::TargetFaculty).default(false))
                    .col(timestamp_with_time_zone(Announcement::Date))
                    .col(timestamp_with_time_zone(Announcement::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Announcement::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FeedbackConfig::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    Id,
    StudentId,
    FacultyId,
    CourseId,
    Ratings,
    Comments,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeedbackConfig {
    Table,
    Id,
    IsActive,
    EndDate,
}

#[derive(DeriveIden)]
enum Announcement {
    Table,
    Id,
    Title,
    Content,
    Importance,
    PostedBy,
    TargetAllUniversity,
    TargetStudents,
    TargetFaculty,
    Date,
    CreatedAt,
    UpdatedAt,
}
