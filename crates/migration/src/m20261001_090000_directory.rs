use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(string_len(Course::Id, 36).primary_key())
                    .col(string_len(Course::CourseCode, 32).unique_key())
                    .col(string_len(Course::CourseName, 200))
                    .col(string_len(Course::Department, 120))
                    .col(integer(Course::Credits).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(string_len(Faculty::Id, 36).primary_key())
                    // Natural key issued by the account system.
                    .col(string_len(Faculty::UserId, 64).unique_key())
                    .col(string_len(Faculty::FacultyCode, 32))
                    .col(string_len(Faculty::Name, 120))
                    .col(string_len(Faculty::Department, 120))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string_len(Student::Id, 36).primary_key())
                    .col(string_len(Student::UserId, 64).unique_key())
                    .col(string_len(Student::RollNo, 32).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacultyCourse::Table)
                    .if_not_exists()
                    .col(string_len(FacultyCourse::Id, 36).primary_key())
                    .col(string_len(FacultyCourse::CourseCode, 32))
                    .col(string_len(FacultyCourse::FacultyUserId, 64))
                    .col(string_len(FacultyCourse::Session, 64))
                    .col(integer(FacultyCourse::Year))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-faculty_course-course_code")
                            .from(FacultyCourse::Table, FacultyCourse::CourseCode)
                            .to(Course::Table, Course::CourseCode)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faculty_course_course_code")
                    .table(FacultyCourse::Table)
                    .col(FacultyCourse::CourseCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacultyCourse::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Course {
    Table,
    Id,
    CourseCode,
    CourseName,
    Department,
    Credits,
}

#[derive(DeriveIden)]
pub(crate) enum Faculty {
    Table,
    Id,
    UserId,
    FacultyCode,
    Name,
    Department,
}

#[derive(DeriveIden)]
pub(crate) enum Student {
    Table,
    Id,
    UserId,
    RollNo,
}

#[derive(DeriveIden)]
enum FacultyCourse {
    Table,
    Id,
    CourseCode,
    FacultyUserId,
    Session,
    Year,
}
