pub use sea_orm_migration::prelude::*;

mod m20261001_090000_directory;
mod m20261001_093000_feedback;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_090000_directory::Migration),
            Box::new(m20261001_093000_feedback::Migration),
        ]
    }
}
