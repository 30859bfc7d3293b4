pub use sea_orm_migration::prelude::*;

mod m20250801_120000_create_rental_tables;
mod m20250801_123000_seed_demo_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_120000_create_rental_tables::Migration),
            Box::new(m20250801_123000_seed_demo_data::Migration),
        ]
    }
}
