use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create company table
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Company::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Company::InternalCode))
                    .col(string(Company::Name))
                    .col(string(Company::Address))
                    .col(string(Company::City))
                    .col(string(Company::Category))
                    .to_owned(),
            )
            .await?;

        // Create job table. internal_code is a nominal link to
        // company.internal_code and deliberately carries no foreign key.
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Job::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Job::InternalCode))
                    .col(string(Job::Date))
                    .col(ColumnDef::new(Job::Exports).big_integer().null().default(0))
                    .col(
                        ColumnDef::new(Job::TransitPermits)
                            .big_integer()
                            .null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Job::InspectionAreas).string().null().default(""))
                    .col(ColumnDef::new(Job::WaterSamples).string().null().default(""))
                    .col(ColumnDef::new(Job::MipControl).string().null().default(""))
                    .col(boolean_null(Job::PlanCreha))
                    .col(ColumnDef::new(Job::MeetingManagers).string().null().default(""))
                    .col(ColumnDef::new(Job::AuditHaccp).string().null().default(""))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    InternalCode,
    Name,
    Address,
    City,
    Category,
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    InternalCode,
    Date,
    Exports,
    TransitPermits,
    InspectionAreas,
    WaterSamples,
    MipControl,
    PlanCreha,
    MeetingManagers,
    AuditHaccp,
}
