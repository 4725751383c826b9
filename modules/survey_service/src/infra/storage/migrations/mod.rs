//! Database migrations for the survey service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_users::Migration),
            Box::new(m20250110_000002_create_demographics::Migration),
            Box::new(m20250110_000003_create_land_use_surveys::Migration),
            Box::new(m20250110_000004_create_horticultural_details::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    FirstName,
    Surname,
    Email,
    PhoneNumber,
    Address,
    PasswordHash,
    Latitude,
    Longitude,
    CreatedAt,
}

mod m20250110_000001_create_users {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Users::Username).string().not_null())
                        .col(ColumnDef::new(Users::FirstName).string().not_null())
                        .col(ColumnDef::new(Users::Surname).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().not_null())
                        .col(ColumnDef::new(Users::PhoneNumber).string().not_null())
                        .col(ColumnDef::new(Users::Address).string().not_null())
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::Latitude).double())
                        .col(ColumnDef::new(Users::Longitude).double())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Uniqueness of username and email is enforced here; the
            // registration probe loop is only best-effort
            manager
                .create_index(
                    Index::create()
                        .name("idx_users_username")
                        .table(Users::Table)
                        .col(Users::Username)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_users_email")
                        .table(Users::Table)
                        .col(Users::Email)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }
}

mod m20250110_000002_create_demographics {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[derive(DeriveIden)]
    enum Demographics {
        Table,
        Id,
        UserId,
        RegisteredName,
        Province,
        District,
        Municipality,
        AgriculturalActivity,
        OtherAgriculturalActivity,
        FarmActivity,
        CreatedAt,
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Demographics::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Demographics::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Demographics::UserId).uuid().not_null())
                        .col(
                            ColumnDef::new(Demographics::RegisteredName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Demographics::Province).string().not_null())
                        .col(ColumnDef::new(Demographics::District).string().not_null())
                        .col(
                            ColumnDef::new(Demographics::Municipality)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Demographics::AgriculturalActivity)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Demographics::OtherAgriculturalActivity).string())
                        .col(
                            ColumnDef::new(Demographics::FarmActivity)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Demographics::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_demographics_user")
                                .from(Demographics::Table, Demographics::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_demographics_user_id")
                        .table(Demographics::Table)
                        .col(Demographics::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Demographics::Table).to_owned())
                .await
        }
    }
}

mod m20250110_000003_create_land_use_surveys {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[derive(DeriveIden)]
    enum LandUseSurveys {
        Table,
        Id,
        UserId,
        CropsOwn,
        CropsGovt,
        CropsTraditional,
        CropsOther,
        PasturesOwn,
        PasturesGovt,
        PasturesTraditional,
        PasturesOther,
        GreenhousesOwn,
        GreenhousesGovt,
        GreenhousesTraditional,
        GreenhousesOther,
        NaturalForestOwn,
        NaturalForestGovt,
        NaturalForestTraditional,
        NaturalForestOther,
        WoodlandOwn,
        WoodlandGovt,
        WoodlandTraditional,
        WoodlandOther,
        CreatedAt,
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(LandUseSurveys::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(LandUseSurveys::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(LandUseSurveys::UserId).uuid().not_null());

            // Every area column defaults to zero so an omitted field
            // persists as zero
            for column in [
                LandUseSurveys::CropsOwn,
                LandUseSurveys::CropsGovt,
                LandUseSurveys::CropsTraditional,
                LandUseSurveys::CropsOther,
                LandUseSurveys::PasturesOwn,
                LandUseSurveys::PasturesGovt,
                LandUseSurveys::PasturesTraditional,
                LandUseSurveys::PasturesOther,
                LandUseSurveys::GreenhousesOwn,
                LandUseSurveys::GreenhousesGovt,
                LandUseSurveys::GreenhousesTraditional,
                LandUseSurveys::GreenhousesOther,
                LandUseSurveys::NaturalForestOwn,
                LandUseSurveys::NaturalForestGovt,
                LandUseSurveys::NaturalForestTraditional,
                LandUseSurveys::NaturalForestOther,
                LandUseSurveys::WoodlandOwn,
                LandUseSurveys::WoodlandGovt,
                LandUseSurveys::WoodlandTraditional,
                LandUseSurveys::WoodlandOther,
            ] {
                table.col(
                    ColumnDef::new(column)
                        .decimal()
                        .not_null()
                        .default(0),
                );
            }

            table
                .col(
                    ColumnDef::new(LandUseSurveys::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_land_use_surveys_user")
                        .from(LandUseSurveys::Table, LandUseSurveys::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                );

            manager.create_table(table.to_owned()).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_land_use_surveys_user_id")
                        .table(LandUseSurveys::Table)
                        .col(LandUseSurveys::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(LandUseSurveys::Table).to_owned())
                .await
        }
    }
}

mod m20250110_000004_create_horticultural_details {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[derive(DeriveIden)]
    enum HorticulturalDetails {
        Table,
        Id,
        UserId,
        FarmingPractice,
        WaterSupply,
        IrrigationSystem,
        CreatedAt,
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(HorticulturalDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(HorticulturalDetails::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(HorticulturalDetails::UserId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HorticulturalDetails::FarmingPractice)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HorticulturalDetails::WaterSupply)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HorticulturalDetails::IrrigationSystem)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HorticulturalDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_horticultural_details_user")
                                .from(HorticulturalDetails::Table, HorticulturalDetails::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_horticultural_details_user_id")
                        .table(HorticulturalDetails::Table)
                        .col(HorticulturalDetails::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(HorticulturalDetails::Table).to_owned())
                .await
        }
    }
}
