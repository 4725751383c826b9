//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Users table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Derived username, globally unique
    #[sea_orm(unique)]
    pub username: String,

    pub first_name: String,
    pub surname: String,

    /// Globally unique email
    #[sea_orm(unique)]
    pub email: String,

    pub phone_number: String,
    pub address: String,

    /// Argon2id hash
    pub password_hash: String,

    /// Last-known geolocation
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "demographic::Entity")]
    Demographics,
    #[sea_orm(has_many = "land_use::Entity")]
    LandUseSurveys,
    #[sea_orm(has_many = "horticultural_detail::Entity")]
    HorticulturalDetails,
}

impl Related<demographic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demographics.def()
    }
}

impl Related<land_use::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LandUseSurveys.def()
    }
}

impl Related<horticultural_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HorticulturalDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Demographics table module
pub mod demographic {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "demographics")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub user_id: Uuid,

        pub registered_name: String,
        pub province: String,
        pub district: String,
        pub municipality: String,

        /// Pipe-joined activity codes
        pub agricultural_activity: String,
        pub other_agricultural_activity: Option<String>,
        /// Pipe-joined activity codes
        pub farm_activity: String,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::UserId",
            to = "super::Column::Id"
        )]
        User,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Land-use surveys table module
pub mod land_use {
    use sea_orm::entity::prelude::*;

    /// Twenty area columns: five land-use types x four tenure categories
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "land_use_surveys")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub user_id: Uuid,

        pub crops_own: Decimal,
        pub crops_govt: Decimal,
        pub crops_traditional: Decimal,
        pub crops_other: Decimal,

        pub pastures_own: Decimal,
        pub pastures_govt: Decimal,
        pub pastures_traditional: Decimal,
        pub pastures_other: Decimal,

        pub greenhouses_own: Decimal,
        pub greenhouses_govt: Decimal,
        pub greenhouses_traditional: Decimal,
        pub greenhouses_other: Decimal,

        pub natural_forest_own: Decimal,
        pub natural_forest_govt: Decimal,
        pub natural_forest_traditional: Decimal,
        pub natural_forest_other: Decimal,

        pub woodland_own: Decimal,
        pub woodland_govt: Decimal,
        pub woodland_traditional: Decimal,
        pub woodland_other: Decimal,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::UserId",
            to = "super::Column::Id"
        )]
        User,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Horticultural detail table module
pub mod horticultural_detail {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "horticultural_details")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub user_id: Uuid,

        /// Pipe-joined option values
        pub farming_practice: String,
        pub water_supply: String,
        pub irrigation_system: String,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::UserId",
            to = "super::Column::Id"
        )]
        User,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
