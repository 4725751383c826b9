//! SeaORM repository implementations

use crate::contract::{Demographic, HorticulturalDetail, LandUseSurvey, User};
use crate::domain::repository::{InsertError, ResponseRepository, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{prelude::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

fn classify_insert_error(err: sea_orm::DbErr) -> InsertError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(constraint)) => {
            InsertError::UniqueViolation(constraint)
        }
        _ => InsertError::Other(err.into()),
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: &User) -> Result<User, InsertError> {
        let active: entity::ActiveModel = user.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify_insert_error)?;

        Ok(result.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn update_location(&self, id: Uuid, latitude: f64, longitude: f64) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::Latitude, Expr::value(latitude))
            .col_expr(entity::Column::Longitude, Expr::value(longitude))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}

// ===== Response Repository =====

pub struct SeaOrmResponseRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmResponseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResponseRepository for SeaOrmResponseRepository {
    async fn insert_demographic(&self, demographic: &Demographic) -> Result<Demographic> {
        let active: entity::demographic::ActiveModel = demographic.into();
        let result = entity::demographic::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn insert_land_use(&self, survey: &LandUseSurvey) -> Result<LandUseSurvey> {
        let active: entity::land_use::ActiveModel = survey.into();
        let result = entity::land_use::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn insert_horticultural_detail(
        &self,
        detail: &HorticulturalDetail,
    ) -> Result<HorticulturalDetail> {
        let active: entity::horticultural_detail::ActiveModel = detail.into();
        let result = entity::horticultural_detail::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }
}
