//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use crate::domain::user::{NewUser, User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        name: m.nombre,
        email: m.email,
        phone: m.telefono,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn insert_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict("El email ya está registrado.".to_string())
        }
        _ => db_err(e),
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, new: NewUser) -> DomainResult<i32> {
        debug!("Creating user: {}", new.email);

        let model = user::ActiveModel {
            nombre: Set(new.name),
            email: Set(new.email),
            telefono: Set(new.phone),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(insert_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
