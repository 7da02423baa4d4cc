use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr,
    Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::SoftDeleteOutcome;
use crate::user::application::ports::outgoing::user_repository::{
    NewUserRecord, ProfileChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::{
    user_bios::{ActiveModel as UserBioActiveModel, Entity as UserBioEntity},
    users::{ActiveModel as UserActiveModel, Entity as UserEntity},
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Row lock on the owning user. Serializes against a concurrent soft delete.
    fn lock_active_user_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT is_deleted
            FROM users
            WHERE id = $1
            FOR UPDATE
            "#,
            vec![user_id.into()],
        )
    }

    fn update_names_stmt(user_id: Uuid, changes: &ProfileChanges) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name  = COALESCE($3, last_name)
            WHERE id = $1
              AND is_deleted = false
            "#,
            vec![
                user_id.into(),
                changes.first_name.clone().into(),
                changes.last_name.clone().into(),
            ],
        )
    }

    fn update_bio_stmt(user_id: Uuid, changes: &ProfileChanges) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE user_bios
            SET display_name    = COALESCE($2, display_name),
                store_name      = COALESCE($3, store_name),
                bio_description = COALESCE($4, bio_description),
                profile_image   = COALESCE($5, profile_image),
                show_real_name  = COALESCE($6, show_real_name),
                updated_at      = NOW()
            WHERE user_id = $1
            "#,
            vec![
                user_id.into(),
                changes.display_name.clone().into(),
                changes.store_name.clone().into(),
                changes.bio_description.clone().into(),
                changes.profile_image.clone().into(),
                changes.show_real_name.into(),
            ],
        )
    }

    fn soft_delete_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE users
            SET is_deleted = true
            WHERE id = $1
              AND is_deleted = false
            "#,
            vec![user_id.into()],
        )
    }

    /// Mirrors the delete flag onto the profile so its display name is released.
    fn release_bio_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE user_bios
            SET is_deleted = true
            WHERE user_id = $1
            "#,
            vec![user_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        error!(error = %e, "User repository database error");
        UserRepositoryError::DatabaseError(e.to_string())
    }

    /// A uniqueness violation is mapped to the conflict owned by the failing statement.
    fn map_write_err(e: DbErr, on_conflict: UserRepositoryError) -> UserRepositoryError {
        if is_unique_violation(&e) {
            return on_conflict;
        }
        Self::map_db_err(e)
    }
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user_with_bio(
        &self,
        record: NewUserRecord,
    ) -> Result<(), UserRepositoryError> {
        let user_id: Uuid = record.id.into();

        let user = UserActiveModel {
            id: Set(user_id),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            is_deleted: Set(false),
            created_at: NotSet,
        };

        let bio = UserBioActiveModel {
            user_id: Set(user_id),
            display_name: Set(record.display_name),
            store_name: NotSet,
            bio_description: NotSet,
            profile_image: NotSet,
            show_real_name: Set(false),
            is_deleted: Set(false),
            updated_at: NotSet,
        };

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = UserEntity::insert(user).exec_without_returning(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_write_err(
                e,
                UserRepositoryError::EmailAlreadyExists,
            ));
        }

        if let Err(e) = UserBioEntity::insert(bio).exec_without_returning(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_write_err(
                e,
                UserRepositoryError::DisplayNameAlreadyExists,
            ));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<(), UserRepositoryError> {
        let user_uuid: Uuid = user_id.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let locked = match txn.query_one(Self::lock_active_user_stmt(user_uuid)).await {
            Ok(row) => row,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let is_active = match locked {
            Some(row) => match row.try_get::<bool>("", "is_deleted") {
                Ok(is_deleted) => !is_deleted,
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(Self::map_db_err(e));
                }
            },
            None => false,
        };

        if !is_active {
            let _ = txn.rollback().await;
            return Err(UserRepositoryError::UserNotFound);
        }

        if changes.touches_user_row() {
            if let Err(e) = txn.execute(Self::update_names_stmt(user_uuid, &changes)).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        if changes.touches_bio_row() {
            match txn.execute(Self::update_bio_stmt(user_uuid, &changes)).await {
                Ok(res) if res.rows_affected() == 0 => {
                    let _ = txn.rollback().await;
                    return Err(UserRepositoryError::UserNotFound);
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(Self::map_write_err(
                        e,
                        UserRepositoryError::DisplayNameAlreadyExists,
                    ));
                }
            }
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn soft_delete_user(
        &self,
        user_id: UserId,
    ) -> Result<SoftDeleteOutcome, UserRepositoryError> {
        let user_uuid: Uuid = user_id.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let result = match txn.execute(Self::soft_delete_stmt(user_uuid)).await {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if result.rows_affected() > 0 {
            if let Err(e) = txn.execute(Self::release_bio_stmt(user_uuid)).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
            txn.commit().await.map_err(Self::map_db_err)?;
            return Ok(SoftDeleteOutcome::Deleted);
        }

        let _ = txn.rollback().await;

        // Nothing flipped: either already deleted or never existed
        match UserEntity::find_by_id(user_uuid)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
        {
            Some(_) => Ok(SoftDeleteOutcome::AlreadyDeleted),
            None => Err(UserRepositoryError::UserNotFound),
        }
    }
}
