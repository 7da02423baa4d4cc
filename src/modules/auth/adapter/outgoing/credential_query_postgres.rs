use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::credential_query::{
    CredentialQuery, CredentialQueryError, UserCredentials,
};
use crate::user::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct CredentialQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CredentialQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialQuery for CredentialQueryPostgres {
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| CredentialQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|model| UserCredentials {
            user_id: UserId::from(model.id),
            password_hash: model.password_hash,
        }))
    }
}
