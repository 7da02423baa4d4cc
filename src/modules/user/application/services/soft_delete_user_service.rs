use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::SoftDeleteOutcome;
use crate::user::application::ports::{
    incoming::use_cases::{SoftDeleteUserError, SoftDeleteUserUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteUserUseCase for SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<SoftDeleteOutcome, SoftDeleteUserError> {
        let outcome = self
            .repository
            .soft_delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SoftDeleteUserError::UserNotFound,
                other => SoftDeleteUserError::RepositoryError(other.to_string()),
            })?;

        match outcome {
            SoftDeleteOutcome::Deleted => info!(user_id = %user_id, "User soft-deleted"),
            SoftDeleteOutcome::AlreadyDeleted => {
                info!(user_id = %user_id, "User was already soft-deleted")
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};

    use crate::user::application::ports::outgoing::{NewUserRecord, ProfileChanges};

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user_with_bio(&self, record: NewUserRecord) -> Result<(), UserRepositoryError>;
            async fn update_profile(&self, user_id: UserId, changes: ProfileChanges) -> Result<(), UserRepositoryError>;
            async fn soft_delete_user(&self, user_id: UserId) -> Result<SoftDeleteOutcome, UserRepositoryError>;
        }
    }

    #[tokio::test]
    async fn first_delete_reports_deleted() {
        let user_id = UserId::new();
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_soft_delete_user()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(SoftDeleteOutcome::Deleted));

        let result = SoftDeleteUserService::new(repo).execute(user_id).await;

        assert_eq!(result.unwrap(), SoftDeleteOutcome::Deleted);
    }

    #[tokio::test]
    async fn repeated_delete_reports_already_deleted() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_soft_delete_user()
            .returning(|_| Ok(SoftDeleteOutcome::AlreadyDeleted));

        let result = SoftDeleteUserService::new(repo).execute(UserId::new()).await;

        assert_eq!(result.unwrap(), SoftDeleteOutcome::AlreadyDeleted);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_soft_delete_user()
            .returning(|_| Err(UserRepositoryError::UserNotFound));

        let result = SoftDeleteUserService::new(repo).execute(UserId::new()).await;

        assert!(matches!(result, Err(SoftDeleteUserError::UserNotFound)));
    }

    #[tokio::test]
    async fn store_error_is_mapped() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_soft_delete_user()
            .returning(|_| Err(UserRepositoryError::DatabaseError("timeout".to_string())));

        let result = SoftDeleteUserService::new(repo).execute(UserId::new()).await;

        assert!(matches!(result, Err(SoftDeleteUserError::RepositoryError(_))));
    }
}
