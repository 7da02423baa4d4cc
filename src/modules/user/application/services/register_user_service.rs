use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::{domain::entities::UserId, ports::outgoing::PasswordHasher};
use crate::user::application::ports::{
    incoming::use_cases::{
        RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
    },
    outgoing::{NewUserRecord, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let record = NewUserRecord {
            id: UserId::new(),
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            email: command.email().to_string(),
            password_hash,
            display_name: command.display_name().to_string(),
        };

        self.repository
            .create_user_with_bio(record.clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::DisplayNameAlreadyExists => {
                    RegisterUserError::DisplayNameAlreadyExists
                }
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %record.id, "User registered");

        Ok(RegisteredUser {
            id: record.id.value(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            display_name: record.display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::auth::application::ports::outgoing::HashError;
    use crate::user::application::domain::entities::SoftDeleteOutcome;
    use crate::user::application::ports::outgoing::ProfileChanges;

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user_with_bio(&self, record: NewUserRecord) -> Result<(), UserRepositoryError>;
            async fn update_profile(&self, user_id: UserId, changes: ProfileChanges) -> Result<(), UserRepositoryError>;
            async fn soft_delete_user(&self, user_id: UserId) -> Result<SoftDeleteOutcome, UserRepositoryError>;
        }
    }

    struct FakeHasher {
        fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            if self.fail {
                return Err(HashError::HashFailed);
            }
            Ok(format!("hashed:{}", password))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    fn command() -> RegisterUserCommand {
        RegisterUserCommand::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "A@X.com".to_string(),
            "correct-horse".to_string(),
            "ToyBox".to_string(),
        )
        .unwrap()
    }

    fn service(repo: MockUserRepositoryMock, fail_hash: bool) -> RegisterUserService<MockUserRepositoryMock> {
        RegisterUserService::new(repo, Arc::new(FakeHasher { fail: fail_hash }))
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn register_stores_hashed_password_and_returns_summary() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio()
            .withf(|record| {
                record.email == "a@x.com"
                    && record.password_hash == "hashed:correct-horse"
                    && record.display_name == "ToyBox"
                    && record.first_name == "Ada"
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo, false).execute(command()).await;

        let registered = result.expect("registration should succeed");
        assert_eq!(registered.email, "a@x.com");
        assert_eq!(registered.display_name, "ToyBox");
        assert_eq!(registered.first_name, "Ada");
        assert_eq!(registered.last_name, "Lovelace");
        assert!(!registered.id.is_nil());
    }

    #[tokio::test]
    async fn every_registration_gets_a_fresh_id() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio().returning(|_| Ok(()));
        let service = service(repo, false);

        let first = service.execute(command()).await.unwrap();
        let second = service.execute(command()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio()
            .returning(|_| Err(UserRepositoryError::EmailAlreadyExists));

        let result = service(repo, false).execute(command()).await;

        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn duplicate_display_name_is_a_conflict() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio()
            .returning(|_| Err(UserRepositoryError::DisplayNameAlreadyExists));

        let result = service(repo, false).execute(command()).await;

        assert!(matches!(
            result,
            Err(RegisterUserError::DisplayNameAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn hashing_failure_never_reaches_the_store() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio().never();

        let result = service(repo, true).execute(command()).await;

        assert!(matches!(result, Err(RegisterUserError::HashingFailed(_))));
    }

    #[tokio::test]
    async fn other_store_errors_are_mapped() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user_with_bio()
            .returning(|_| Err(UserRepositoryError::DatabaseError("connection lost".to_string())));

        let result = service(repo, false).execute(command()).await;

        match result {
            Err(RegisterUserError::RepositoryError(msg)) => {
                assert!(msg.contains("connection lost"))
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
