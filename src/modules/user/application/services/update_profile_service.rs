use async_trait::async_trait;
use tracing::{debug, info};

use crate::user::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    allow_name_edits: bool,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, allow_name_edits: bool) -> Self {
        Self {
            repository,
            allow_name_edits,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<(), UpdateProfileError> {
        let user_id = command.user_id();

        if command.changes().touches_user_row() && !self.allow_name_edits {
            return Err(UpdateProfileError::NameEditDisabled);
        }

        if command.changes().is_empty() {
            debug!(user_id = %user_id, "Profile update with no fields, nothing to do");
            return Ok(());
        }

        self.repository
            .update_profile(user_id, command.into_changes())
            .await
            .map_err(|e| match e {
                UserRepositoryError::DisplayNameAlreadyExists => {
                    UpdateProfileError::DisplayNameAlreadyExists
                }
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "Profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::auth::application::domain::entities::UserId;
    use crate::user::application::domain::entities::SoftDeleteOutcome;
    use crate::user::application::ports::incoming::use_cases::UpdateProfileInput;
    use crate::user::application::ports::outgoing::{NewUserRecord, ProfileChanges};

    // ──────────────────────────────────────────────────────────
    // Recording Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct RecordingRepository {
        calls: Arc<Mutex<Vec<(UserId, ProfileChanges)>>>,
        error: Option<UserRepositoryError>,
    }

    impl RecordingRepository {
        fn failing(error: UserRepositoryError) -> Self {
            Self {
                error: Some(error),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(UserId, ProfileChanges)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_user_with_bio(
            &self,
            _record: NewUserRecord,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!("Not used in update_profile tests")
        }

        async fn update_profile(
            &self,
            user_id: UserId,
            changes: ProfileChanges,
        ) -> Result<(), UserRepositoryError> {
            self.calls.lock().unwrap().push((user_id, changes));
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn soft_delete_user(
            &self,
            _user_id: UserId,
        ) -> Result<SoftDeleteOutcome, UserRepositoryError> {
            unimplemented!("Not used in update_profile tests")
        }
    }

    fn command(user_id: UserId, input: UpdateProfileInput) -> UpdateProfileCommand {
        UpdateProfileCommand::new(user_id, input).unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn only_display_name_is_forwarded() {
        let repo = RecordingRepository::default();
        let service = UpdateProfileService::new(repo.clone(), false);
        let user_id = UserId::new();

        let result = service
            .execute(command(
                user_id,
                UpdateProfileInput {
                    display_name: Some("ToyBox".to_string()),
                    ..Default::default()
                },
            ))
            .await;

        assert!(result.is_ok());

        let calls = repo.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, user_id);
        assert_eq!(calls[0].1.display_name.as_deref(), Some("ToyBox"));
        assert_eq!(calls[0].1.bio_description, None);
        assert_eq!(calls[0].1.profile_image, None);
        assert_eq!(calls[0].1.show_real_name, None);
    }

    #[tokio::test]
    async fn empty_update_is_a_noop_success() {
        let repo = RecordingRepository::default();
        let service = UpdateProfileService::new(repo.clone(), false);

        let result = service
            .execute(command(UserId::new(), UpdateProfileInput::default()))
            .await;

        assert!(result.is_ok());
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn name_edits_are_refused_when_disabled() {
        let repo = RecordingRepository::default();
        let service = UpdateProfileService::new(repo.clone(), false);

        let result = service
            .execute(command(
                UserId::new(),
                UpdateProfileInput {
                    first_name: Some("Augusta".to_string()),
                    bio_description: Some("Tin robots".to_string()),
                    ..Default::default()
                },
            ))
            .await;

        assert!(matches!(result, Err(UpdateProfileError::NameEditDisabled)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn name_edits_are_forwarded_when_enabled() {
        let repo = RecordingRepository::default();
        let service = UpdateProfileService::new(repo.clone(), true);

        let result = service
            .execute(command(
                UserId::new(),
                UpdateProfileInput {
                    first_name: Some("Augusta".to_string()),
                    ..Default::default()
                },
            ))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.calls()[0].1.first_name.as_deref(), Some("Augusta"));
    }

    #[tokio::test]
    async fn repository_errors_are_mapped() {
        let cases = [
            (
                UserRepositoryError::DisplayNameAlreadyExists,
                "DisplayNameAlreadyExists",
            ),
            (UserRepositoryError::UserNotFound, "UserNotFound"),
            (
                UserRepositoryError::DatabaseError("boom".to_string()),
                "RepositoryError",
            ),
        ];

        for (repo_error, expected) in cases {
            let service = UpdateProfileService::new(RecordingRepository::failing(repo_error), false);

            let result = service
                .execute(command(
                    UserId::new(),
                    UpdateProfileInput {
                        display_name: Some("ToyBox".to_string()),
                        ..Default::default()
                    },
                ))
                .await;

            let actual = match result {
                Err(UpdateProfileError::DisplayNameAlreadyExists) => "DisplayNameAlreadyExists",
                Err(UpdateProfileError::UserNotFound) => "UserNotFound",
                Err(UpdateProfileError::RepositoryError(_)) => "RepositoryError",
                other => panic!("unexpected result {:?}", other),
            };
            assert_eq!(actual, expected);
        }
    }
}
