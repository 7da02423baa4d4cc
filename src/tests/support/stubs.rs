use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginOutput, LoginUserUseCase,
};
use crate::marker::application::domain::entities::MarkerWithOwner;
use crate::marker::application::ports::incoming::use_cases::{GetMarkersError, GetMarkersUseCase};
use crate::user::application::domain::entities::SoftDeleteOutcome;
use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserError, GetCurrentUserUseCase, GetPublicSummariesError,
    GetPublicSummariesUseCase, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
    RegisteredUser, SearchProfilesError, SearchProfilesQuery, SearchProfilesUseCase,
    SoftDeleteUserError, SoftDeleteUserUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::user::application::ports::outgoing::{ProfileSummary, UserDetail};

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _command: UpdateProfileCommand) -> Result<(), UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl SoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<SoftDeleteOutcome, SoftDeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCurrentUserUseCase;

#[async_trait]
impl GetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserDetail, GetCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

/// Public listings default to empty rather than panicking.
#[derive(Default, Clone)]
pub struct StubGetPublicSummariesUseCase;

#[async_trait]
impl GetPublicSummariesUseCase for StubGetPublicSummariesUseCase {
    async fn execute(&self) -> Result<Vec<ProfileSummary>, GetPublicSummariesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubSearchProfilesUseCase;

#[async_trait]
impl SearchProfilesUseCase for StubSearchProfilesUseCase {
    async fn execute(
        &self,
        _query: SearchProfilesQuery,
    ) -> Result<Vec<ProfileSummary>, SearchProfilesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetMarkersUseCase;

#[async_trait]
impl GetMarkersUseCase for StubGetMarkersUseCase {
    async fn execute(&self) -> Result<Vec<MarkerWithOwner>, GetMarkersError> {
        Ok(vec![])
    }
}
