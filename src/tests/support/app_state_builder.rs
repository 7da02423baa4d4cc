use crate::auth::adapter::incoming::web::SessionCookie;
use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::marker::application::ports::incoming::use_cases::GetMarkersUseCase;
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, GetPublicSummariesUseCase, RegisterUserUseCase, SearchProfilesUseCase,
    SoftDeleteUserUseCase, UpdateProfileUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    soft_delete_user: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
    get_current_user: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    get_public_summaries: Arc<dyn GetPublicSummariesUseCase + Send + Sync>,
    search_profiles: Arc<dyn SearchProfilesUseCase + Send + Sync>,
    get_markers: Arc<dyn GetMarkersUseCase + Send + Sync>,
    session_cookie: SessionCookie,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            register_user: Arc::new(StubRegisterUserUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            soft_delete_user: Arc::new(StubSoftDeleteUserUseCase),
            get_current_user: Arc::new(StubGetCurrentUserUseCase),
            get_public_summaries: Arc::new(StubGetPublicSummariesUseCase),
            search_profiles: Arc::new(StubSearchProfilesUseCase),
            get_markers: Arc::new(StubGetMarkersUseCase),
            session_cookie: SessionCookie::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: impl SoftDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.soft_delete_user = Arc::new(uc);
        self
    }

    pub fn with_get_current_user(
        mut self,
        uc: impl GetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_current_user = Arc::new(uc);
        self
    }

    pub fn with_get_public_summaries(
        mut self,
        uc: impl GetPublicSummariesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_public_summaries = Arc::new(uc);
        self
    }

    pub fn with_search_profiles(
        mut self,
        uc: impl SearchProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_profiles = Arc::new(uc);
        self
    }

    pub fn with_get_markers(mut self, uc: impl GetMarkersUseCase + Send + Sync + 'static) -> Self {
        self.get_markers = Arc::new(uc);
        self
    }

    pub fn with_session_cookie(mut self, cookie: SessionCookie) -> Self {
        self.session_cookie = cookie;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            register_user_use_case: self.register_user,
            update_profile_use_case: self.update_profile,
            soft_delete_user_use_case: self.soft_delete_user,
            get_current_user_use_case: self.get_current_user,
            get_public_summaries_use_case: self.get_public_summaries,
            search_profiles_use_case: self.search_profiles,
            get_markers_use_case: self.get_markers,
            session_cookie: self.session_cookie,
        })
    }
}
