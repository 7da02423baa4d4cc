mod login_user_use_case;

pub use login_user_use_case::{
    LoginCommand, LoginCommandError, LoginError, LoginOutput, LoginUserUseCase,
};
