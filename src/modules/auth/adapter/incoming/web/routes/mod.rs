mod login_user;
mod logout_user;

pub use login_user::*;
pub use logout_user::*;
