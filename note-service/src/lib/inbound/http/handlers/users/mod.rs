use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;

pub mod change_password;
pub mod delete_user;
pub mod get_all_users;
pub mod get_user_by_id;
pub mod insert_user;
pub mod update_user;
pub mod user_login;

pub use change_password::change_password;
pub use delete_user::delete_user;
pub use get_all_users::get_all_users;
pub use get_user_by_id::get_user_by_id;
pub use insert_user::insert_user;
pub use update_user::update_user;
pub use user_login::user_login;

/// Wire representation of a user.
///
/// The password digest never leaves the service; plaintext passwords exist
/// only inside request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            full_name: user.full_name.clone(),
            created_at: user.created_at,
        }
    }
}
