use crate::models::user::PublicUser;
use serde::{Deserialize, Serialize};

/// Client-held proof of authentication: an opaque token plus a sanitized
/// copy of the user taken at login time. The copy may go stale; nothing
/// re-validates it after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: PublicUser,
}
