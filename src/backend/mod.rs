pub mod direct;
pub mod rest;

use crate::core::error::ServiceError;
use crate::models::item::{Category, Item, ItemDraft, ItemKind};
use crate::models::user::{NewUser, PublicUser};
use crate::validation::forms::ValidatedSignup;
use async_trait::async_trait;

/// One interface over the two mutually exclusive integration modes,
/// picked at startup from configuration.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Create an account. Fails with Conflict if the reg_no is taken.
    async fn signup(&self, signup: &ValidatedSignup) -> Result<PublicUser, ServiceError>;

    /// Check credentials and issue a session token. Unknown reg_no and
    /// wrong password must be indistinguishable to the caller.
    async fn login(&self, reg_no: &str, password: &str)
        -> Result<(String, PublicUser), ServiceError>;

    /// Best-effort remote invalidation of a token. Callers must log out
    /// locally regardless of the outcome.
    async fn invalidate(&self, token: &str) -> Result<(), ServiceError>;

    /// Resolve the user a live token belongs to. Unknown or expired
    /// tokens fail with an Auth error.
    async fn current_user(&self, token: &str) -> Result<PublicUser, ServiceError>;

    /// All items in a collection, newest first.
    async fn fetch_items(&self, kind: ItemKind) -> Result<Vec<Item>, ServiceError>;

    /// Persist a fully resolved report into the kind's collection.
    async fn insert_item(
        &self,
        draft: &ItemDraft,
        kind: ItemKind,
        token: &str,
    ) -> Result<Item, ServiceError>;

    /// Default image for a category, if the deployment manages one.
    async fn category_default_image(
        &self,
        category: Category,
    ) -> Result<Option<String>, ServiceError>;
}

/// Re-serialize a signup for REST transport. The remote API hashes the
/// password itself, so the plaintext travels in the JSON body.
pub(crate) fn signup_payload(signup: &ValidatedSignup) -> NewUser {
    NewUser {
        reg_no: signup.reg_no.clone(),
        name: signup.name.clone(),
        contact: signup.contact.clone(),
        department: signup.department.clone(),
        password: signup.password.clone(),
        confirm_password: signup.password.clone(),
    }
}
