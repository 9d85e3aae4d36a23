use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::mint_token;
use crate::backend::Backend;
use crate::core::error::ServiceError;
use crate::models::item::{Category, Item, ItemDraft, ItemKind};
use crate::models::user::{PublicUser, User};
use crate::stores::table::TableStore;
use crate::validation::forms::ValidatedSignup;
use async_trait::async_trait;
use tracing::{debug, info};

/// Direct-store mode: every operation runs against the in-process table
/// store, with password hashing done on this side of the boundary. Minted
/// tokens are recorded in the `sessions` collection so item inserts can be
/// authorized without a remote API.
pub struct DirectBackend {
    tables: TableStore,
    bcrypt_cost: u32,
}

impl DirectBackend {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            tables: TableStore::new(),
            bcrypt_cost,
        }
    }

    /// Direct access to the collections, used by startup seeding and tests.
    pub fn tables(&self) -> &TableStore {
        &self.tables
    }
}

#[async_trait]
impl Backend for DirectBackend {
    async fn signup(&self, signup: &ValidatedSignup) -> Result<PublicUser, ServiceError> {
        // Existence check and insert are two separate steps; concurrent
        // signups for the same reg_no can both pass the check. Accepted at
        // campus signup volume.
        if self.tables.select_user(&signup.reg_no).is_some() {
            return Err(ServiceError::Conflict(
                "User with this registration number already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&signup.password, self.bcrypt_cost)?;

        let user = User {
            reg_no: signup.reg_no.clone(),
            name: signup.name.clone(),
            contact: signup.contact.clone(),
            department: signup.department.clone(),
            password_hash,
        };
        self.tables.insert_user(user.clone());

        info!(reg_no = %user.reg_no, "User registered");

        Ok(user.sanitized())
    }

    async fn login(
        &self,
        reg_no: &str,
        password: &str,
    ) -> Result<(String, PublicUser), ServiceError> {
        // Unknown reg_no and bad password produce the same error so the
        // endpoint cannot be used to enumerate accounts.
        let user = self
            .tables
            .select_user(reg_no)
            .ok_or_else(ServiceError::invalid_credentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(ServiceError::invalid_credentials());
        }

        let token = mint_token();
        self.tables
            .insert_session(token.clone(), user.reg_no.clone());

        info!(reg_no = %user.reg_no, "User logged in");

        Ok((token, user.sanitized()))
    }

    async fn invalidate(&self, token: &str) -> Result<(), ServiceError> {
        if self.tables.remove_session(token).is_some() {
            debug!("Session invalidated");
        }
        Ok(())
    }

    async fn current_user(&self, token: &str) -> Result<PublicUser, ServiceError> {
        let reg_no = self
            .tables
            .select_session(token)
            .ok_or_else(ServiceError::session_expired)?;

        // A session row outliving its user means the store was tampered
        // with; treat it the same as an expired token.
        let user = self
            .tables
            .select_user(&reg_no)
            .ok_or_else(ServiceError::session_expired)?;

        Ok(user.sanitized())
    }

    async fn fetch_items(&self, kind: ItemKind) -> Result<Vec<Item>, ServiceError> {
        Ok(self.tables.select_items(kind.collection()))
    }

    async fn insert_item(
        &self,
        draft: &ItemDraft,
        kind: ItemKind,
        token: &str,
    ) -> Result<Item, ServiceError> {
        if self.tables.select_session(token).is_none() {
            return Err(ServiceError::session_expired());
        }

        let item = self.tables.insert_item(kind.collection(), draft);

        info!(
            item_id = item.id,
            collection = kind.collection(),
            added_by = %item.added_by,
            "Item reported"
        );

        Ok(item)
    }

    async fn category_default_image(
        &self,
        category: Category,
    ) -> Result<Option<String>, ServiceError> {
        Ok(self.tables.select_category_default(category))
    }
}
