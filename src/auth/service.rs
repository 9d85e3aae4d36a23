use crate::backend::Backend;
use crate::core::error::ServiceError;
use crate::models::session::Session;
use crate::models::user::{NewUser, PublicUser};
use crate::session::store::SessionStore;
use crate::validation::forms::validate_signup;
use std::sync::Arc;
use tracing::{info, warn};

/// Signup, login, logout and current-user retrieval over whichever backend
/// the deployment selected. Request authorization always rides on the
/// token the caller presents; the session store only caches the last
/// session issued here. The store is injected rather than reached for
/// globally, so tests can hand in their own.
pub struct AuthService {
    backend: Arc<dyn Backend>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn Backend>, session: Arc<SessionStore>) -> Self {
        Self { backend, session }
    }

    pub async fn signup(&self, form: &NewUser) -> Result<PublicUser, ServiceError> {
        let validated = validate_signup(form)?;
        self.backend.signup(&validated).await
    }

    /// On success the issued session is returned to the caller and cached
    /// in the session store.
    pub async fn login(&self, reg_no: &str, password: &str) -> Result<Session, ServiceError> {
        let (token, user) = self.backend.login(reg_no, password).await?;

        self.session.set_token(&token);
        self.session.set_user(&user);

        Ok(Session { token, user })
    }

    /// Fail-open: backend invalidation failures are logged and ignored;
    /// the cached session is always cleared.
    pub async fn logout(&self, token: &str) {
        if let Err(e) = self.backend.invalidate(token).await {
            warn!(error = %e, "Session invalidation failed, logging out locally anyway");
        }

        self.session.clear();
        info!("User logged out");
    }

    /// The user the presented token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<PublicUser, ServiceError> {
        self.backend.current_user(token).await
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
