use brandhub_error::{auth::AuthError, AuthResult};
use brandhub_models::{
    domain::prelude::{LoginRequest, NewUser, RegisterRequest, Session},
    enums::session::SessionStatus,
    CredentialVerifier, SessionStore,
};
use brandhub_repository::UserRepository;
use brandhub_utils::hash::bcrypt_hash;
use chrono::Duration;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Registration, login and bearer-token checks.
#[derive(Clone)]
pub struct AuthService {
    db: DatabaseConnection,
    credentials: Arc<dyn CredentialVerifier>,
    sessions: Arc<dyn SessionStore>,
    lifetime: Duration,
}

impl AuthService {
    pub fn new(
        db: DatabaseConnection,
        credentials: Arc<dyn CredentialVerifier>,
        sessions: Arc<dyn SessionStore>,
        lifetime: Duration,
    ) -> Self {
        Self {
            db,
            credentials,
            sessions,
            lifetime,
        }
    }

    #[instrument(name = "register-user", skip(self, req), fields(email = %req.email))]
    pub async fn register(&self, req: RegisterRequest) -> AuthResult<i32> {
        req.validate()?;
        if UserRepository::exists_by_email(&req.email, &self.db).await? {
            return Err(AuthError::UserExists(req.email));
        }
        let password =
            bcrypt_hash(&req.password).map_err(|e| AuthError::MalformedInput(e.to_string()))?;
        let id = UserRepository::create(
            NewUser {
                email: req.email,
                password,
                name: req.name,
                surname: req.surname,
            },
            &self.db,
        )
        .await?;
        info!(user_id = id, "User registered");
        Ok(id)
    }

    /// Mint and store a session for valid credentials.
    #[instrument(name = "login", skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: LoginRequest) -> AuthResult<Session> {
        req.validate()?;
        if !self.credentials.verify(&req.email, &req.password).await? {
            return Err(AuthError::InvalidCredentials);
        }
        let session = Session::new(req.email, self.lifetime);
        self.sessions.store(&session).await?;
        info!(expires_at = %session.expires_at, "Session opened");
        Ok(session)
    }

    /// The live session behind `token`. An expired one is deleted on sight.
    pub async fn authenticate(&self, token: &Uuid) -> AuthResult<Session> {
        let session = self
            .sessions
            .find(token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;
        if session.is_expired() {
            self.sessions.delete(token).await?;
            return Err(AuthError::SessionExpired);
        }
        Ok(session)
    }

    pub async fn status(&self, token: &Uuid) -> AuthResult<SessionStatus> {
        match self.authenticate(token).await {
            Ok(_) => Ok(SessionStatus::Active),
            Err(AuthError::SessionNotFound) => Ok(SessionStatus::NotFound),
            Err(AuthError::SessionExpired) => Ok(SessionStatus::Expired),
            Err(e) => Err(e),
        }
    }

    /// Returns whether a session was removed.
    pub async fn logout(&self, token: &Uuid) -> AuthResult<bool> {
        Ok(self.sessions.delete(token).await?)
    }

    pub fn parse_token(token: &str) -> AuthResult<Uuid> {
        Uuid::parse_str(token.trim()).map_err(|e| AuthError::MalformedInput(e.to_string()))
    }
}
