use async_trait::async_trait;
use brandhub_error::StorageResult;
use brandhub_models::CredentialVerifier;
use brandhub_repository::UserRepository;
use brandhub_utils::hash::bcrypt_check;
use sea_orm::DatabaseConnection;
use tracing::instrument;

/// Checks passwords against the bcrypt hashes in the `users` table.
#[derive(Debug, Clone)]
pub struct DbCredentialVerifier {
    db: DatabaseConnection,
}

impl DbCredentialVerifier {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialVerifier for DbCredentialVerifier {
    #[instrument(name = "verify-credentials", skip(self, password))]
    async fn verify(&self, email: &str, password: &str) -> StorageResult<bool> {
        let Some(user) = UserRepository::find_by_email(email, &self.db).await? else {
            return Ok(false);
        };
        Ok(bcrypt_check(password, &user.password))
    }

    async fn resolve_user_id(&self, email: &str) -> StorageResult<Option<i32>> {
        UserRepository::find_id_by_email(email, &self.db).await
    }
}
