//! Signup, login and the admin check

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult, StorageContext},
    models::user::{Role, SignupRequest, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a user account.
    ///
    /// The role is checked before anything touches the database.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        let role: Role = request
            .role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .ok_or_else(|| AppError::Validation("Invalid role".to_string()))?;

        let password = request
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = self
            .repository
            .users_create(
                request.username.as_deref(),
                request.email.as_deref(),
                password.as_deref(),
                role,
            )
            .await
            .storage_context("Signup failed")?;

        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Look up a user by email and check the password
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        tracing::info!("Login attempt: email={}", email);

        let user = self
            .repository
            .users_get_by_email(email)
            .await
            .storage_context("Login failed")?;

        match user {
            Some(user) if verify_password(&user.password, password) => {
                tracing::info!(user_id = user.id, "Login successful");
                Ok(user)
            }
            _ => {
                tracing::warn!("Login failed: invalid credentials for {}", email);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Ensure the acting user exists and is an admin, returning its id.
    ///
    /// A missing id, an unknown user, a failed lookup and a non-admin role
    /// are all rejected with the same authorization error.
    pub async fn require_admin(&self, user_id: Option<i32>, denial: &str) -> AppResult<i32> {
        let Some(user_id) = user_id else {
            return Err(AppError::Authorization(denial.to_string()));
        };

        match self.repository.users_get_role(user_id).await {
            Ok(Some(role)) if role.is_admin() => Ok(user_id),
            Ok(_) => Err(AppError::Authorization(denial.to_string())),
            Err(e) => {
                tracing::warn!("Role lookup failed for user {}: {}", user_id, e);
                Err(AppError::Authorization(denial.to_string()))
            }
        }
    }
}

/// Hash a password using Argon2 with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash.
///
/// A stored value that is not an Argon2 hash never matches.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password is not a valid Argon2 hash: {}", e);
            false
        }
    }
}
