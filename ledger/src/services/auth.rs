//! Authentication service
//!
//! Password hashes are stored as `salt$sha256hex(salt + password)` with a
//! random hex salt per user.

use crate::config::{HASH_SEPARATOR, SALT_SIZE};
use crate::database::{User, UserRepository};
use crate::error::{AppError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

fn random_salt() -> String {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Hash a password. A fresh random salt is drawn when `salt` is `None`.
pub fn hash_password(password: &str, salt: Option<&str>) -> String {
    let salt = salt.map(str::to_string).unwrap_or_else(random_salt);
    let digest = sha256_hex(format!("{}{}", salt, password).as_bytes());
    format!("{}{}{}", salt, HASH_SEPARATOR, digest)
}

/// Check a password against a stored `salt$digest`. Malformed hashes never verify.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match password_hash.split_once(HASH_SEPARATOR) {
        Some((salt, digest)) => sha256_hex(format!("{}{}", salt, password).as_bytes()) == digest,
        None => false,
    }
}

/// Service for registration, login and password changes
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Register a new user. Fails if the name is taken.
    pub async fn register(&self, name: &str, password: &str, email: Option<&str>) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("username required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password required".to_string()));
        }
        if self.users.get_by_name(name).await?.is_some() {
            return Err(AppError::Validation("username already exists".to_string()));
        }

        let user = self
            .users
            .create(name, email, &hash_password(password, None))
            .await?;

        tracing::info!("Registered user: {} (id={})", user.name, user.id);
        Ok(user)
    }

    /// Verify credentials
    pub async fn login(&self, name: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .get_by_name(name.trim())
            .await?
            .filter(|u| verify_password(password, &u.password_hash))
            .ok_or_else(|| AppError::Auth("invalid username or password".to_string()))?;

        tracing::info!("User logged in: {}", user.name);
        Ok(user)
    }

    pub async fn get_user(&self, name: &str) -> Result<Option<User>> {
        self.users.get_by_name(name.trim()).await
    }

    /// Replace the password after checking the old one
    pub async fn change_password(&self, name: &str, old: &str, new: &str) -> Result<()> {
        if new.is_empty() {
            return Err(AppError::Validation("password required".to_string()));
        }

        let user = self
            .users
            .get_by_name(name.trim())
            .await?
            .filter(|u| verify_password(old, &u.password_hash))
            .ok_or_else(|| AppError::Auth("old password incorrect or user missing".to_string()))?;

        self.users
            .update_password_hash(user.id, &hash_password(new, None))
            .await?;

        tracing::info!("Password changed for user: {}", user.name);
        Ok(())
    }
}
