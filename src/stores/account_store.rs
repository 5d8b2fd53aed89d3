use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{AccountError, InternalError};
use crate::types::db::account::{self, Entity as Account};

/// AccountStore is the identity system of record: one credentialed account
/// per email. Everything else in the system hangs off the account id.
pub struct AccountStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl AccountStore {
    /// Create a new AccountStore with the given database connection and password pepper
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self {
            db,
            password_pepper,
        }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2 init", e.to_string()))
    }

    /// Create a new account
    ///
    /// # Arguments
    /// * `email` - The account email; exactly one account may exist per email
    /// * `password` - The plaintext password to hash and store
    ///
    /// # Returns
    /// * `Ok(String)` - The account id (UUID) of the created account
    /// * `Err` - `AccountError::DuplicateEmail` if the email is taken
    pub async fn add_account(&self, email: &str, password: &str) -> Result<String, InternalError> {
        let existing = Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find account by email", e))?;

        if existing.is_some() {
            return Err(AccountError::DuplicateEmail(email.to_string()).into());
        }

        let account_id = Uuid::new_v4().to_string();

        let salt = SaltString::generate(&mut rand_core::OsRng);
        let password_hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash password", e.to_string()))?
            .to_string();

        let new_account = account::ActiveModel {
            id: Set(account_id.clone()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().timestamp()),
        };

        new_account.insert(&self.db).await.map_err(|e| {
            // The pre-check races with concurrent sign-ups; the unique
            // constraint is the real guard
            if e.to_string().contains("UNIQUE") {
                InternalError::from(AccountError::DuplicateEmail(email.to_string()))
            } else {
                InternalError::database("insert account", e)
            }
        })?;

        Ok(account_id)
    }

    /// Verify account credentials and return the account id on success
    ///
    /// # Returns
    /// * `Ok(String)` - The account id if credentials are valid
    /// * `Err` - `AccountError::InvalidCredentials` on unknown email or wrong password
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<String, InternalError> {
        let account = Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find account by email", e))?
            .ok_or(AccountError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&account.password_hash)
            .map_err(|_| AccountError::InvalidCredentials)?;

        self.argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AccountError::InvalidCredentials)?;

        Ok(account.id)
    }

    /// Fetch an account by id
    pub async fn get_by_id(&self, account_id: &str) -> Result<account::Model, InternalError> {
        Account::find_by_id(account_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find account by id", e))?
            .ok_or_else(|| AccountError::NotFound(account_id.to_string()).into())
    }

    /// List every account (id and email) for the admin dashboard
    pub async fn list_all(&self) -> Result<Vec<account::Model>, InternalError> {
        Account::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list accounts", e))
    }

    /// Delete an account row
    ///
    /// Must run LAST in the user deletion sequence: every dependent row
    /// (profile and below) has to be gone before the identity record is.
    pub async fn delete(&self, account_id: &str) -> Result<(), InternalError> {
        Account::delete_by_id(account_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete account", e))?;

        Ok(())
    }
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("db", &"<connection>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}
