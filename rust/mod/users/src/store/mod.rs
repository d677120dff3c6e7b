//! Data access for user records.
//!
//! [`UserStore`] is the seam between the service and the database. The
//! service never sees SQL; it sees records and a small error taxonomy in
//! which "nothing to delete" is its own variant.

mod schema;
mod sql;

pub use sql::SqlUserStore;

use thiserror::Error;

use crate::model::{NewUser, UserRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record targeted by a delete no longer exists.
    #[error("{0}")]
    RecordNotFound(String),

    /// A unique column (email) already holds this value.
    #[error("{0}")]
    UniqueViolation(String),

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

impl From<billing_sql::SQLError> for StoreError {
    fn from(e: billing_sql::SQLError) -> Self {
        match e {
            billing_sql::SQLError::UniqueViolation(m) => StoreError::UniqueViolation(m),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Filter for [`UserStore::find_many`].
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring of `name`. Empty matches everything.
    pub name_contains: String,
}

/// Typed query/insert/delete primitives over the users table.
pub trait UserStore: Send + Sync {
    /// All records matching `filter`, in insertion order.
    fn find_many(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError>;

    /// Insert a record; the store assigns `user_id`.
    fn create(&self, data: NewUser) -> Result<UserRecord, StoreError>;

    fn find_unique(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Delete and return the record. `RecordNotFound` if no row matched.
    fn delete(&self, user_id: &str) -> Result<UserRecord, StoreError>;
}
