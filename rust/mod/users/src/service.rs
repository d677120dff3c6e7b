use std::sync::Arc;

use billing_core::ServiceError;
use tracing::{debug, error, info};

use crate::model::{CreateUserInput, UserRecord};
use crate::store::{StoreError, UserFilter, UserStore};

/// Stateless request logic for user records.
///
/// Holds only the shared store handle; concurrent requests never share
/// mutable state here.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Records whose name contains `term`, case-insensitively.
    pub async fn list(&self, term: &str) -> Result<Vec<UserRecord>, ServiceError> {
        let filter = UserFilter {
            name_contains: term.to_string(),
        };
        self.blocking(move |store| store.find_many(&filter))
            .await?
            .map_err(|e| {
                error!(error = %e, "error retrieving users");
                ServiceError::storage("Error retrieving users", e)
            })
    }

    /// Validate, derive totals and insert.
    pub async fn create(&self, input: CreateUserInput) -> Result<UserRecord, ServiceError> {
        debug!(?input, "received create request");
        let data = input.validate()?;

        let created = self
            .blocking(move |store| store.create(data))
            .await?
            .map_err(|e| match e {
                StoreError::UniqueViolation(_) => {
                    error!(error = %e, "duplicate email");
                    ServiceError::storage("Add a different Email", e)
                }
                _ => {
                    error!(error = %e, "failed to create user");
                    ServiceError::storage("Failed to create user", e)
                }
            })?;

        info!(user_id = %created.user_id, "created user");
        Ok(created)
    }

    /// Look the record up, then delete it. Both steps report a missing
    /// record as the same `NotFound`.
    pub async fn delete(&self, user_id: &str) -> Result<UserRecord, ServiceError> {
        info!(user_id, "attempting to delete user");
        if user_id.is_empty() {
            return Err(ServiceError::Validation("User ID is required".into()));
        }

        let id = user_id.to_string();
        let existing = self
            .blocking(move |store| store.find_unique(&id))
            .await?
            .map_err(|e| delete_failed(user_id, e))?;
        if existing.is_none() {
            return Err(not_found(user_id));
        }

        let id = user_id.to_string();
        let deleted = self
            .blocking(move |store| store.delete(&id))
            .await?
            .map_err(|e| delete_failed(user_id, e))?;

        info!(user_id, "deleted user");
        Ok(deleted)
    }

    /// Run a store call on the blocking pool.
    async fn blocking<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn UserStore) -> T + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ServiceError::Internal(format!("store task failed: {e}")))
    }
}

fn not_found(user_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("User with ID {user_id} not found"))
}

fn delete_failed(user_id: &str, e: StoreError) -> ServiceError {
    match e {
        StoreError::RecordNotFound(_) => not_found(user_id),
        other => {
            error!(user_id, error = %other, "failed to delete user");
            ServiceError::storage("Failed to delete user", other)
        }
    }
}
