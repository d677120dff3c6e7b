//! Users module: billing records per user.
//!
//! # Layers
//!
//! - [`store`]: `UserStore` data access over the SQL store
//! - [`service`]: validation, derived totals, error translation
//! - [`api`]: axum routes under `/users`
//!
//! # Usage
//!
//! ```ignore
//! let module = users::UsersModule::new(sql)?;
//! let router = module.routes();
//! ```

pub mod api;
pub mod model;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::Router;

use billing_core::{Module, ServiceError};
use billing_sql::SQLStore;

use crate::service::UserService;
use crate::store::SqlUserStore;

/// Users module implementing the Module trait.
pub struct UsersModule {
    service: Arc<UserService>,
}

impl UsersModule {
    /// Create the module over a shared SQL store, initialising the schema.
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        let store = SqlUserStore::new(sql)
            .map_err(|e| ServiceError::storage("users schema init failed", e))?;
        Ok(Self {
            service: UserService::new(Arc::new(store)),
        })
    }

    pub fn service(&self) -> &Arc<UserService> {
        &self.service
    }
}

impl Module for UsersModule {
    fn name(&self) -> &str {
        "users"
    }

    fn routes(&self) -> Router {
        api::build_router(Arc::clone(&self.service))
    }
}
