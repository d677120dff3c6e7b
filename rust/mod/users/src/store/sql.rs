use std::sync::Arc;

use billing_core::new_id;
use billing_sql::{Row, SQLStore, Value};

use crate::model::{NewUser, UserRecord};
use crate::store::schema::init_schema;
use crate::store::{StoreError, UserFilter, UserStore};

const COLUMNS: &str = "user_id, name, email, phone_number, unit_cost, quantity, \
                       paid_amount, total_amount, remaining_amount, timestamp";

/// [`UserStore`] backed by the `users` table of a [`SQLStore`].
pub struct SqlUserStore {
    db: Arc<dyn SQLStore>,
}

impl SqlUserStore {
    /// Wrap a SQL store and make sure the schema exists.
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, StoreError> {
        init_schema(db.as_ref())?;
        Ok(Self { db })
    }
}

impl UserStore for SqlUserStore {
    fn find_many(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, StoreError> {
        let pattern = format!("%{}%", escape_like(&filter.name_contains));
        let sql = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE unicode_lower(name) LIKE unicode_lower(?1) ESCAPE '\\' \
             ORDER BY rowid"
        );
        let rows = self.db.query(&sql, &[Value::Text(pattern)])?;
        rows.iter().map(row_to_user).collect()
    }

    fn create(&self, data: NewUser) -> Result<UserRecord, StoreError> {
        let sql = format!(
            "INSERT INTO users ({COLUMNS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) \
             RETURNING {COLUMNS}"
        );
        let rows = self.db.query(
            &sql,
            &[
                Value::Text(new_id()),
                Value::Text(data.name),
                Value::Text(data.email),
                Value::from(data.phone_number),
                Value::Real(data.unit_cost),
                Value::Integer(data.quantity),
                Value::Real(data.paid_amount),
                Value::Real(data.total_amount),
                Value::Real(data.remaining_amount),
                Value::Text(data.timestamp),
            ],
        )?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::Backend("insert returned no row".into()))?;
        row_to_user(row)
    }

    fn find_unique(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE user_id = ?1");
        let rows = self.db.query(&sql, &[Value::Text(user_id.to_string())])?;
        rows.first().map(row_to_user).transpose()
    }

    fn delete(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let sql = format!("DELETE FROM users WHERE user_id = ?1 RETURNING {COLUMNS}");
        let rows = self.db.query(&sql, &[Value::Text(user_id.to_string())])?;
        match rows.first() {
            Some(row) => row_to_user(row),
            None => Err(StoreError::RecordNotFound(
                "Record to delete does not exist".to_string(),
            )),
        }
    }
}

/// Escape LIKE wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn row_to_user(row: &Row) -> Result<UserRecord, StoreError> {
    let text = |col: &str| {
        row.get_str(col)
            .map(str::to_string)
            .ok_or_else(|| missing(col))
    };
    let real = |col: &str| row.get_f64(col).ok_or_else(|| missing(col));

    Ok(UserRecord {
        user_id: text("user_id")?,
        name: text("name")?,
        email: text("email")?,
        phone_number: row.get_str("phone_number").map(str::to_string),
        unit_cost: real("unit_cost")?,
        quantity: row.get_i64("quantity").ok_or_else(|| missing("quantity"))?,
        paid_amount: real("paid_amount")?,
        total_amount: real("total_amount")?,
        remaining_amount: real("remaining_amount")?,
        timestamp: text("timestamp")?,
    })
}

fn missing(col: &str) -> StoreError {
    StoreError::Backend(format!("malformed users row: missing column {col}"))
}
