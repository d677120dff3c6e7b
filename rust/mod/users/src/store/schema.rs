use billing_sql::SQLStore;

use crate::store::StoreError;

/// Initialize the SQLite schema for user records.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), StoreError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS users (
            user_id          TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            email            TEXT NOT NULL UNIQUE,
            phone_number     TEXT,
            unit_cost        REAL NOT NULL,
            quantity         INTEGER NOT NULL,
            paid_amount      REAL NOT NULL,
            total_amount     REAL NOT NULL,
            remaining_amount REAL NOT NULL,
            timestamp        TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_users_name ON users(name)",
    ];

    for stmt in &statements {
        sql.exec(stmt, &[])?;
    }
    Ok(())
}
