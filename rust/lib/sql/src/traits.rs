use crate::error::SQLError;

/// A dynamically-typed SQL parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<Option<String>> for Value {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(s) => Value::Text(s),
            None => Value::Null,
        }
    }
}

/// A row returned from a SQL query: column name to value.
#[derive(Debug, Clone)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text column value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer column value by name.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Get a real column value by name. Integer cells are widened, since
    /// SQLite may hand back whole-valued REALs as integers.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Real(f)) => Some(*f),
            Some(Value::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }
}

/// SQLStore provides a SQL execution interface backed by an embedded database.
pub trait SQLStore: Send + Sync {
    /// Execute a query and return rows. Also used for
    /// `INSERT/DELETE ... RETURNING` statements.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError>;

    /// Execute a statement (INSERT/UPDATE/DELETE) and return affected row count.
    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        Row {
            columns: vec![
                ("name".to_string(), Value::Text("Ann".to_string())),
                ("quantity".to_string(), Value::Integer(3)),
                ("unit_cost".to_string(), Value::Real(2.5)),
                ("phone".to_string(), Value::Null),
            ],
        }
    }

    #[test]
    fn typed_getters() {
        let r = row();
        assert_eq!(r.get_str("name"), Some("Ann"));
        assert_eq!(r.get_i64("quantity"), Some(3));
        assert_eq!(r.get_f64("unit_cost"), Some(2.5));
        assert_eq!(r.get_str("phone"), None);
        assert!(r.get("missing").is_none());
    }

    #[test]
    fn get_f64_widens_integers() {
        assert_eq!(row().get_f64("quantity"), Some(3.0));
        assert_eq!(row().get_i64("unit_cost"), None);
    }

    #[test]
    fn optional_text_into_value() {
        assert_eq!(Value::from(Some("x".to_string())), Value::Text("x".into()));
        assert_eq!(Value::from(None), Value::Null);
    }
}
