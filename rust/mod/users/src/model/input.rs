use serde::Deserialize;

use billing_core::{ServiceError, normalize_rfc3339, now_rfc3339};

use super::user::NewUser;

pub const MISSING_REQUIRED: &str = "Name, email, and paid amount are required";

/// A numeric body field. Clients send either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Falsy values are `0` and the empty string. `"0"` is a non-empty
    /// string and counts as present.
    fn is_truthy(&self) -> bool {
        match self {
            NumberInput::Number(n) => *n != 0.0 && !n.is_nan(),
            NumberInput::Text(s) => !s.is_empty(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        let n = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    fn to_i64(&self) -> Option<i64> {
        match self {
            // i64::MAX as f64 rounds up to 2^63, hence the open upper bound.
            NumberInput::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            NumberInput::Number(_) => None,
            NumberInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

/// Raw body of `POST /users`, before validation.
///
/// Unknown fields (including client-sent `totalAmount` / `remainingAmount`)
/// are ignored; the totals are always derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub paid_amount: Option<NumberInput>,
    #[serde(default)]
    pub unit_cost: Option<NumberInput>,
    #[serde(default)]
    pub quantity: Option<NumberInput>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn present(s: &Option<String>) -> bool {
    s.as_deref().is_some_and(|s| !s.is_empty())
}

impl CreateUserInput {
    /// Check required fields and coerce numbers.
    ///
    /// The presence check on name/email/paidAmount runs first and uses
    /// truthiness, so `paidAmount: 0` is rejected as missing.
    pub fn validate(self) -> Result<NewUser, ServiceError> {
        let paid_present = self.paid_amount.as_ref().is_some_and(NumberInput::is_truthy);
        if !present(&self.name) || !present(&self.email) || !paid_present {
            return Err(ServiceError::Validation(MISSING_REQUIRED.to_string()));
        }

        let paid_amount = self
            .paid_amount
            .as_ref()
            .and_then(NumberInput::to_f64)
            .ok_or_else(|| ServiceError::Validation("paidAmount must be a number".into()))?;
        let unit_cost = self
            .unit_cost
            .as_ref()
            .and_then(NumberInput::to_f64)
            .ok_or_else(|| {
                ServiceError::Validation("unitCost is required and must be a number".into())
            })?;
        let quantity = self
            .quantity
            .as_ref()
            .and_then(NumberInput::to_i64)
            .ok_or_else(|| {
                ServiceError::Validation("quantity is required and must be an integer".into())
            })?;

        let timestamp = match self.timestamp.as_deref() {
            None | Some("") => now_rfc3339(),
            Some(ts) => normalize_rfc3339(ts).map_err(|e| {
                ServiceError::Validation(format!("timestamp must be an RFC 3339 datetime: {e}"))
            })?,
        };

        let user = NewUser::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.phone_number,
            unit_cost,
            quantity,
            paid_amount,
            timestamp,
        );
        if !user.total_amount.is_finite() || !user.remaining_amount.is_finite() {
            return Err(ServiceError::Validation(
                "totalAmount is out of range for unitCost and quantity".into(),
            ));
        }
        Ok(user)
    }
}

/// Query string of `GET /users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> CreateUserInput {
        serde_json::from_value(body).unwrap()
    }

    fn validation_message(result: Result<NewUser, ServiceError>) -> String {
        match result {
            Err(ServiceError::Validation(m)) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_input_derives_totals() {
        let user = parse(serde_json::json!({
            "name": "Ann", "email": "a@x.com",
            "unitCost": 10, "quantity": 3, "paidAmount": 5
        }))
        .validate()
        .unwrap();
        assert_eq!(user.total_amount, 30.0);
        assert_eq!(user.remaining_amount, 25.0);
        assert!(user.timestamp.contains('T'));
    }

    #[test]
    fn missing_required_fields() {
        for body in [
            serde_json::json!({"email": "a@x.com", "paidAmount": 5, "unitCost": 1, "quantity": 1}),
            serde_json::json!({"name": "Ann", "paidAmount": 5, "unitCost": 1, "quantity": 1}),
            serde_json::json!({"name": "Ann", "email": "a@x.com", "unitCost": 1, "quantity": 1}),
            serde_json::json!({"name": "", "email": "a@x.com", "paidAmount": 5, "unitCost": 1, "quantity": 1}),
            serde_json::json!({"name": "Ann", "email": null, "paidAmount": 5, "unitCost": 1, "quantity": 1}),
        ] {
            assert_eq!(validation_message(parse(body).validate()), MISSING_REQUIRED);
        }
    }

    #[test]
    fn zero_paid_amount_counts_as_missing() {
        let body = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": 0, "unitCost": 1, "quantity": 1
        });
        assert_eq!(validation_message(parse(body).validate()), MISSING_REQUIRED);

        let body = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": "", "unitCost": 1, "quantity": 1
        });
        assert_eq!(validation_message(parse(body).validate()), MISSING_REQUIRED);
    }

    #[test]
    fn string_zero_paid_amount_is_present() {
        let user = parse(serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": "0", "unitCost": 2, "quantity": 2
        }))
        .validate()
        .unwrap();
        assert_eq!(user.paid_amount, 0.0);
        assert_eq!(user.remaining_amount, 4.0);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let user = parse(serde_json::json!({
            "name": "Ann", "email": "a@x.com",
            "unitCost": "2.5", "quantity": " 4 ", "paidAmount": "1.5"
        }))
        .validate()
        .unwrap();
        assert_eq!(user.unit_cost, 2.5);
        assert_eq!(user.quantity, 4);
        assert_eq!(user.total_amount, 10.0);
        assert_eq!(user.remaining_amount, 8.5);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let base = serde_json::json!({"name": "Ann", "email": "a@x.com", "paidAmount": 5});

        let mut body = base.clone();
        body["quantity"] = serde_json::json!(3);
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("unitCost"), "{msg}");

        let mut body = base.clone();
        body["unitCost"] = serde_json::json!("ten");
        body["quantity"] = serde_json::json!(3);
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("unitCost"), "{msg}");

        let mut body = base.clone();
        body["unitCost"] = serde_json::json!(10);
        body["quantity"] = serde_json::json!(2.5);
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("quantity"), "{msg}");

        let mut body = base;
        body["paidAmount"] = serde_json::json!("lots");
        body["unitCost"] = serde_json::json!(10);
        body["quantity"] = serde_json::json!(1);
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("paidAmount"), "{msg}");
    }

    #[test]
    fn out_of_range_quantity_is_rejected() {
        let base = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": 5, "unitCost": 1
        });

        let too_big = [
            serde_json::json!(1e20),
            serde_json::json!(-1e20),
            serde_json::json!(9.3e18),
        ];
        for quantity in too_big {
            let mut body = base.clone();
            body["quantity"] = quantity;
            let msg = validation_message(parse(body).validate());
            assert!(msg.starts_with("quantity"), "{msg}");
        }

        let mut body = base.clone();
        body["quantity"] = serde_json::json!("100000000000000000000");
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("quantity"), "{msg}");

        let mut body = base;
        body["quantity"] = serde_json::json!(1e15);
        assert_eq!(parse(body).validate().unwrap().quantity, 1_000_000_000_000_000);
    }

    #[test]
    fn overflowing_totals_are_rejected() {
        let body = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": 5,
            "unitCost": 1e308, "quantity": 10
        });
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("totalAmount"), "{msg}");

        let body = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "paidAmount": -1.7e308,
            "unitCost": 1.7e308, "quantity": 1
        });
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("totalAmount"), "{msg}");
    }

    #[test]
    fn client_totals_are_ignored() {
        let user = parse(serde_json::json!({
            "name": "Ann", "email": "a@x.com", "unitCost": 10, "quantity": 3,
            "paidAmount": 5, "totalAmount": 999, "remainingAmount": -1
        }))
        .validate()
        .unwrap();
        assert_eq!(user.total_amount, 30.0);
        assert_eq!(user.remaining_amount, 25.0);
    }

    #[test]
    fn timestamp_handling() {
        let base = serde_json::json!({
            "name": "Ann", "email": "a@x.com", "unitCost": 1, "quantity": 1, "paidAmount": 1
        });

        let mut body = base.clone();
        body["timestamp"] = serde_json::json!("2024-03-01T12:00:00Z");
        let user = parse(body).validate().unwrap();
        assert_eq!(user.timestamp, "2024-03-01T12:00:00+00:00");

        let mut body = base.clone();
        body["timestamp"] = serde_json::json!("");
        assert!(parse(body).validate().unwrap().timestamp.contains('T'));

        let mut body = base;
        body["timestamp"] = serde_json::json!("last tuesday");
        let msg = validation_message(parse(body).validate());
        assert!(msg.starts_with("timestamp"), "{msg}");
    }

    #[test]
    fn list_query_defaults_to_empty_term() {
        assert_eq!(ListQuery::default().term(), "");
        let q: ListQuery = serde_json::from_value(serde_json::json!({"search": "ann"})).unwrap();
        assert_eq!(q.term(), "ann");
    }
}
