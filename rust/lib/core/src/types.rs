/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Parse an RFC 3339 datetime and re-render it in UTC.
pub fn normalize_rfc3339(input: &str) -> Result<String, chrono::ParseError> {
    let parsed = chrono::DateTime::parse_from_rfc3339(input)?;
    Ok(parsed.with_timezone(&chrono::Utc).to_rfc3339())
}
