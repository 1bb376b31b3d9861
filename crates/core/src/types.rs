/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// An opaque JSON object passed through without interpretation.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
