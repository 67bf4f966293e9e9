//! Response-body projections of scored candidates.
//!
//! The surrounding service returns ranked results directly as an API
//! response; these types are that wire shape. Metadata stored by older
//! versions of the service is not always a JSON object, so conversion runs
//! it through [`normalize_metadata`] instead of trusting the stored value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ContentType, ScoredCandidate};

/// One ranked memory as it appears in a search response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryResult {
    /// Unique identifier for the memory
    pub id: String,

    /// The actual content of the memory
    pub content: String,

    /// Type of content
    pub content_type: ContentType,

    /// Tags associated with the memory
    pub tags: Vec<String>,

    /// Caller-supplied importance in [0.0, 1.0]
    pub importance: f64,

    /// Blended relevance score in [0.0, 1.0]
    pub relevance_score: f64,

    /// When the memory was created
    pub created_at: DateTime<Utc>,

    /// Where the memory originally came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// Normalized metadata object
    pub metadata: Map<String, Value>,
}

impl From<ScoredCandidate> for MemoryResult {
    fn from(scored: ScoredCandidate) -> Self {
        let memory = scored.memory;
        Self {
            id: memory.id,
            content: memory.content,
            content_type: memory.content_type,
            tags: memory.tags,
            importance: memory.importance,
            relevance_score: scored.relevance_score,
            created_at: memory.created_at,
            source_type: memory.source_type,
            metadata: normalize_metadata(memory.metadata),
        }
    }
}

/// Return metadata as an object, tolerating malformed legacy values.
///
/// Older rows stored metadata as a JSON-encoded string, and a few stored
/// plain scalars. Anything that cannot be coerced into an object is dropped
/// with a warning rather than surfaced as an error.
pub fn normalize_metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        Value::String(s) => {
            if s.trim().is_empty() {
                return Map::new();
            }
            match serde_json::from_str::<Value>(&s) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    tracing::warn!(
                        value_type = value_type_name(&other),
                        "Dropping non-object metadata JSON value"
                    );
                    Map::new()
                }
                Err(_) => {
                    tracing::warn!("Dropping invalid metadata string value");
                    Map::new()
                }
            }
        }
        other => {
            tracing::warn!(
                value_type = value_type_name(&other),
                "Dropping non-object metadata value"
            );
            Map::new()
        }
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemoryCandidate;
    use serde_json::json;

    #[test]
    fn test_normalize_null_metadata() {
        assert!(normalize_metadata(Value::Null).is_empty());
    }

    #[test]
    fn test_normalize_object_metadata() {
        let normalized = normalize_metadata(json!({"source": "chat"}));
        assert_eq!(normalized.get("source"), Some(&json!("chat")));
    }

    #[test]
    fn test_normalize_json_string_metadata() {
        let normalized = normalize_metadata(json!(r#"{"session": 7}"#));
        assert_eq!(normalized.get("session"), Some(&json!(7)));
    }

    #[test]
    fn test_normalize_blank_string_metadata() {
        assert!(normalize_metadata(json!("   ")).is_empty());
    }

    #[test]
    fn test_normalize_invalid_string_metadata() {
        assert!(normalize_metadata(json!("not json at all {")).is_empty());
    }

    #[test]
    fn test_normalize_non_object_json_string() {
        assert!(normalize_metadata(json!("[1, 2, 3]")).is_empty());
    }

    #[test]
    fn test_normalize_scalar_metadata() {
        assert!(normalize_metadata(json!(42)).is_empty());
        assert!(normalize_metadata(json!([1, 2])).is_empty());
    }

    #[test]
    fn test_memory_result_from_scored_candidate() {
        let memory = MemoryCandidate::new("likes coffee", ContentType::Preference)
            .with_similarity(0.9)
            .with_tags(vec!["food".to_string()]);
        let scored = ScoredCandidate {
            memory: memory.clone(),
            relevance_score: 0.8123,
        };

        let result = MemoryResult::from(scored);
        assert_eq!(result.id, memory.id);
        assert_eq!(result.relevance_score, 0.8123);
        assert_eq!(result.content_type, ContentType::Preference);
        assert!(result.metadata.is_empty());
    }
}
