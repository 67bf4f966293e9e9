//! Candidate model representing one retrievable memory record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Types of memory content
///
/// The closed set mirrors the ingest contract of the surrounding service.
/// Unknown strings are preserved through [`ContentType::Other`] so legacy
/// rows never fail to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Conversation or dialogue memory
    Conversation,
    /// Factual knowledge memory
    Fact,
    /// User preference memory
    Preference,
    /// Event memory
    Event,
    /// Free-form note
    Note,
    /// Summarized memory
    Summary,
    /// Any content type outside the known set
    Other(String),
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Note
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversation => write!(f, "conversation"),
            Self::Fact => write!(f, "fact"),
            Self::Preference => write!(f, "preference"),
            Self::Event => write!(f, "event"),
            Self::Note => write!(f, "note"),
            Self::Summary => write!(f, "summary"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl ContentType {
    /// Convert a string to a ContentType
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "conversation" => Self::Conversation,
            "fact" => Self::Fact,
            "preference" => Self::Preference,
            "event" => Self::Event,
            "note" => Self::Note,
            "summary" => Self::Summary,
            _ => Self::Other(s.to_string()),
        }
    }
}

// Content types cross the API boundary as plain lowercase strings, so the
// serde representation is the Display/from_str form rather than an
// externally tagged enum.
impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str(&s))
    }
}

/// One retrievable memory record as seen by the ranking core
///
/// Candidates arrive from the upstream vector search with their cosine
/// similarity already computed. Fields the upstream sometimes omits carry
/// the contract's fallback defaults (`importance` 0.5, `cosine_similarity`
/// 0.0) so deserializing a sparse row never fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryCandidate {
    /// Unique identifier for the memory; opaque, carried through unchanged
    pub id: String,

    /// The actual content of the memory
    pub content: String,

    /// Type of content, used only when formatting the assembled context
    pub content_type: ContentType,

    /// Tags associated with the memory for categorization
    #[serde(default)]
    pub tags: Vec<String>,

    /// Caller-supplied importance in [0.0, 1.0]
    #[serde(default = "default_importance")]
    pub importance: f64,

    /// Cosine similarity to the query, from the upstream similarity search
    #[serde(default)]
    pub cosine_similarity: f64,

    /// When the memory was created
    pub created_at: DateTime<Utc>,

    /// How many times the memory has been accessed
    #[serde(default)]
    pub access_count: u32,

    /// Vector embedding if the upstream chose to include one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// Where the memory originally came from (e.g. "manual", "import")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// Additional properties as arbitrary JSON; never interpreted here
    #[serde(default)]
    pub metadata: serde_json::Value,
}

fn default_importance() -> f64 {
    0.5
}

impl MemoryCandidate {
    /// Create a new candidate with minimal information
    pub fn new(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            content_type,
            tags: Vec::new(),
            importance: default_importance(),
            cosine_similarity: 0.0,
            created_at: Utc::now(),
            access_count: 0,
            embedding: None,
            source_type: None,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the cosine similarity reported by the upstream search
    pub fn with_similarity(mut self, cosine_similarity: f64) -> Self {
        self.cosine_similarity = cosine_similarity;
        self
    }

    /// Set the caller-supplied importance
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    /// Attach the memory's embedding vector
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Set the tags used when formatting the assembled context
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the access count
    pub fn with_access_count(mut self, access_count: u32) -> Self {
        self.access_count = access_count;
        self
    }
}

/// A candidate plus its blended relevance score
///
/// Produced by [`crate::ranking::rank_candidates`]; the score is in
/// [0.0, 1.0], rounded to 4 decimal places, and recomputing it from the same
/// inputs always yields the same value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    /// The underlying memory record
    pub memory: MemoryCandidate,

    /// Blended relevance score in [0.0, 1.0]
    pub relevance_score: f64,
}
