//! Document module - the unit of ingested source text

use std::fmt;

/// Unique identifier for a document based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (documents sort in ingestion order)
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u128);

impl DocumentId {
    /// Generate a new UUIDv7-based DocumentId
    ///
    /// # Examples
    ///
    /// ```
    /// use plinth_domain::DocumentId;
    ///
    /// let id = DocumentId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a DocumentId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a DocumentId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use plinth_domain::DocumentId;
    ///
    /// let id = DocumentId::new();
    /// let parsed = DocumentId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// One ingested document
///
/// Created during ingestion, immutable afterward. The document index owns
/// every `Document` for the lifetime of one run; nothing mutates a document
/// after it has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Full document text
    pub text: String,

    /// Path the document was read from
    pub source_path: String,
}

impl Document {
    /// Create a new document with a fresh id
    pub fn new(text: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            text: text.into(),
            source_path: source_path.into(),
        }
    }
}
