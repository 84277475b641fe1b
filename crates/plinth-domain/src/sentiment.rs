//! Sentiment module - classification labels

/// Sentiment label for a piece of text
///
/// Ordered by fixed precedence: negative, neutral, positive. When a
/// classifier scores two labels identically, the earlier label in this
/// order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Negative sentiment
    Negative,

    /// Neutral sentiment
    Neutral,

    /// Positive sentiment
    Positive,
}

impl Sentiment {
    /// All labels in precedence order (the tie-break order)
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }

    /// Parse a label from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "positive" => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sentiment label: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert_eq!(
            Sentiment::ALL,
            [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive]
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for label in Sentiment::ALL {
            assert_eq!(Sentiment::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(Sentiment::parse(" Positive \n"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse("NEGATIVE"), Some(Sentiment::Negative));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Sentiment::parse("unknown"), None);
        assert_eq!(Sentiment::parse(""), None);
    }
}
