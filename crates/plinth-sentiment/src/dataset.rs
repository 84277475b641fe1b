//! Labeled CSV dataset loading
//!
//! The training/evaluation data is a tabular file with at least the
//! columns `textID`, `text` and `sentiment`. Malformed rows are skipped,
//! not fatal.

use crate::centroid::LabeledText;
use crate::error::SentimentError;
use plinth_domain::Sentiment;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One well-formed dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    /// Row identifier from the dataset
    pub text_id: String,

    /// Statement text
    pub text: String,

    /// Ground-truth label
    pub label: Sentiment,
}

impl SentimentRecord {
    /// View this record as a training example
    pub fn as_labeled_text(&self) -> LabeledText {
        LabeledText::new(self.text.clone(), self.label)
    }
}

/// Raw row as it appears in the file; every field may be missing
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "textID", default)]
    text_id: Option<String>,

    #[serde(default)]
    text: Option<String>,

    #[serde(default)]
    sentiment: Option<String>,
}

/// Read labeled rows from any CSV reader, skipping malformed rows
///
/// A row is kept only when `textID` and `text` are present and non-empty
/// and `sentiment` parses as a known label. Everything else is skipped
/// with a debug diagnostic.
///
/// # Errors
///
/// Returns `SentimentError::Csv` only when the stream itself cannot be
/// read; individual bad rows never fail the load.
pub fn read_labeled_rows<R: Read>(reader: R) -> Result<Vec<SentimentRecord>, SentimentError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping malformed row {}: {}", idx, e);
                continue;
            }
        };

        let (text_id, text, sentiment) = match (row.text_id, row.text, row.sentiment) {
            (Some(id), Some(text), Some(sentiment))
                if !id.is_empty() && !text.is_empty() =>
            {
                (id, text, sentiment)
            }
            _ => {
                debug!("Skipping row {}: missing field", idx);
                continue;
            }
        };

        let label = match Sentiment::parse(&sentiment) {
            Some(label) => label,
            None => {
                debug!("Skipping row {}: unknown label '{}'", idx, sentiment);
                continue;
            }
        };

        records.push(SentimentRecord {
            text_id,
            text,
            label,
        });
    }

    Ok(records)
}

/// Load labeled rows from a CSV file
///
/// # Errors
///
/// `SentimentError::Io` when the file cannot be opened, `Csv` when the
/// stream cannot be read.
pub fn load_labeled_csv(path: impl AsRef<Path>) -> Result<Vec<SentimentRecord>, SentimentError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_labeled_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_well_formed_rows() {
        let data = "textID,text,sentiment\n\
                    t1,loved every minute,positive\n\
                    t2,waste of money,negative\n\
                    t3,it exists,neutral\n";

        let records = read_labeled_rows(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text_id, "t1");
        assert_eq!(records[0].label, Sentiment::Positive);
        assert_eq!(records[1].label, Sentiment::Negative);
    }

    #[test]
    fn test_skips_rows_with_missing_fields() {
        let data = "textID,text,sentiment\n\
                    t1,good stuff,positive\n\
                    ,missing id,negative\n\
                    t3,,negative\n\
                    t4,fine,neutral\n";

        let records = read_labeled_rows(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text_id, "t1");
        assert_eq!(records[1].text_id, "t4");
    }

    #[test]
    fn test_skips_unknown_labels() {
        let data = "textID,text,sentiment\n\
                    t1,great,positive\n\
                    t2,confusing,sarcastic\n";

        let records = read_labeled_rows(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_skips_short_rows() {
        let data = "textID,text,sentiment\n\
                    t1\n\
                    t2,both fields but no label\n\
                    t3,complete,neutral\n";

        let records = read_labeled_rows(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text_id, "t3");
    }

    #[test]
    fn test_empty_file_is_empty_not_error() {
        let records = read_labeled_rows("textID,text,sentiment\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_as_labeled_text() {
        let record = SentimentRecord {
            text_id: "t1".to_string(),
            text: "nice".to_string(),
            label: Sentiment::Positive,
        };
        let example = record.as_labeled_text();
        assert_eq!(example.text, "nice");
        assert_eq!(example.label, Sentiment::Positive);
    }
}
