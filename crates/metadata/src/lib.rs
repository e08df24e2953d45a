//! The document information dictionary (`/Info` in the trailer).
//!
//! Text entries are written as UTF-16BE hex strings behind a byte-order
//! mark, which every reader understands regardless of the characters used.
//! Dates use the `D:YYYYMMDDHHmmSS` form with the local offset appended.

use chrono::{DateTime, FixedOffset, Local};
use quire_types::{Dict, ObjectId, ObjectRecord, Value};
use serde::{Deserialize, Serialize};

/// Byte-order mark that opens every UTF-16BE text string.
const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

/// Descriptive metadata for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creation_date: Option<DateTime<FixedOffset>>,
    pub mod_date: Option<DateTime<FixedOffset>>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Sets both the creation and modification dates to `at`.
    pub fn stamped(mut self, at: DateTime<FixedOffset>) -> Self {
        self.creation_date = Some(at);
        self.mod_date = Some(at);
        self
    }

    /// Sets both dates to the current local time.
    pub fn stamped_now(self) -> Self {
        self.stamped(Local::now().fixed_offset())
    }

    /// Encodes the metadata as an information dictionary. Missing and
    /// empty text entries are left out.
    pub fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();

        let texts = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
        ];
        for (key, text) in texts {
            if let Some(text) = text.as_deref().filter(|t| !t.is_empty()) {
                dict.insert(key, text_string(text));
            }
        }

        if let Some(date) = &self.creation_date {
            dict.insert("CreationDate", date_string(date));
        }
        if let Some(date) = &self.mod_date {
            dict.insert("ModDate", date_string(date));
        }

        dict
    }

    /// Wraps [`to_dict`](Self::to_dict) in an indirect object numbered `id`.
    pub fn to_object(&self, id: impl Into<ObjectId>) -> ObjectRecord {
        ObjectRecord::new(id, self.to_dict())
    }
}

/// Encodes `text` as a UTF-16BE hex string with a leading byte-order mark.
pub fn text_string(text: &str) -> Value {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&UTF16_BOM);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Value::HexString(bytes)
}

/// Encodes a timestamp as `D:YYYYMMDDHHmmSS`, followed by `+HH'mm'` or
/// `-HH'mm'` when the offset from UTC is not zero.
pub fn date_string(at: &DateTime<FixedOffset>) -> Value {
    let mut out = at.format("D:%Y%m%d%H%M%S").to_string();

    let offset_minutes = at.offset().local_minus_utc() / 60;
    if offset_minutes != 0 {
        let sign = if offset_minutes > 0 { '+' } else { '-' };
        let abs = offset_minutes.abs();
        out.push_str(&format!("{}{:02}'{:02}'", sign, abs / 60, abs % 60));
    }

    Value::LiteralString(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(offset_secs: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_secs)
            .unwrap()
            .with_ymd_and_hms(2017, 3, 9, 14, 5, 7)
            .unwrap()
    }

    fn literal(value: Value) -> String {
        String::from_utf8(value.as_string_bytes().unwrap().to_vec()).unwrap()
    }

    #[test]
    fn test_text_string_is_utf16be_with_bom() {
        assert_eq!(text_string("Hi"), Value::hex(vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]));
        assert_eq!(text_string("é"), Value::hex(vec![0xFE, 0xFF, 0x00, 0xE9]));
    }

    #[test]
    fn test_text_string_surrogate_pairs() {
        // U+1D11E MUSICAL SYMBOL G CLEF
        assert_eq!(text_string("\u{1D11E}"), Value::hex(vec![0xFE, 0xFF, 0xD8, 0x34, 0xDD, 0x1E]));
    }

    #[test]
    fn test_date_with_positive_offset() {
        assert_eq!(literal(date_string(&at(5 * 3600 + 30 * 60))), "D:20170309140507+05'30'");
    }

    #[test]
    fn test_date_with_negative_offset() {
        assert_eq!(literal(date_string(&at(-8 * 3600))), "D:20170309140507-08'00'");
    }

    #[test]
    fn test_date_in_utc_has_no_suffix() {
        assert_eq!(literal(date_string(&at(0))), "D:20170309140507");
    }

    #[test]
    fn test_to_dict_skips_missing_and_empty_fields() {
        let info = DocumentInfo::new().with_title("Booklet").with_author("").stamped(at(3600));
        let dict = info.to_dict();

        let keys: Vec<&str> = dict.keys().collect();
        assert_eq!(keys, vec!["CreationDate", "ModDate", "Title"]);
        assert_eq!(dict.get("CreationDate"), dict.get("ModDate"));
    }

    #[test]
    fn test_to_object_uses_given_id() {
        let record = DocumentInfo::new().with_subject("Proofs").to_object((7, 0));
        assert_eq!(record.obj_num(), 7);
        assert!(record.value().as_dict().unwrap().contains_key("Subject"));
    }

    #[test]
    fn test_deserialize_from_camel_case_json() {
        let json = r#"{
            "title": "Quarterly report",
            "keywords": "finance, q3",
            "creationDate": "2017-03-09T14:05:07+02:00"
        }"#;
        let info: DocumentInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.title.as_deref(), Some("Quarterly report"));
        assert_eq!(info.author, None);
        assert_eq!(info.creation_date, Some(at(7200)));
        assert_eq!(info.mod_date, None);
    }
}
