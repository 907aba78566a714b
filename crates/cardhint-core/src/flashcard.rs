//! Flashcard and hint records.
//!
//! Hints are kept as raw JSON values and read leniently: a field of an
//! unexpected type never fails a load, and a load/save cycle keeps every key,
//! its value (including `null`) and its position.

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Label shown above an inserted romanization hint.
pub const ROMANIZATION_DISPLAY_TEXT: &str = "Sounds like";

const HINTS_KEY: &str = "hints";
const HINT_TYPE_KEY: &str = "hintType";
const HINT_DISPLAY_TEXT_KEY: &str = "hintDisplayText";
const CONTENT_KEY: &str = "content";
const HINT_ORDER_KEY: &str = "hintOrder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    SoundIpa,
    Lao,
    Romanization,
}

impl HintKind {
    pub const ALL: [HintKind; 3] = [HintKind::SoundIpa, HintKind::Lao, HintKind::Romanization];

    pub fn tag(self) -> &'static str {
        match self {
            HintKind::SoundIpa => "soundIpa",
            HintKind::Lao => "lao",
            HintKind::Romanization => "romanization",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// `hintOrder` assigned when a hint of this kind has none (lower shows first).
    pub fn default_order(self) -> i64 {
        match self {
            HintKind::Romanization => 1,
            HintKind::SoundIpa => 2,
            HintKind::Lao => 3,
        }
    }
}

/// One entry of a card's hint list, as it appears in the source.
///
/// Usually an object with `hintType`, `content`, `hintDisplayText` and
/// `hintOrder`, but any JSON value is accepted and passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hint(Value);

impl Hint {
    pub fn new(kind: HintKind, content: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(HINT_TYPE_KEY.to_string(), Value::from(kind.tag()));
        map.insert(CONTENT_KEY.to_string(), Value::from(content.into()));
        Self(Value::Object(map))
    }

    /// The hint inserted in front of a card's list: shown first, labelled "Sounds like".
    pub fn romanization(content: impl Into<String>) -> Self {
        let kind = HintKind::Romanization;
        let mut map = Map::new();
        map.insert(HINT_TYPE_KEY.to_string(), Value::from(kind.tag()));
        map.insert(
            HINT_DISPLAY_TEXT_KEY.to_string(),
            Value::from(ROMANIZATION_DISPLAY_TEXT),
        );
        map.insert(CONTENT_KEY.to_string(), Value::from(content.into()));
        map.insert(HINT_ORDER_KEY.to_string(), Value::from(kind.default_order()));
        Self(Value::Object(map))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `hintType` if it is a string.
    pub fn hint_type(&self) -> Option<&str> {
        self.0.get(HINT_TYPE_KEY).and_then(Value::as_str)
    }

    /// Known kind of this hint; `None` for missing, non-string or unrecognized tags.
    pub fn kind(&self) -> Option<HintKind> {
        self.hint_type().and_then(HintKind::from_tag)
    }

    pub fn is(&self, kind: HintKind) -> bool {
        self.hint_type() == Some(kind.tag())
    }

    pub fn content(&self) -> Option<&str> {
        self.0.get(CONTENT_KEY).and_then(Value::as_str)
    }

    /// Missing or non-string content reads as the empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content().unwrap_or("")
    }

    pub fn display_text(&self) -> Option<&str> {
        self.0.get(HINT_DISPLAY_TEXT_KEY).and_then(Value::as_str)
    }

    /// `hintOrder` if it is an integer.
    pub fn hint_order(&self) -> Option<i64> {
        self.0.get(HINT_ORDER_KEY).and_then(Value::as_i64)
    }

    /// Whether the `hintOrder` key is present, whatever its value.
    pub fn has_order(&self) -> bool {
        self.0.get(HINT_ORDER_KEY).is_some()
    }

    /// Append `hintOrder` when the key is absent. Non-object hints are left alone.
    pub fn ensure_order(&mut self, order: i64) {
        if let Value::Object(map) = &mut self.0 {
            map.entry(HINT_ORDER_KEY).or_insert(Value::from(order));
        }
    }
}

impl From<Value> for Hint {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Value of a card's `hints` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hints {
    List(Vec<Hint>),
    /// `null` or any other non-list value, kept as-is.
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flashcard {
    /// `None` when the key is absent.
    pub hints: Option<Hints>,
    /// Every other field, in source order.
    pub extra: Map<String, Value>,
    /// Index of `hints` among the source keys, so it is written back in place.
    hints_at: Option<usize>,
}

impl Flashcard {
    pub fn with_hints(hints: Vec<Hint>) -> Self {
        Self {
            hints: Some(Hints::List(hints)),
            ..Self::default()
        }
    }

    pub fn hints(&self) -> &[Hint] {
        match &self.hints {
            Some(Hints::List(h)) => h,
            _ => &[],
        }
    }

    pub fn hints_mut(&mut self) -> Option<&mut Vec<Hint>> {
        match &mut self.hints {
            Some(Hints::List(h)) => Some(h),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Flashcard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        let hints_at = extra.keys().position(|k| k == HINTS_KEY);
        let hints = match extra.shift_remove(HINTS_KEY) {
            None => None,
            Some(v) => Some(serde_json::from_value(v).map_err(<D::Error as de::Error>::custom)?),
        };
        Ok(Self {
            hints,
            extra,
            hints_at,
        })
    }
}

impl Serialize for Flashcard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.extra.len() + usize::from(self.hints.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        // Cards built in code get their hints after the other fields.
        let at = self.hints_at.unwrap_or(self.extra.len());
        for (i, (key, value)) in self.extra.iter().enumerate() {
            if i == at {
                if let Some(hints) = &self.hints {
                    map.serialize_entry(HINTS_KEY, hints)?;
                }
            }
            map.serialize_entry(key, value)?;
        }
        if at >= self.extra.len() {
            if let Some(hints) = &self.hints {
                map.serialize_entry(HINTS_KEY, hints)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hint(v: Value) -> Hint {
        Hint::from(v)
    }

    #[test]
    fn hint_kind_tags() {
        assert_eq!(HintKind::from_tag("soundIpa"), Some(HintKind::SoundIpa));
        assert_eq!(HintKind::from_tag("lao"), Some(HintKind::Lao));
        assert_eq!(HintKind::from_tag("romanization"), Some(HintKind::Romanization));
        assert_eq!(HintKind::from_tag("mnemonic"), None);
        assert_eq!(HintKind::from_tag("SoundIpa"), None);
    }

    #[test]
    fn romanization_hint_fields() {
        let h = Hint::romanization("pa");
        assert_eq!(
            h.as_value(),
            &json!({
                "hintType": "romanization",
                "hintDisplayText": "Sounds like",
                "content": "pa",
                "hintOrder": 1
            })
        );
        assert_eq!(h.display_text(), Some("Sounds like"));
        assert_eq!(h.hint_order(), Some(1));
    }

    #[test]
    fn romanization_hint_key_order() {
        let s = serde_json::to_string(&Hint::romanization("pa")).unwrap();
        assert_eq!(
            s,
            r#"{"hintType":"romanization","hintDisplayText":"Sounds like","content":"pa","hintOrder":1}"#
        );
    }

    #[test]
    fn unknown_fields_preserved() {
        let v = json!({
            "id": 7,
            "front": "ສະບາຍດີ",
            "hints": [{"hintType": "mnemonic", "content": "x", "author": "k"}]
        });
        let card: Flashcard = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(card.extra["id"], json!(7));
        assert_eq!(card.hints()[0].as_value()["author"], json!("k"));
        assert_eq!(card.hints()[0].kind(), None);
        assert_eq!(serde_json::to_value(&card).unwrap(), v);
    }

    #[test]
    fn absent_and_null_hints_round_trip() {
        let absent: Flashcard = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(absent.hints, None);
        assert!(absent.hints().is_empty());
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({"id": 1}));

        let mut null: Flashcard =
            serde_json::from_value(json!({"id": 1, "hints": null})).unwrap();
        assert_eq!(null.hints, Some(Hints::Other(Value::Null)));
        assert!(null.hints_mut().is_none());
        assert_eq!(
            serde_json::to_value(&null).unwrap(),
            json!({"id": 1, "hints": null})
        );
    }

    #[test]
    fn non_list_hints_pass_through() {
        let src = r#"{"id":1,"hints":"ປາ"}"#;
        let mut card: Flashcard = serde_json::from_str(src).unwrap();
        assert!(card.hints_mut().is_none());
        assert_eq!(serde_json::to_string(&card).unwrap(), src);
    }

    #[test]
    fn hints_written_back_in_source_position() {
        let src = r#"{"id":1,"hints":[],"front":"x"}"#;
        let card: Flashcard = serde_json::from_str(src).unwrap();
        assert_eq!(serde_json::to_string(&card).unwrap(), src);

        let built = Flashcard {
            extra: card.extra.clone(),
            ..Flashcard::with_hints(vec![Hint::new(HintKind::Lao, "ປາ")])
        };
        assert_eq!(
            serde_json::to_string(&built).unwrap(),
            r#"{"id":1,"front":"x","hints":[{"hintType":"lao","content":"ປາ"}]}"#
        );
    }

    #[test]
    fn hint_key_order_and_nulls_round_trip() {
        let src = r#"{"hints":[{"content":null,"hintOrder":null,"hintType":"mnemonic","hintDisplayText":null},{"hintOrder":4,"content":"pa","hintType":"soundIpa"}]}"#;
        let card: Flashcard = serde_json::from_str(src).unwrap();
        assert_eq!(serde_json::to_string(&card).unwrap(), src);
    }

    #[test]
    fn missing_content_reads_empty() {
        let h = hint(json!({"hintType": "soundIpa"}));
        assert!(h.is(HintKind::SoundIpa));
        assert_eq!(h.content_or_empty(), "");
        assert_eq!(h.hint_order(), None);
        assert!(!h.has_order());
    }

    #[test]
    fn odd_field_types_read_leniently() {
        let h = hint(json!({"hintType": 7, "content": ["pa"], "hintOrder": "2"}));
        assert_eq!(h.kind(), None);
        assert_eq!(h.content_or_empty(), "");
        assert_eq!(h.hint_order(), None);
        assert!(h.has_order());

        let h = hint(json!({"hintType": "lao", "hintOrder": 1.0}));
        assert_eq!(h.kind(), Some(HintKind::Lao));
        assert!(h.has_order());

        let scalar = hint(json!(3));
        assert_eq!(scalar.kind(), None);
        assert!(!scalar.has_order());
    }

    #[test]
    fn ensure_order_appends_only_when_absent() {
        let mut h = hint(json!({"hintType": "lao", "content": "ປາ"}));
        h.ensure_order(3);
        assert_eq!(
            serde_json::to_string(&h).unwrap(),
            r#"{"hintType":"lao","content":"ປາ","hintOrder":3}"#
        );

        let mut null_order = hint(json!({"hintType": "lao", "hintOrder": null}));
        null_order.ensure_order(3);
        assert_eq!(null_order.as_value(), &json!({"hintType": "lao", "hintOrder": null}));

        let mut scalar = hint(json!("ປາ"));
        scalar.ensure_order(3);
        assert_eq!(scalar.as_value(), &json!("ປາ"));
    }
}
