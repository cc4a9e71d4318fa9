// Typed, lenient view over one item of the hotels array.
// The endpoint is not trusted to be well-typed: a field with the wrong JSON type
// reads as absent instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One image reference of a hotel's gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub uri: String,
}

impl GalleryEntry {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default, rename = "showIcon", deserialize_with = "deserialize_flag")]
    pub show_icon: bool,
    #[serde(default, deserialize_with = "deserialize_integer")]
    pub number: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HotelRecord {
    #[serde(default, deserialize_with = "deserialize_integer")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_address")]
    pub address: Address,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_gallery")]
    pub gallery: Vec<GalleryEntry>,
}

impl HotelRecord {
    /// `None` for anything that is not a JSON object (null, strings, arrays...).
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        match HotelRecord::deserialize(value) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("skipping malformed hotel record: {err}");
                None
            }
        }
    }
}

/// Integral JSON number, including `12.0`.
fn integer_of(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f <= i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Non-empty JSON string.
fn text_of(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn deserialize_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer_of(&Value::deserialize(deserializer)?))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(Address::default());
    }
    Ok(Address::deserialize(&value).unwrap_or_default())
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(Category::deserialize(&value).ok())
}

fn deserialize_gallery<'de, D>(deserializer: D) -> Result<Vec<GalleryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(|item| item.get("uri").and_then(text_of))
        .map(GalleryEntry::new)
        .collect())
}
