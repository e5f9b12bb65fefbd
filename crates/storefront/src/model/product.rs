//! Product domain types.
//!
//! Products live in the `order_list` of [`CatalogState`](crate::product_store::CatalogState),
//! which is owned by a [`StoreActor`](store_framework::StoreActor).
//!
//! Incoming JSON is read leniently: a missing or wrong-shaped field falls back to its empty
//! default (a numeric string price is still read as a number) and unknown fields are
//! ignored, so a partially-filled record still lands in the list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Identifier of a [`Product`].
///
/// The catalog API sends numeric ids while locally created products get timestamp
/// strings. Both forms are kept as one canonical string: anything that reads as a finite
/// number is stored in its shortest numeric spelling, so `1`, `"1"`, `"01"` and `1.0`
/// are the same id. Numeric reading follows JavaScript's `Number()`: blank text is `0`
/// and `0x`/`0o`/`0b` prefixes are hex, octal and binary. Any other text is kept verbatim.
///
/// [`ProductId::default`] is the empty id, used when a record carries no readable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(canonicalize(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn canonicalize(raw: &str) -> String {
    match read_number(raw.trim()) {
        Some(n) if n.is_finite() => number_to_id(n),
        _ => raw.to_string(),
    }
}

fn read_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }
    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    match radix {
        Some(radix) => {
            let digits = &text[2..];
            if digits.starts_with('+') {
                return None;
            }
            u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
        }
        None => text.parse().ok(),
    }
}

fn number_to_id(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

impl From<&str> for ProductId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ProductId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else {
                    n.as_f64().map(|f| Self(number_to_id(f))).unwrap_or_default()
                }
            }
            Value::String(s) => Self::new(s),
            _ => Self::default(),
        })
    }
}

// Wrong-shaped fields fall back to their empty value instead of failing the record.

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        Value::String(url) => vec![url],
        _ => Vec::new(),
    })
}

/// A catalog item. Only the first of `images` is ever displayed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<String>,
}

impl Product {
    /// Creates a new Product with no description and no images.
    ///
    /// # Arguments
    /// * `id` - Identifier, numeric or textual
    /// * `title` - Display name
    /// * `price` - Price, no currency attached
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// The image shown on the product card, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price as shown to the visitor, e.g. `$12.5`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Payload of the "add product" form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<String>,
}

impl ProductDraft {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            images: self.images,
        }
    }
}
