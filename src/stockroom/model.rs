use crate::error::{CatalogError, Result};
use crate::store::Fields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Collection holding one document per category.
pub const CATEGORIES: &str = "categories";

/// Product identifier: client-side creation time in milliseconds.
///
/// Only unique in practice, because two products are rarely published within
/// the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// The moment the product was created, recovered from the id.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| CatalogError::Api(format!("Invalid product id: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog item, stored embedded in its category document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    /// `None` when the entered price had no numeric prefix; stored as `null`.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: Option<i64>,
    /// Copy of the owning document's key. Deletion relies on it staying accurate.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Rating,
}

/// One persisted record per category, embedding every product of that category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CategoryDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Decodes a stored document. A missing `products` field reads as empty.
    pub fn from_fields(id: &str, fields: Fields) -> Result<Self> {
        let mut doc: CategoryDocument = serde_json::from_value(Value::Object(fields))?;
        if doc.name.is_empty() {
            doc.name = id.to_string();
        }
        Ok(doc)
    }

    pub fn to_fields(&self) -> Result<Fields> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(CatalogError::Store(format!(
                "category document encoded as {}",
                other
            ))),
        }
    }

    /// Encodes just the `products` array, for partial updates.
    pub fn products_fields(products: &[Product]) -> Result<Fields> {
        let mut fields = Fields::new();
        fields.insert("products".to_string(), serde_json::to_value(products)?);
        Ok(fields)
    }
}

/// The add-product form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub image: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub stock: String,
}

impl ProductDraft {
    pub fn build(&self, id: ProductId, category: &str) -> Product {
        Product {
            id,
            image: self.image.clone(),
            title: self.title.clone(),
            price: parse_float_prefix(&self.price),
            description: self.description.clone(),
            stock: parse_int_prefix(&self.stock),
            category: category.to_string(),
            rating: Rating::default(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Reads the longest leading decimal number, ignoring whatever follows.
///
/// `"12.50 usd"` gives 12.5, `"abc"` gives `None`.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads the leading integer, honouring a `0x` prefix. `"7 units"` gives 7.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&digits[..len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
