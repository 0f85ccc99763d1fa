use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::shared::lenient::{bool_from_any, f64_from_any, string_from_any};

/// Shown in place of a missing or broken item image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1546554137-f86b9593a222?w=400&h=300&fit=crop";

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a menu entry.
///
/// The sheet may hand out ids as strings or as numbers; both are kept as text
/// so the id round-trips unchanged through the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FoodItemId(String);

impl FoodItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value of the id, read the way a lenient integer parser does:
    /// optional leading whitespace and sign, then leading digits. Ids that
    /// do not start with a number yield `None`.
    pub fn numeric_value(&self) -> Option<i64> {
        let s = self.0.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut value: i64 = 0;
        let mut seen_digit = false;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            seen_digit = true;
            value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        }

        if !seen_digit {
            return None;
        }
        Some(if negative { -value } else { value })
    }
}

impl fmt::Display for FoodItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for FoodItemId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for FoodItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FoodItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for FoodItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_from_any(deserializer).map(Self)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One menu entry as served by the menu sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default)]
    pub id: FoodItemId,

    #[serde(default, deserialize_with = "string_from_any")]
    pub title: String,

    #[serde(default, deserialize_with = "string_from_any")]
    pub description: String,

    #[serde(default, deserialize_with = "string_from_any")]
    pub category: String,

    #[serde(default, deserialize_with = "f64_from_any")]
    pub price: f64,

    /// 0..=5, one decimal by convention.
    #[serde(default, deserialize_with = "f64_from_any")]
    pub rating: f64,

    #[serde(default, deserialize_with = "string_from_any")]
    pub image: String,

    #[serde(rename = "isVeg", default, deserialize_with = "bool_from_any")]
    pub is_veg: bool,
}

impl FoodItem {
    /// Image URL to render; empty values fall back to the placeholder.
    pub fn display_image(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    /// Price with the rupee sign, without trailing zeros: `₹40`, `₹12.5`.
    pub fn display_price(&self) -> String {
        format!("₹{}", crate::shared::lenient::format_number(self.price))
    }

    pub fn display_rating(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Apply every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &FoodItemPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(is_veg) = patch.is_veg {
            self.is_veg = is_veg;
        }
    }
}

/// Partial update of a [`FoodItem`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
}

impl FoodItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
