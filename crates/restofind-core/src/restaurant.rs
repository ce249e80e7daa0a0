//! Restaurant records as returned by the restaurant API.
//!
//! The API is an external collaborator and its payloads are loosely shaped:
//! any field may be absent or `null`, and numeric fields such as
//! `aggregate_rating` and `average_cost_for_two` show up both as JSON numbers
//! (`4.2`) and as strings (`"4.2"`). Records are kept exactly as received;
//! accessors only decide whether a value counts as present for display.

use std::fmt;

use serde::Deserialize;

/// A JSON scalar that may arrive as either a number or a string.
///
/// Displays exactly as received, so `"4.0"` stays `4.0` while `4` stays `4`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Whether the value should be shown rather than replaced by a fallback.
    ///
    /// Empty strings and numeric zero count as missing.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestaurantLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRating {
    #[serde(default)]
    pub aggregate_rating: Option<Scalar>,
}

/// A single restaurant record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Restaurant {
    /// API identifier; numeric or string depending on the upstream source.
    #[serde(default)]
    pub id: Option<Scalar>,
    #[serde(default)]
    pub name: Option<String>,
    /// Comma-separated cuisine list, e.g. `"Cafe, Continental"`.
    #[serde(default)]
    pub cuisines: Option<String>,
    #[serde(default)]
    pub location: Option<RestaurantLocation>,
    #[serde(default)]
    pub average_cost_for_two: Option<Scalar>,
    /// Free-text phone list, e.g. `"080 4112 3456, +91 98450 12345"`.
    #[serde(default)]
    pub phone_numbers: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub menu_url: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub user_rating: Option<UserRating>,
}

/// One entry of the location-search response: `{ "restaurant": { ... } }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationResult {
    #[serde(default)]
    pub restaurant: Restaurant,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Restaurant {
    /// Display name; empty when the record carries none.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.id
            .as_ref()
            .filter(|id| id.is_present())
            .map(ToString::to_string)
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        non_empty(self.location.as_ref()?.address.as_ref())
    }

    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        non_empty(self.location.as_ref()?.locality.as_ref())
    }

    #[must_use]
    pub fn cuisines(&self) -> Option<&str> {
        non_empty(self.cuisines.as_ref())
    }

    #[must_use]
    pub fn rating(&self) -> Option<&Scalar> {
        self.user_rating
            .as_ref()?
            .aggregate_rating
            .as_ref()
            .filter(|r| r.is_present())
    }

    #[must_use]
    pub fn cost_for_two(&self) -> Option<&Scalar> {
        self.average_cost_for_two.as_ref().filter(|c| c.is_present())
    }

    #[must_use]
    pub fn phone_numbers(&self) -> Option<&str> {
        non_empty(self.phone_numbers.as_ref())
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        non_empty(self.url.as_ref())
    }

    #[must_use]
    pub fn menu_url(&self) -> Option<&str> {
        non_empty(self.menu_url.as_ref())
    }

    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        non_empty(self.featured_image.as_ref())
    }
}

#[cfg(test)]
#[path = "restaurant_test.rs"]
mod tests;
