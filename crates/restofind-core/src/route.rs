//! Client-side routes.
//!
//! | Path                    | Page                   | Query parameters          |
//! |-------------------------|------------------------|---------------------------|
//! | `/`                     | landing                |                           |
//! | `/restaurants`          | restaurant list        | `query`                   |
//! | `/restaurant/:id`       | restaurant details     |                           |
//! | `/restaurants/location` | results by location    | `lat`, `lng`, `radius`    |
//!
//! Parameter values are carried verbatim; the only check a page performs is
//! whether a value is present.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters escaped in path segments and query values (RFC 3986 unreserved
/// characters pass through).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unsupported URL scheme in \"{0}\"")]
    UnsupportedScheme(String),

    #[error("invalid percent-encoding in \"{0}\"")]
    InvalidEncoding(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Restaurants {
        query: Option<String>,
    },
    Details {
        id: String,
    },
    Location {
        lat: Option<String>,
        lng: Option<String>,
        radius: Option<String>,
    },
    NotFound {
        path: String,
    },
}

impl Route {
    /// Parses a bare path (`/restaurant/42`) or an absolute URL
    /// (`http://localhost:5173/restaurant/42`) into a route.
    ///
    /// Unknown paths yield [`Route::NotFound`] rather than an error.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnsupportedScheme`] for absolute URLs that are not
    ///   `http` or `https`.
    /// - [`RouteError::InvalidEncoding`] when a percent-escape does not decode
    ///   to UTF-8.
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let input = input.trim();
        let relative = strip_origin(input)?;

        let without_fragment = relative.split('#').next().unwrap_or_default();
        let (raw_path, raw_query) = match without_fragment.split_once('?') {
            Some((p, q)) => (p, q),
            None => (without_fragment, ""),
        };

        let query = parse_query(raw_query)?;
        let get = |key: &str| -> Option<String> {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        let segments: Vec<&str> = raw_path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Landing,
            ["restaurants"] => Route::Restaurants {
                query: get("query"),
            },
            ["restaurants", "location"] => Route::Location {
                lat: get("lat"),
                lng: get("lng"),
                radius: get("radius"),
            },
            ["restaurant", id] => Route::Details {
                id: decode(id, false)?,
            },
            _ => Route::NotFound {
                path: format!("/{}", segments.join("/")),
            },
        };

        Ok(route)
    }

    /// Builds the location route for a coordinate search.
    #[must_use]
    pub fn location(lat: &str, lng: &str, radius: &str) -> Self {
        Route::Location {
            lat: Some(lat.to_owned()),
            lng: Some(lng.to_owned()),
            radius: Some(radius.to_owned()),
        }
    }

    /// Formats the route as a root-relative URL with encoded parameters.
    #[must_use]
    pub fn to_url(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Restaurants { query: None } => "/restaurants".to_string(),
            Route::Restaurants { query: Some(q) } => {
                format!("/restaurants?query={}", encode(q))
            }
            Route::Details { id } => format!("/restaurant/{}", encode(id)),
            Route::Location { lat, lng, radius } => {
                let pairs: Vec<String> = [("lat", lat), ("lng", lng), ("radius", radius)]
                    .into_iter()
                    .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}={}", encode(v))))
                    .collect();
                if pairs.is_empty() {
                    "/restaurants/location".to_string()
                } else {
                    format!("/restaurants/location?{}", pairs.join("&"))
                }
            }
            Route::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-decodes a URL component. Query values also map `+` to a space.
fn decode(raw: &str, plus_as_space: bool) -> Result<String, RouteError> {
    let replaced: Cow<'_, str> = if plus_as_space && raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    percent_decode_str(&replaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| RouteError::InvalidEncoding(raw.to_string()))
}

fn parse_query(raw: &str) -> Result<Vec<(String, String)>, RouteError> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode(k, true)?, decode(v, true)?))
        })
        .collect()
}

/// Drops `scheme://host[:port]` from absolute URLs, leaving the
/// root-relative remainder.
fn strip_origin(input: &str) -> Result<&str, RouteError> {
    if input.starts_with('/') {
        return Ok(input);
    }

    let Some((scheme, rest)) = input.split_once("://") else {
        return Ok(input);
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(RouteError::UnsupportedScheme(input.to_string()));
    }

    Ok(rest.find(['/', '?', '#']).map_or("/", |idx| &rest[idx..]))
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
