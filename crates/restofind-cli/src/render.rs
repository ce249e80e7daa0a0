//! Plain-text rendering of restaurant cards, card grids, and detail views.

use restofind_client::FetchState;
use restofind_core::{Restaurant, Route, Scalar};

pub(crate) const LOADING: &str = "Loading...";
pub(crate) const NO_IMAGE: &str = "No image available";
pub(crate) const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600";
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// Spaces between adjacent cards in a grid row.
const GAP: usize = 2;
/// Narrowest card interior, regardless of terminal width.
const MIN_INNER: usize = 16;

/// Rendering options shared by every page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct View {
    pub width: usize,
}

/// Renders the non-ready states of a fetch lifecycle uniformly and delegates
/// the ready state to `ready`.
pub(crate) fn fetch_state<T>(
    state: &FetchState<T>,
    idle: &str,
    ready: impl FnOnce(&T) -> String,
) -> String {
    match state {
        FetchState::Idle => idle.to_string(),
        FetchState::Loading => LOADING.to_string(),
        FetchState::Ready(value) => ready(value),
        FetchState::Error(message) => format!("Error: {message}"),
    }
}

/// Grid columns for a terminal `width`.
pub(crate) fn columns_for_width(width: usize) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

fn or_na(value: Option<&Scalar>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// Card lines: image, name, address, rating, and a detail link when the
/// record has an id.
pub(crate) fn card(r: &Restaurant) -> Vec<String> {
    let mut lines = vec![
        r.featured_image()
            .map_or_else(|| NO_IMAGE.to_string(), |url| format!("[image] {url}")),
        r.name().to_string(),
        r.address().unwrap_or(NOT_AVAILABLE).to_string(),
        format!("★ {}", or_na(r.rating())),
    ];
    if let Some(id) = r.id() {
        lines.push(format!("→ {}", Route::Details { id }));
    }
    lines
}

/// Lays cards out in rows of boxes, as many per row as `width` allows.
pub(crate) fn grid<'a>(cards: impl IntoIterator<Item = &'a Restaurant>, width: usize) -> String {
    let cards: Vec<Vec<String>> = cards.into_iter().map(card).collect();
    if cards.is_empty() {
        return String::new();
    }

    let columns = columns_for_width(width).min(cards.len());
    let cell = width.saturating_sub(GAP * (columns - 1)) / columns;
    let inner = cell.saturating_sub(4).max(MIN_INNER);
    let gap = " ".repeat(GAP);

    let mut out = Vec::new();
    for row in cards.chunks(columns) {
        let height = row.iter().map(Vec::len).max().unwrap_or_default();
        let boxes: Vec<Vec<String>> = row.iter().map(|c| boxed(c, height, inner)).collect();
        for i in 0..height + 2 {
            let line: Vec<&str> = boxes.iter().map(|b| b[i].as_str()).collect();
            out.push(line.join(&gap));
        }
    }
    out.join("\n")
}

fn boxed(lines: &[String], height: usize, inner: usize) -> Vec<String> {
    let rule = "─".repeat(inner + 2);
    let mut out = Vec::with_capacity(height + 2);
    out.push(format!("┌{rule}┐"));
    for i in 0..height {
        let text = lines.get(i).map_or("", String::as_str);
        out.push(format!("│ {} │", fit(text, inner)));
    }
    out.push(format!("└{rule}┘"));
    out
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Full detail view with a fallback for every missing field.
pub(crate) fn details(r: &Restaurant) -> String {
    let cost = r
        .cost_for_two()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |c| format!("₹{c}"));

    let mut lines = vec![
        format!("[image] {}", r.featured_image().unwrap_or(PLACEHOLDER_IMAGE)),
        format!("⭐ {}", or_na(r.rating())),
        String::new(),
        r.name().to_string(),
        r.locality()
            .unwrap_or("Location not available")
            .to_string(),
        String::new(),
        format!("Cuisine: {}", r.cuisines().unwrap_or(NOT_AVAILABLE)),
        format!("Address: {}", r.address().unwrap_or(NOT_AVAILABLE)),
        format!("Average Cost for Two: {cost}"),
        format!("Phone: {}", r.phone_numbers().unwrap_or("Not available")),
    ];

    if let Some(url) = r.website() {
        lines.push(format!("Visit Website: {url}"));
    }

    if let Some(menu) = r.menu_url() {
        lines.push(String::new());
        lines.push("Menu".to_string());
        lines.push(format!("View menu: {menu}"));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
