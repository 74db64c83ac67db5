// src/services/render.rs
// DOCUMENTATION: HTML rendering for the listing page
// PURPOSE: Turn page state and place records into markup matching the page's DOM contract

use crate::models::{Amenity, Place};
use crate::services::ListingPage;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use uuid::Uuid;

/// Text shown when a place has no description
pub const NO_DESCRIPTION: &str = "No description available.";

/// Heading content when no amenity is checked; keeps the line height
pub const EMPTY_HEADING: &str = "&nbsp;";

const STYLESHEETS: [&str; 5] = [
    "4-common.css",
    "3-header.css",
    "3-footer.css",
    "6-filters.css",
    "8-places.css",
];

/// Whole numbers print without a fractional part ("120", "99.5")
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// "1 Guest", "0 Guests", "3 Guests"
pub fn pluralize(count: f64, noun: &str) -> String {
    if count == 1.0 {
        format!("{} {}", format_number(count), noun)
    } else {
        format!("{} {}s", format_number(count), noun)
    }
}

/// Split a description on `<br>`, `<br/>` and `<BR />` tags
/// Everything else stays text and is escaped on output
pub fn description_lines(text: &str) -> Vec<&str> {
    // ASCII lowercasing keeps byte offsets, so indices map back onto `text`
    let lower = text.to_ascii_lowercase();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut search = 0;

    while let Some(offset) = lower[search..].find("<br") {
        let tag_start = search + offset;
        let after = tag_start + 3;
        match lower[after..].find('>') {
            Some(end)
                if lower[after..after + end]
                    .chars()
                    .all(|c| c.is_whitespace() || c == '/') =>
            {
                lines.push(&text[start..tag_start]);
                start = after + end + 1;
                search = start;
            }
            _ => search = after,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Inner HTML of `div.Amenities h4`
pub fn amenities_heading(label: Option<&str>) -> Markup {
    match label {
        Some(label) => html! { (label) },
        None => PreEscaped(EMPTY_HEADING.to_string()),
    }
}

/// One `<article>` card for a place
pub fn render_place(place: &Place) -> Markup {
    html! {
        article {
            div.title {
                h2 { (place.name) }
                div.price_by_night { "$" (format_number(place.price_by_night)) }
            }
            div.information {
                div.max_guest { (pluralize(place.max_guest, "Guest")) }
                div.number_rooms { (pluralize(place.number_rooms, "Bedroom")) }
                div.number_bathrooms { (pluralize(place.number_bathrooms, "Bathroom")) }
            }
            div.description {
                @match place.description_text() {
                    Some(text) => {
                        @for (i, line) in description_lines(text).iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                    None => { (NO_DESCRIPTION) }
                }
            }
        }
    }
}

/// Full content of `section.places`, one card per place in response order
pub fn render_places(places: &[Place]) -> Markup {
    html! {
        @for place in places {
            (render_place(place))
        }
    }
}

/// Whole listing page
/// DOCUMENTATION: `catalog` drives the checkbox list; checked state comes from the page selector
pub fn render_page(page: &ListingPage, catalog: &[Amenity], cache_id: Uuid) -> Markup {
    let status_classes = page.api_status().css_classes().join(" ");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "AirBnB clone" }
                @for sheet in STYLESHEETS {
                    link rel="stylesheet" href=(format!("/static/styles/{}?{}", sheet, cache_id));
                }
            }
            body {
                header {
                    div id="api_status" class=(status_classes) {}
                }
                div.container {
                    section.filters {
                        div.Amenities {
                            h3 { "Amenities" }
                            h4 { (amenities_heading(page.selector().label().as_deref())) }
                            div.popover {
                                ul {
                                    @for amenity in catalog {
                                        li {
                                            input type="checkbox"
                                                data-id=(amenity.id)
                                                data-name=(amenity.name)
                                                checked[page.selector().is_selected(&amenity.id)];
                                            " " (amenity.name)
                                        }
                                    }
                                }
                            }
                        }
                        button type="button" { "Search" }
                    }
                    section.places {
                        (PreEscaped(page.places_html()))
                    }
                }
                footer { "Holberton School" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, guests: f64, rooms: f64, baths: f64, description: Option<&str>) -> Place {
        Place {
            id: None,
            name: name.to_string(),
            price_by_night: 80.0,
            max_guest: guests,
            number_rooms: rooms,
            number_bathrooms: baths,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1.0, "Guest"), "1 Guest");
        assert_eq!(pluralize(0.0, "Guest"), "0 Guests");
        assert_eq!(pluralize(2.0, "Guest"), "2 Guests");
        assert_eq!(pluralize(1.5, "Bathroom"), "1.5 Bathrooms");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(99.5), "99.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_each_count_pluralized_independently() {
        let html = render_place(&place("Loft", 1.0, 2.0, 0.0, Some("Nice"))).into_string();
        assert!(html.contains(r#"<div class="max_guest">1 Guest</div>"#));
        assert!(html.contains(r#"<div class="number_rooms">2 Bedrooms</div>"#));
        assert!(html.contains(r#"<div class="number_bathrooms">0 Bathrooms</div>"#));

        let html = render_place(&place("Loft", 0.0, 1.0, 1.0, None)).into_string();
        assert!(html.contains(r#"<div class="max_guest">0 Guests</div>"#));
        assert!(html.contains(r#"<div class="number_rooms">1 Bedroom</div>"#));
        assert!(html.contains(r#"<div class="number_bathrooms">1 Bathroom</div>"#));
    }

    #[test]
    fn test_title_and_price() {
        let html = render_place(&place("Loft", 1.0, 1.0, 1.0, None)).into_string();
        assert!(html.starts_with("<article>"));
        assert!(html.contains("<h2>Loft</h2>"));
        assert!(html.contains(r#"<div class="price_by_night">$80</div>"#));
    }

    #[test]
    fn test_fractional_price() {
        let mut loft = place("Loft", 1.0, 1.0, 1.0, None);
        loft.price_by_night = 99.5;
        let html = render_place(&loft).into_string();
        assert!(html.contains(r#"<div class="price_by_night">$99.5</div>"#));
    }

    #[test]
    fn test_description_fallback() {
        let html = render_place(&place("A", 1.0, 1.0, 1.0, None)).into_string();
        assert!(html.contains(NO_DESCRIPTION));
        let html = render_place(&place("A", 1.0, 1.0, 1.0, Some(""))).into_string();
        assert!(html.contains(NO_DESCRIPTION));

        let html = render_place(&place("A", 1.0, 1.0, 1.0, Some("Sea view"))).into_string();
        assert!(html.contains("Sea view"));
        assert!(!html.contains(NO_DESCRIPTION));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_place(&place("<b>Loft</b>", 1.0, 1.0, 1.0, Some("a & b"))).into_string();
        assert!(html.contains("<h2>&lt;b&gt;Loft&lt;/b&gt;</h2>"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_description_line_breaks_render() {
        let html = render_place(&place(
            "A",
            1.0,
            1.0,
            1.0,
            Some("Cozy room<BR />Near the park<br>Quiet<script>x</script>"),
        ))
        .into_string();

        assert!(html.contains("Cozy room<br>Near the park<br>Quiet&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_description_lines() {
        assert_eq!(description_lines("a<BR />b<br/>c<br>d"), vec!["a", "b", "c", "d"]);
        assert_eq!(description_lines("no breaks"), vec!["no breaks"]);
        assert_eq!(description_lines("<bred>x"), vec!["<bred>x"]);
        assert_eq!(description_lines("trailing<br"), vec!["trailing<br"]);
    }

    #[test]
    fn test_render_places_keeps_order() {
        let html = render_places(&[
            place("First", 1.0, 1.0, 1.0, None),
            place("Second", 1.0, 1.0, 1.0, None),
        ])
        .into_string();
        assert_eq!(html.matches("<article>").count(), 2);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
        assert_eq!(render_places(&[]).into_string(), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(amenities_heading(None).into_string(), "&nbsp;");
        assert_eq!(amenities_heading(Some("Wifi, Pool")).into_string(), "Wifi, Pool");
        assert_eq!(amenities_heading(Some("Bed & Bath")).into_string(), "Bed &amp; Bath");
    }
}
