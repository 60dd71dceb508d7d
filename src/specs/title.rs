// src/specs/title.rs

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::{Map, Value};

use crate::core::parse::{
    leading_year, parse_int_lenient, parse_iso_duration_minutes, parse_runtime_text,
};
use crate::core::sanitize::normalize_ws;
use crate::data::ScrapedFields;

static LINKED_DATA: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("linked-data selector")
});
static TECHSPEC_RUNTIME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"[data-testid="title-techspec_runtime"] li"#).expect("runtime selector")
});

const WANTED_TYPES: [&str; 2] = ["Movie", "CreativeWork"];

/// Read Year, rating value, rating count and runtime (minutes) from a title page.
/// Every field is independently optional; nothing here fails.
pub fn extract(url: &str, doc: &str) -> ScrapedFields {
    let html = Html::parse_document(doc);
    let mut out = ScrapedFields::empty(url);

    if let Some(ld) = find_linked_data(&html) {
        out.year = ld
            .get("datePublished")
            .and_then(value_text)
            .as_deref()
            .and_then(leading_year);

        let rating = ld.get("aggregateRating").and_then(Value::as_object);
        out.imdb_rating = rating.and_then(|r| r.get("ratingValue")).and_then(value_float);
        out.number_of_votes = rating
            .and_then(|r| r.get("ratingCount"))
            .and_then(value_text)
            .as_deref()
            .and_then(|t| parse_int_lenient(Some(t)));

        out.runtime = parse_iso_duration_minutes(ld.get("duration").and_then(value_text).as_deref());
    } else {
        logd!("No Movie/CreativeWork JSON-LD on {url}");
    }

    if out.runtime.is_none() {
        out.runtime = runtime_from_techspec(&html);
    }
    out
}

/// First JSON-LD object (top-level, or inside a top-level list) typed Movie or CreativeWork.
/// Blocks that fail to parse are skipped.
fn find_linked_data(html: &Html) -> Option<Map<String, Value>> {
    for script in html.select(&LINKED_DATA) {
        let raw: String = script.text().collect();
        let data: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                logd!("Skipping unparsable JSON-LD block: {e}");
                continue;
            }
        };
        let found = match data {
            Value::Array(items) => items.into_iter().find_map(wanted_object),
            other => wanted_object(other),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

fn wanted_object(v: Value) -> Option<Map<String, Value>> {
    match v {
        Value::Object(obj) => {
            let ty = obj.get("@type").and_then(Value::as_str)?;
            WANTED_TYPES.contains(&ty).then_some(obj)
        }
        _ => None,
    }
}

/// Visible "Runtime" row of the technical specs, e.g. `2h 49m`.
fn runtime_from_techspec(html: &Html) -> Option<i64> {
    let item = html.select(&TECHSPEC_RUNTIME).next()?;
    let text = normalize_ws(&item.text().collect::<Vec<_>>().join(" "));
    parse_runtime_text(&text)
}

/// Scalar JSON value as text; empty strings and non-scalars count as absent.
fn value_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_float(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.imdb.com/title/tt0000001/";

    fn page(head: &str, body: &str) -> String {
        format!("<html><head>{head}</head><body>{body}</body></html>")
    }

    #[test]
    fn reads_single_object_block() {
        let doc = page(
            r#"<script type="application/ld+json">
               {"@type":"Movie","datePublished":"2014-11-07",
                "aggregateRating":{"ratingValue":"8.6","ratingCount":"2,100,000"},
                "duration":"PT2H49M"}
               </script>"#,
            "",
        );
        let f = extract(URL, &doc);
        assert_eq!(f.url, URL);
        assert_eq!(f.year, Some(2014));
        assert_eq!(f.imdb_rating, Some(8.6));
        assert_eq!(f.number_of_votes, Some(2_100_000));
        assert_eq!(f.runtime, Some(169));
    }

    #[test]
    fn numeric_json_values_are_accepted() {
        let doc = page(
            r#"<script type="application/ld+json">
               {"@type":"Movie","aggregateRating":{"ratingValue":7.1,"ratingCount":48213}}
               </script>"#,
            "",
        );
        let f = extract(URL, &doc);
        assert_eq!(f.imdb_rating, Some(7.1));
        assert_eq!(f.number_of_votes, Some(48213));
        assert_eq!(f.year, None);
        assert_eq!(f.runtime, None);
    }

    #[test]
    fn picks_first_wanted_object_from_list_and_skips_broken_blocks() {
        let doc = page(
            r#"<script type="application/ld+json">{ not json </script>
               <script type="application/ld+json">{"@type":"Organization","name":"x"}</script>
               <script type="application/ld+json">
                 [{"@type":"BreadcrumbList"},
                  {"@type":"CreativeWork","datePublished":"1999-03-31"},
                  {"@type":"Movie","datePublished":"2001-01-01"}]
               </script>"#,
            "",
        );
        assert_eq!(extract(URL, &doc).year, Some(1999));
    }

    #[test]
    fn runtime_falls_back_to_techspec_list_item() {
        let doc = page(
            r#"<script type="application/ld+json">{"@type":"Movie","duration":"PT0H0M"}</script>"#,
            r#"<ul><li data-testid="title-techspec_runtime"><span>Runtime</span>
                 <div><ul><li>2h <!-- x --> 10m</li></ul></div></li></ul>"#,
        );
        assert_eq!(extract(URL, &doc).runtime, Some(130));
    }

    #[test]
    fn techspec_zero_runtime_is_unknown() {
        let doc = page("", r#"<div data-testid="title-techspec_runtime"><li>0h 0m</li></div>"#);
        assert_eq!(extract(URL, &doc).runtime, None);
    }

    #[test]
    fn non_object_aggregate_rating_is_ignored() {
        let doc = page(
            r#"<script type="application/ld+json">{"@type":"Movie","aggregateRating":"8.0","datePublished":"n/a"}</script>"#,
            "",
        );
        let f = extract(URL, &doc);
        assert_eq!(f.imdb_rating, None);
        assert_eq!(f.number_of_votes, None);
        assert_eq!(f.year, None);
    }

    #[test]
    fn malformed_rating_value_degrades_to_none() {
        let doc = page(
            r#"<script type="application/ld+json">{"@type":"Movie","aggregateRating":{"ratingValue":"eight"}}</script>"#,
            "",
        );
        assert_eq!(extract(URL, &doc).imdb_rating, None);
    }

    #[test]
    fn oversized_duration_is_unknown_not_a_panic() {
        let ld = r#"<script type="application/ld+json">{"@type":"Movie","datePublished":"2010","duration":"PT200000000000000000H"}</script>"#;
        let f = extract(URL, &page(ld, ""));
        assert_eq!(f.runtime, None);
        assert_eq!(f.year, Some(2010));

        let with_techspec = page(ld, r#"<div data-testid="title-techspec_runtime"><li>1h 38m</li></div>"#);
        assert_eq!(extract(URL, &with_techspec).runtime, Some(98));
    }
}
