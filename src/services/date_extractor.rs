use regex::Regex;
use scraper::{Html, Selector};

use crate::services::renderer::DATE_MARKER_SELECTOR;

pub const NO_CONTENT_DIAGNOSTIC: &str =
    "No se pudo obtener el contenido HTML para buscar las fechas.";
pub const NO_DATES_DIAGNOSTIC: &str = "No se encontraron fechas en el contenido HTML.";
pub const GENERAL_DATES_PREFIX: &str =
    "Fechas generales encontradas (podrían no ser las exactas): ";

const DATE: &str = r"\d{1,2}\s*[A-Za-z]{3},\s*\d{4}";

/// Searches the rendered HTML for the start/end range inside the marker
/// block and, independently, for the "Apply before" date anywhere in the
/// page text. When neither search finds anything, falls back to a generic
/// date scan whose result is a diagnostic string, not labeled fields.
///
/// Returns newline-joined labeled lines or a diagnostic; `parse_date_info`
/// turns the result into the structured form either way.
pub fn find_dates_in_html(html: Option<&str>) -> String {
    let Some(html) = html else {
        return NO_CONTENT_DIAGNOSTIC.to_string();
    };

    let document = Html::parse_document(html);
    let mut results: Vec<String> = Vec::new();

    let marker = Selector::parse(DATE_MARKER_SELECTOR).unwrap();
    match document.select(&marker).next() {
        Some(block) => {
            let block_text: String = block.text().map(str::trim).collect();
            let range_pattern =
                Regex::new(&format!(r"({})\s*-\s*({})", DATE, DATE)).unwrap();
            if let Some(captures) = range_pattern.captures(&block_text) {
                results.push(format!("Start Date: {}", captures[1].trim()));
                results.push(format!("End Date: {}", captures[2].trim()));
            }
        }
        None => log::warn!("Date range block not found in the rendered page"),
    }

    let full_text = page_text(&document);
    let apply_before_pattern = Regex::new(&format!(r"Apply before\s*({})", DATE)).unwrap();
    match apply_before_pattern.captures(&full_text) {
        Some(captures) => results.push(format!("Apply Before Date: {}", captures[1].trim())),
        None => log::warn!("'Apply before' date not found in the rendered page"),
    }

    if !results.is_empty() {
        return results.join("\n");
    }

    // Last resort: any date-looking text, explicitly marked as inexact.
    log::warn!("Structured date extraction failed, falling back to a generic date scan");
    let generic_pattern = Regex::new(DATE).unwrap();
    let found: Vec<&str> = generic_pattern
        .find_iter(&full_text)
        .map(|m| m.as_str())
        .collect();
    if found.is_empty() {
        NO_DATES_DIAGNOSTIC.to_string()
    } else {
        format!("{}{}", GENERAL_DATES_PREFIX, found.join(", "))
    }
}

fn page_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
