use crate::domain::dates::DateInfo;

/// Every static field except Link degrades to this when the page fetch
/// itself fails.
pub const FETCH_ERROR: &str = "Error al cargar la página";

/// Flat static-field record scraped from the listing page. Field order
/// follows the site layout so the export keeps a stable column order.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRecord {
    pub link: String,
    pub fields: Vec<(&'static str, String)>,
}

impl OpportunityRecord {
    pub fn fetch_failed(url: &str, field_names: &[&'static str]) -> Self {
        OpportunityRecord {
            link: url.to_string(),
            fields: field_names
                .iter()
                .map(|name| (*name, FETCH_ERROR.to_string()))
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}

/// One row of the result table: static fields plus the parsed date info for
/// a single URL. Immutable once built; the outreach message is derived at
/// export time.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub statics: OpportunityRecord,
    pub dates: DateInfo,
}

impl MergedRecord {
    /// Raw key/value pairs in the canonical pre-export order: Link, the nine
    /// static fields, then the five date columns.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![("Link".to_string(), self.statics.link.clone())];
        for (name, value) in &self.statics.fields {
            rows.push((name.to_string(), value.clone()));
        }
        rows.push(("Start_Date".to_string(), self.dates.start_date_display()));
        rows.push(("End_Date".to_string(), self.dates.end_date_display()));
        rows.push(("Date_Range".to_string(), self.dates.range_display()));
        rows.push((
            "Interval_Months".to_string(),
            self.dates.months_display(),
        ));
        rows.push((
            "Apply_Before_Date".to_string(),
            self.dates.apply_before_display(),
        ));
        rows
    }
}
