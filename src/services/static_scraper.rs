use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use crate::{
    domain::opportunity::OpportunityRecord,
    services::site_layout::{FieldPath, SiteLayout, TextPart},
};

/// Reads the nine static fields from the server-rendered HTML with a single
/// bounded GET. Any network or status failure degrades every field except
/// Link to the fetch error sentinel; this function never fails outward and
/// never retries.
pub async fn extract_static_fields(
    url: &str,
    layout: &SiteLayout,
    timeout: Duration,
) -> OpportunityRecord {
    let client = reqwest::Client::new();
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("No response from {}: {:?}", url, e);
            return OpportunityRecord::fetch_failed(url, &layout.field_names());
        }
    };

    let body = match response.error_for_status() {
        Ok(response) => match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Failed to read response body from {}: {:?}", url, e);
                return OpportunityRecord::fetch_failed(url, &layout.field_names());
            }
        },
        Err(e) => {
            log::error!("Bad status from {}: {:?}", url, e);
            return OpportunityRecord::fetch_failed(url, &layout.field_names());
        }
    };

    let document = Html::parse_document(&body);
    extract_fields_from_document(url, &document, layout)
}

/// Pure extraction step: resolves every layout path against an already
/// parsed document. A path that resolves to nothing yields an empty string.
pub fn extract_fields_from_document(
    url: &str,
    document: &Html,
    layout: &SiteLayout,
) -> OpportunityRecord {
    let fields = layout
        .fields
        .iter()
        .map(|(name, path)| (*name, read_field(document, path)))
        .collect();

    OpportunityRecord {
        link: url.to_string(),
        fields,
    }
}

fn read_field(document: &Html, path: &FieldPath) -> String {
    let selector = Selector::parse(path.selector).unwrap();
    match document.select(&selector).next() {
        None => String::new(),
        Some(element) => match path.part {
            TextPart::Content => element.text().collect::<String>().trim().to_string(),
            TextPart::NthText(n) => nth_text_node(element, n),
        },
    }
}

fn nth_text_node(element: ElementRef, n: usize) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text().map(|text| text.to_string()))
        .nth(n - 1)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::opportunity::FETCH_ERROR;

    // Mirrors the slice of the real page the layout paths walk through:
    // the opportunity card with name, company/host text nodes and program.
    const PAGE: &str = r#"<html><body>
<div>nav</div>
<div>
  <main>
    <div>
      <div>
        <div>
          <div>
            <div>aside</div>
            <div>
              <div>
                <div>
                  <div>
                    <div><h3>Práctica de marketing digital</h3></div>
                    <div>
                      ACME Corp
                      <br>
                      Mexico
                    </div>
                  </div>
                </div>
              </div>
              <div>
                <div>
                  <div>
                    <div>icon</div>
                    <div><h3>Global Talent</h3></div>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
    </div>
  </main>
</div>
</body></html>"#;

    #[test]
    fn reads_fields_by_structural_path() {
        let document = Html::parse_document(PAGE);
        let layout = SiteLayout::aiesec();

        let record =
            extract_fields_from_document("https://example.org/opp/1", &document, &layout);

        assert_eq!(record.field("Nombre_opp"), "Práctica de marketing digital");
        assert_eq!(record.field("Empresa"), "ACME Corp");
        assert_eq!(record.field("Host_entity"), "Mexico");
        assert_eq!(record.field("Program"), "Global Talent");
    }

    #[test]
    fn absent_paths_read_as_empty_strings() {
        let document = Html::parse_document(PAGE);
        let layout = SiteLayout::aiesec();

        let record =
            extract_fields_from_document("https://example.org/opp/1", &document, &layout);

        assert_eq!(record.field("Salario"), "");
        assert_eq!(record.field("Idiomas"), "");
        assert_eq!(record.field("Horario"), "");
    }

    #[tokio::test]
    async fn network_failure_degrades_every_field_except_link() {
        let url = "http://127.0.0.1:9/opportunity/global-talent/1";
        let layout = SiteLayout::aiesec();

        let record = extract_static_fields(url, &layout, Duration::from_secs(2)).await;

        assert_eq!(record.link, url);
        assert_eq!(record.fields.len(), 9);
        for (name, value) in &record.fields {
            assert_eq!(value, FETCH_ERROR, "field {} should carry the sentinel", name);
        }
    }

    #[tokio::test]
    async fn error_status_degrades_like_a_network_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/opportunity/global-talent/2")
            .with_status(500)
            .create_async()
            .await;
        let url = format!("{}/opportunity/global-talent/2", server.url());
        let layout = SiteLayout::aiesec();

        let record = extract_static_fields(&url, &layout, Duration::from_secs(2)).await;

        mock.assert_async().await;
        assert_eq!(record.link, url);
        for (_, value) in &record.fields {
            assert_eq!(value, FETCH_ERROR);
        }
    }

    #[tokio::test]
    async fn extracts_fields_from_a_served_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/opportunity/global-talent/3")
            .with_status(200)
            .with_body(PAGE)
            .create_async()
            .await;
        let url = format!("{}/opportunity/global-talent/3", server.url());
        let layout = SiteLayout::aiesec();

        let record = extract_static_fields(&url, &layout, Duration::from_secs(5)).await;

        mock.assert_async().await;
        assert_eq!(record.field("Empresa"), "ACME Corp");
        assert_eq!(record.field("Host_entity"), "Mexico");
    }
}
