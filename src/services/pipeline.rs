use crate::{
    configuration::Settings,
    domain::{dates::parse_date_info, opportunity::MergedRecord},
    services::{date_extractor, renderer, site_layout::SiteLayout, static_scraper},
};

/// Processes one URL: the static fetch and the render/date extraction run
/// independently and merge into one record. A failure on either side
/// degrades that side's fields to their sentinels.
pub async fn process_single_url(settings: &Settings, url: &str) -> MergedRecord {
    println!("\n--- Procesando URL única: {} ---", url);
    let layout = SiteLayout::aiesec();
    let statics =
        static_scraper::extract_static_fields(url, &layout, settings.http_timeout()).await;

    println!("Obteniendo contenido de: {}", url);
    let rendered = renderer::fetch_rendered_html(settings, url).await;
    let raw_dates = date_extractor::find_dates_in_html(rendered.as_deref());
    let dates = parse_date_info(&raw_dates);

    MergedRecord { statics, dates }
}

/// Processes the given URLs strictly one at a time, in order, appending one
/// record per URL. A failure anywhere degrades that record's fields only
/// and never aborts the batch.
pub async fn process_urls(settings: &Settings, urls: &[String]) -> Vec<MergedRecord> {
    let layout = SiteLayout::aiesec();
    let mut records = Vec::with_capacity(urls.len());

    for url in urls {
        println!("\n--- Procesando: {} ---", url);
        let statics =
            static_scraper::extract_static_fields(url, &layout, settings.http_timeout()).await;

        println!("Obteniendo contenido de: {}...", url);
        let rendered = renderer::fetch_rendered_html(settings, url).await;
        let raw_dates = date_extractor::find_dates_in_html(rendered.as_deref());
        let dates = parse_date_info(&raw_dates);

        records.push(MergedRecord { statics, dates });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        dates::DateOutcome,
        opportunity::FETCH_ERROR,
    };

    // Same card slice the static scraper tests use: name, company and host
    // text nodes resolvable by the layout paths.
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
            </div>
          </div>
        </div>
      </div>
    </div>
  </main>
</div>
</body></html>"#;

    fn offline_settings() -> Settings {
        Settings {
            webdriver_url: "http://127.0.0.1:9".to_string(),
            http_timeout_secs: 2,
            page_load_timeout_secs: 2,
            marker_timeout_secs: 1,
            output_dir: ".".to_string(),
        }
    }

    #[tokio::test]
    async fn one_failing_url_does_not_abort_the_batch() {
        let settings = offline_settings();
        let urls = vec![
            "http://127.0.0.1:9/opportunity/global-talent/1".to_string(),
            "http://127.0.0.1:9/opportunity/global-talent/2".to_string(),
            "http://127.0.0.1:9/opportunity/global-talent/3".to_string(),
        ];

        let records = process_urls(&settings, &urls).await;

        assert_eq!(records.len(), 3);
        for (record, url) in records.iter().zip(&urls) {
            assert_eq!(&record.statics.link, url);
            assert_eq!(record.statics.field("Program"), FETCH_ERROR);
            assert_eq!(record.dates.outcome, DateOutcome::NotFound);
            assert_eq!(record.dates.start_date, None);
        }
    }

    #[tokio::test]
    async fn render_failure_leaves_static_fields_intact() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/opportunity/global-talent/10")
            .with_status(200)
            .with_body(PAGE)
            .create_async()
            .await;
        // Static pages resolve; the WebDriver endpoint stays unreachable.
        let settings = offline_settings();
        let urls = vec![
            format!("{}/opportunity/global-talent/10", server.url()),
            "http://127.0.0.1:9/opportunity/global-talent/11".to_string(),
        ];

        let records = process_urls(&settings, &urls).await;

        mock.assert_async().await;
        assert_eq!(records.len(), 2);

        // Row 1: the dynamic side degraded, the static side did not.
        assert_eq!(records[0].statics.field("Empresa"), "ACME Corp");
        assert_eq!(records[0].statics.field("Host_entity"), "Mexico");
        assert_eq!(
            records[0].statics.field("Nombre_opp"),
            "Práctica de marketing digital"
        );
        assert_eq!(records[0].dates.outcome, DateOutcome::NotFound);
        assert_eq!(records[0].dates.start_date, None);

        // Row 2 carries its own independent failures.
        assert_eq!(records[1].statics.field("Empresa"), FETCH_ERROR);
        assert_eq!(records[1].dates.outcome, DateOutcome::NotFound);
    }

    #[tokio::test]
    async fn single_url_processing_matches_the_batch_result() {
        let settings = offline_settings();
        let url = "http://127.0.0.1:9/opportunity/global-talent/5".to_string();

        let single = process_single_url(&settings, &url).await;
        let batch = process_urls(&settings, std::slice::from_ref(&url)).await;

        assert_eq!(batch, vec![single]);
    }

    #[tokio::test]
    async fn records_keep_input_order() {
        let settings = offline_settings();
        let urls = vec![
            "http://127.0.0.1:9/opportunity/global-teacher/9".to_string(),
            "http://127.0.0.1:9/opportunity/global-talent/8".to_string(),
        ];

        let records = process_urls(&settings, &urls).await;

        let links: Vec<&str> = records.iter().map(|r| r.statics.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "http://127.0.0.1:9/opportunity/global-teacher/9",
                "http://127.0.0.1:9/opportunity/global-talent/8",
            ]
        );
    }
}
