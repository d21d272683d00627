use std::time::{Duration, Instant};

use thirtyfour::{error::WebDriverResult, By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::configuration::Settings;

/// Exact signature of the container the date range renders into. Its
/// appearance is the signal that the client-side content has loaded.
pub const DATE_MARKER_SELECTOR: &str = "div[class='font-bold text-[16px]']";

const READY_STATE_POLL: Duration = Duration::from_millis(250);
const MARKER_POLL: Duration = Duration::from_millis(500);

/// Renders the page in an isolated headless browser session and returns the
/// resulting HTML, or `None` when the session or navigation itself fails.
/// The session is torn down on every path before returning.
pub async fn fetch_rendered_html(settings: &Settings, url: &str) -> Option<String> {
    let driver = match start_session(settings).await {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Failed to start a browser session: {:?}", e);
            return None;
        }
    };

    let rendered = render_page(&driver, settings, url).await;

    if let Err(e) = driver.quit().await {
        log::warn!("Failed to close the browser session: {:?}", e);
    }

    match rendered {
        Ok(html) => Some(html),
        Err(e) => {
            log::error!("Failed to render {}: {:?}", url, e);
            None
        }
    }
}

async fn start_session(settings: &Settings) -> WebDriverResult<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    caps.set_headless()?;
    caps.set_no_sandbox()?;
    caps.set_disable_gpu()?;
    caps.set_disable_dev_shm_usage()?;
    WebDriver::new(&settings.webdriver_url, caps).await
}

async fn render_page(
    driver: &WebDriver,
    settings: &Settings,
    url: &str,
) -> WebDriverResult<String> {
    driver.goto(url).await?;
    wait_for_page_load(driver, settings.page_load_timeout()).await?;

    // Non-fatal: a slow marker only costs us the structured date block.
    if !wait_for_marker(driver, settings.marker_timeout()).await {
        log::warn!(
            "Date marker did not appear within {}s on {}, continuing with the current page state",
            settings.marker_timeout_secs,
            url
        );
    }

    driver.source().await
}

// WebDriver has no network-idle event; bounded readyState polling is the
// closest equivalent. Hitting the bound is not an error.
async fn wait_for_page_load(driver: &WebDriver, bound: Duration) -> WebDriverResult<()> {
    let deadline = Instant::now() + bound;
    loop {
        let ret = driver.execute("return document.readyState", vec![]).await?;
        if ret.json().as_str() == Some("complete") {
            return Ok(());
        }
        if Instant::now() >= deadline {
            log::warn!("Page did not reach readyState 'complete' within the bound");
            return Ok(());
        }
        tokio::time::sleep(READY_STATE_POLL).await;
    }
}

async fn wait_for_marker(driver: &WebDriver, bound: Duration) -> bool {
    let deadline = Instant::now() + bound;
    loop {
        if driver.find(By::Css(DATE_MARKER_SELECTOR)).await.is_ok() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(MARKER_POLL).await;
    }
}
