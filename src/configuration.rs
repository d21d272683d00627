use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub webdriver_url: String,
    pub http_timeout_secs: u64,
    pub page_load_timeout_secs: u64,
    pub marker_timeout_secs: u64,
    pub output_dir: String,
}

impl Settings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn marker_timeout(&self) -> Duration {
        Duration::from_secs(self.marker_timeout_secs)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("webdriver_url", "http://localhost:9515")?
        .set_default("http_timeout_secs", 10_u64)?
        .set_default("page_load_timeout_secs", 30_u64)?
        .set_default("marker_timeout_secs", 15_u64)?
        .set_default("output_dir", ".")?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("OPPSCRAPE"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::get_configuration;

    #[test]
    fn configuration_loads_with_defaults() {
        let settings = get_configuration().unwrap();

        assert!(!settings.webdriver_url.is_empty());
        assert_eq!(settings.marker_timeout_secs, 15);
        assert_eq!(settings.http_timeout_secs, 10);
    }
}
