//! Blocking HTTP client for webpbn.com.

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::Url;

use super::{ClientConfig, RepositoryClient};
use crate::error::{Error, Result};
use crate::model::PuzzleId;
use crate::size::SizeClass;

/// Repository client talking to webpbn.com over HTTP.
///
/// # Example
///
/// ```no_run
/// use nonofetch::client::{RepositoryClient, WebpbnClient};
/// use nonofetch::SizeClass;
///
/// let client = WebpbnClient::new()?;
/// let id = client.random_id(SizeClass::Small)?;
/// let export = client.fetch_export(id)?;
/// # Ok::<(), nonofetch::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WebpbnClient {
    http: Client,
    config: ClientConfig,
}

impl WebpbnClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn post(&self, path: &str, form: &[(&str, String)]) -> Result<Response> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self.http.post(&url).form(form).send()?.error_for_status()?;
        Ok(response)
    }
}

impl RepositoryClient for WebpbnClient {
    fn random_id(&self, size: SizeClass) -> Result<PuzzleId> {
        let form = [
            ("sid", String::new()),
            ("go", "1".to_string()),
            ("psize", size.code().to_string()),
            ("pcolor", "1".to_string()),
            ("pmulti", "1".to_string()),
            ("pguess", "1".to_string()),
        ];
        let response = self.post("random.cgi", &form)?;
        id_from_url(response.url())
    }

    fn fetch_export(&self, id: PuzzleId) -> Result<String> {
        let form = [
            ("go", "1".to_string()),
            ("sid", String::new()),
            ("id", id.to_string()),
            ("xml_clue", "on".to_string()),
            ("xml_soln", "on".to_string()),
            ("ss_soln", "on".to_string()),
            ("sg_clue", "on".to_string()),
            ("sg_soln", "on".to_string()),
            ("fmt", "mk".to_string()),
        ];
        let path = format!("export.cgi/webpbn{:06}.mk", id.get());
        Ok(self.post(&path, &form)?.text()?)
    }

    fn fetch_metadata(&self, id: PuzzleId) -> Result<String> {
        let form = [("id", id.to_string())];
        Ok(self.post("XMLpuz.cgi", &form)?.text()?)
    }
}

/// Read the puzzle identifier from the page the random pick redirected to.
fn id_from_url(url: &Url) -> Result<PuzzleId> {
    let (_, value) = url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .ok_or_else(|| Error::Transport(format!("random pick landed on {} without an id", url)))?;

    value
        .parse()
        .map_err(|_| Error::Transport(format!("random pick returned invalid id {:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_redirect_url() {
        let url = Url::parse("https://webpbn.com/play.cgi?id=1792&sid=&go=1").unwrap();
        assert_eq!(id_from_url(&url).unwrap(), PuzzleId::new(1792));
    }

    #[test]
    fn test_id_missing_from_url() {
        let url = Url::parse("https://webpbn.com/random.cgi").unwrap();
        assert!(matches!(id_from_url(&url), Err(Error::Transport(_))));
    }

    #[test]
    fn test_id_not_numeric() {
        let url = Url::parse("https://webpbn.com/play.cgi?id=abc").unwrap();
        assert!(matches!(id_from_url(&url), Err(Error::Transport(_))));
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ClientConfig::new().with_base_url("http://127.0.0.1:9");
        let client = WebpbnClient::with_config(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
