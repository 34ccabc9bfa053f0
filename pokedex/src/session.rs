use crate::Error;
use crate::evolution;
use crate::pokemon::{self, Name};
use crate::species;

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// A handle to the remote catalog.
///
/// Every call is a single attempt: no retries, no timeout and no caching.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base_url: Arc<Url>,
}

impl Session {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = base_url.as_ref();

        let url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::InvalidBaseUrl(base_url.to_owned()))?;

        log::info!("Catalog session started ({url})");

        Ok(Self {
            client: CLIENT.clone(),
            base_url: Arc::new(url),
        })
    }

    pub async fn fetch_pokemon(&self, name: &Name) -> Result<pokemon::Response, Error> {
        self.get(self.endpoint("pokemon", name.as_str())).await
    }

    pub async fn fetch_species(&self, name: &Name) -> Result<species::Response, Error> {
        self.get(self.endpoint("pokemon-species", name.as_str()))
            .await
    }

    pub async fn fetch_evolution_chain(
        &self,
        chain: &evolution::Id,
    ) -> Result<evolution::Response, Error> {
        self.get(self.endpoint("evolution-chain", chain.as_str()))
            .await
    }

    /// Appends `resource/key` to the base URL, encoding both as path segments.
    fn endpoint(&self, resource: &str, key: &str) -> Url {
        let mut url = Url::clone(&self.base_url);

        // Checked by `Session::new`
        if let Ok(mut segments) = url.path_segments_mut() {
            let _ = segments.pop_if_empty().push(resource).push(key);
        }

        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        log::info!("Fetching: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response.json().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("Default base URL is valid")
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Build reqwest client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_to_base_path() {
        let session = Session::default();

        assert_eq!(
            session.endpoint("pokemon", "pikachu").as_str(),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let session = Session::new("http://localhost:8080/api/v2/").expect("valid url");

        assert_eq!(
            session.endpoint("evolution-chain", "67").as_str(),
            "http://localhost:8080/api/v2/evolution-chain/67"
        );
    }

    #[test]
    fn endpoint_encodes_key_as_one_segment() {
        let session = Session::default();
        let name = Name::parse("pikachu?x/y").expect("valid name");

        assert_eq!(
            session.endpoint("pokemon", name.as_str()).as_str(),
            "https://pokeapi.co/api/v2/pokemon/pikachu%3Fx%2Fy"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            Session::new("not a url"),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Session::new("mailto:ash@example.com"),
            Err(Error::InvalidBaseUrl(_))
        ));
    }
}
