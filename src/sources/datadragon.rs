// Data Dragon source - public static-data CDN, no credential required

use crate::dto::{ChampionListDto, VersionsDto};
use crate::error::{NashorError, Result};
use crate::pipeline::{self, DataSource, PipeMap, PipeValue, TypeTag};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

const DDRAGON_HOST: &str = "https://ddragon.leagueoflegends.com";
const DEFAULT_LOCALE: &str = "en_US";

/// Static-data source backed by the Data Dragon CDN
pub struct DataDragon {
    client: reqwest::Client,
}

impl DataDragon {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NashorError::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn get_versions(&self) -> Result<VersionsDto> {
        self.fetch(&format!("{DDRAGON_HOST}/api/versions.json")).await
    }

    /// Version from the query, or the newest published one
    async fn resolve_version(&self, query: &PipeMap) -> Result<String> {
        if let Some(version) = query.get_typed(pipeline::VERSION) {
            return Ok(version.clone());
        }
        let versions = self.get_versions().await?;
        versions
            .0
            .into_iter()
            .next()
            .ok_or_else(|| NashorError::parse("empty version list from Data Dragon"))
    }

    async fn get_champions(&self, query: &PipeMap) -> Result<ChampionListDto> {
        let version = self.resolve_version(query).await?;
        let locale = query
            .get_typed(pipeline::LOCALE)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOCALE);
        let url = format!("{DDRAGON_HOST}/cdn/{version}/data/{locale}/champion.json");
        self.fetch(&url).await
    }
}

impl Default for DataDragon {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for DataDragon {
    fn name(&self) -> String {
        "DataDragon".to_string()
    }

    fn provides(&self) -> Vec<TypeTag> {
        vec![
            TypeTag::of::<VersionsDto>(),
            TypeTag::of::<ChampionListDto>(),
        ]
    }

    async fn get(&self, tag: TypeTag, query: &PipeMap) -> Result<PipeValue> {
        if tag == TypeTag::of::<VersionsDto>() {
            return Ok(Box::new(self.get_versions().await?));
        }
        if tag == TypeTag::of::<ChampionListDto>() {
            return Ok(Box::new(self.get_champions(query).await?));
        }
        Err(NashorError::no_route(format!(
            "DataDragon does not provide {}",
            tag.name()
        )))
    }
}
