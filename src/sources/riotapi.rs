// Riot API source - remote HTTP endpoints behind the credential
//
// No retry and no rate limiting here: non-success statuses surface as
// ApiStatus errors and the caller decides what to do.

use crate::data::Region;
use crate::dto::{ChampionMasteriesDto, ChampionRotationDto, MatchDto, SummonerDto};
use crate::error::{NashorError, Result};
use crate::pipeline::{self, DataSource, PipeMap, PipeValue, TypeTag};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Remote-API-backed source, parameterized by a resolved literal credential
pub struct RiotApi {
    client: reqwest::Client,
    api_key: String,
}

impl RiotApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NashorError::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    fn region(query: &PipeMap) -> Result<Region> {
        query
            .get_typed(pipeline::REGION)
            .copied()
            .ok_or_else(|| NashorError::missing_input("region"))
    }

    async fn get_summoner(&self, query: &PipeMap) -> Result<SummonerDto> {
        let host = Self::region(query)?.platform().host();
        let url = if let Some(puuid) = query.get_typed(pipeline::PUUID) {
            format!("https://{host}/lol/summoner/v4/summoners/by-puuid/{puuid}")
        } else if let Some(name) = query.get_typed(pipeline::SUMMONER_NAME) {
            format!("https://{host}/lol/summoner/v4/summoners/by-name/{name}")
        } else {
            return Err(NashorError::missing_input("puuid or summoner_name"));
        };
        self.fetch(&url).await
    }

    async fn get_masteries(&self, query: &PipeMap) -> Result<ChampionMasteriesDto> {
        let host = Self::region(query)?.platform().host();
        let puuid = query
            .get_typed(pipeline::PUUID)
            .ok_or_else(|| NashorError::missing_input("puuid"))?;
        let url =
            format!("https://{host}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}");
        self.fetch(&url).await
    }

    async fn get_rotation(&self, query: &PipeMap) -> Result<ChampionRotationDto> {
        let host = Self::region(query)?.platform().host();
        let url = format!("https://{host}/lol/platform/v3/champion-rotations");
        self.fetch(&url).await
    }

    async fn get_match(&self, query: &PipeMap) -> Result<MatchDto> {
        // Match endpoints route continentally, not per platform
        let host = Self::region(query)?.platform().regional_host();
        let match_id = query
            .get_typed(pipeline::MATCH_ID)
            .ok_or_else(|| NashorError::missing_input("match_id"))?;
        let url = format!("https://{host}/lol/match/v5/matches/{match_id}");
        self.fetch(&url).await
    }
}

#[async_trait]
impl DataSource for RiotApi {
    fn name(&self) -> String {
        "RiotAPI".to_string()
    }

    fn provides(&self) -> Vec<TypeTag> {
        vec![
            TypeTag::of::<SummonerDto>(),
            TypeTag::of::<ChampionMasteriesDto>(),
            TypeTag::of::<ChampionRotationDto>(),
            TypeTag::of::<MatchDto>(),
        ]
    }

    async fn get(&self, tag: TypeTag, query: &PipeMap) -> Result<PipeValue> {
        if tag == TypeTag::of::<SummonerDto>() {
            return Ok(Box::new(self.get_summoner(query).await?));
        }
        if tag == TypeTag::of::<ChampionMasteriesDto>() {
            return Ok(Box::new(self.get_masteries(query).await?));
        }
        if tag == TypeTag::of::<ChampionRotationDto>() {
            return Ok(Box::new(self.get_rotation(query).await?));
        }
        if tag == TypeTag::of::<MatchDto>() {
            return Ok(Box::new(self.get_match(query).await?));
        }
        Err(NashorError::no_route(format!(
            "RiotAPI does not provide {}",
            tag.name()
        )))
    }
}
