// Wire-shape DTOs, exactly as the Riot API and Data Dragon return them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Summoner, from summoner-v4
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub profile_icon_id: i32,
    /// Last modification time, epoch milliseconds
    pub revision_date: i64,
    pub summoner_level: i64,
}

/// One champion-mastery entry, from champion-mastery-v4
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i32,
    /// Epoch milliseconds
    pub last_play_time: i64,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    #[serde(default)]
    pub tokens_earned: i32,
}

/// Full mastery list for one player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionMasteriesDto(pub Vec<ChampionMasteryDto>);

/// Free-to-play rotation, from champion-v3
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRotationDto {
    pub free_champion_ids: Vec<i64>,
    pub free_champion_ids_for_new_players: Vec<i64>,
    pub max_new_player_level: i32,
}

/// Match, from match-v5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadataDto,
    pub info: MatchInfoDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    pub data_version: String,
    pub match_id: String,
    /// Participant PUUIDs
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub game_creation: i64,
    /// Seconds on current patches
    pub game_duration: i64,
    pub game_mode: String,
    pub game_version: String,
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub team_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub win: bool,
}

/// Version list, from Data Dragon `api/versions.json`, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionsDto(pub Vec<String>);

/// Champion static data, from Data Dragon `champion.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionListDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    pub version: String,
    /// Keyed by champion slug, e.g. "Aatrox"
    pub data: IndexMap<String, ChampionDataDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionDataDto {
    /// Champion slug
    pub id: String,
    /// Numeric champion id, as a string in the wire format
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
}
