// Client-facing types produced by the transformers

use serde::{Deserialize, Serialize};

/// A player account on one platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summoner {
    pub puuid: String,
    pub id: String,
    pub level: i64,
    pub profile_icon_id: i32,
    /// Last modification time, epoch milliseconds
    pub revision_date: i64,
}

/// Mastery progress on one champion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionMastery {
    pub champion_id: i64,
    pub level: i32,
    pub points: i32,
    pub points_since_last_level: i64,
    pub points_until_next_level: i64,
    pub tokens_earned: i32,
    /// Epoch milliseconds
    pub last_played: i64,
}

/// A player's full mastery list, highest points first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionMasteries {
    pub masteries: Vec<ChampionMastery>,
}

/// This week's free-to-play rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionRotation {
    pub free_champions: Vec<i64>,
    pub free_for_new_players: Vec<i64>,
    pub max_new_player_level: i32,
}

/// Static champion data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    /// Numeric champion id
    pub id: i64,
    /// Champion slug, e.g. "Aatrox"
    pub slug: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
}

/// All champions for one static-data version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champions {
    pub version: String,
    pub champions: Vec<Champion>,
}

/// A finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub duration_secs: i64,
    pub game_mode: String,
    pub game_version: String,
    pub queue_id: i32,
    pub participants: Vec<Participant>,
}

/// One player's line in a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub puuid: String,
    pub name: String,
    pub champion_id: i64,
    pub champion: String,
    pub team_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub won: bool,
}

/// Static-data versions, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Versions {
    pub versions: Vec<String>,
}

impl Versions {
    /// The newest version, when the list is non-empty
    pub fn latest(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }
}
