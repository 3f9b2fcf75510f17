// Region and Platform enumerations
//
// Two views of the same game-server clusters: the player-facing region code
// and the platform identifier the API routes by. Every Region has exactly
// one Platform with the matching name, so both conversions are total.

use crate::error::NashorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player-facing region code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Tr,
    Ru,
    Pbe,
}

impl Region {
    /// Every region, in code order
    pub const ALL: &'static [Region] = &[
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Jp,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Tr,
        Region::Ru,
        Region::Pbe,
    ];

    /// Upper-case region code as players write it
    pub fn code(self) -> &'static str {
        match self {
            Region::Br => "BR",
            Region::Eune => "EUNE",
            Region::Euw => "EUW",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Oce => "OCE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Pbe => "PBE",
        }
    }

    /// The platform sharing this region's name
    pub fn platform(self) -> Platform {
        match self {
            Region::Br => Platform::Br1,
            Region::Eune => Platform::Eun1,
            Region::Euw => Platform::Euw1,
            Region::Jp => Platform::Jp1,
            Region::Kr => Platform::Kr,
            Region::Lan => Platform::La1,
            Region::Las => Platform::La2,
            Region::Na => Platform::Na1,
            Region::Oce => Platform::Oc1,
            Region::Tr => Platform::Tr1,
            Region::Ru => Platform::Ru,
            Region::Pbe => Platform::Pbe1,
        }
    }
}

impl FromStr for Region {
    type Err = NashorError;

    /// Matches the upper-case code; callers upper-case user input first
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.code() == s)
            .ok_or_else(|| NashorError::invalid_config(format!("unknown region '{s}'")))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Server platform identifier used for API routing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Na1,
    Oc1,
    Tr1,
    Ru,
    Pbe1,
}

impl Platform {
    /// Platform identifier as the API spells it
    pub fn id(self) -> &'static str {
        match self {
            Platform::Br1 => "BR1",
            Platform::Eun1 => "EUN1",
            Platform::Euw1 => "EUW1",
            Platform::Jp1 => "JP1",
            Platform::Kr => "KR",
            Platform::La1 => "LA1",
            Platform::La2 => "LA2",
            Platform::Na1 => "NA1",
            Platform::Oc1 => "OC1",
            Platform::Tr1 => "TR1",
            Platform::Ru => "RU",
            Platform::Pbe1 => "PBE1",
        }
    }

    /// Host serving platform-scoped endpoints
    pub fn host(self) -> String {
        format!("{}.api.riotgames.com", self.id().to_ascii_lowercase())
    }

    /// Continental route used by match endpoints
    pub fn regional_route(self) -> &'static str {
        match self {
            Platform::Br1 | Platform::La1 | Platform::La2 | Platform::Na1 | Platform::Pbe1 => {
                "americas"
            }
            Platform::Eun1 | Platform::Euw1 | Platform::Tr1 | Platform::Ru => "europe",
            Platform::Jp1 | Platform::Kr => "asia",
            Platform::Oc1 => "sea",
        }
    }

    /// Host serving region-scoped endpoints
    pub fn regional_host(self) -> String {
        format!("{}.api.riotgames.com", self.regional_route())
    }

    /// The region sharing this platform's name
    pub fn region(self) -> Region {
        match self {
            Platform::Br1 => Region::Br,
            Platform::Eun1 => Region::Eune,
            Platform::Euw1 => Region::Euw,
            Platform::Jp1 => Region::Jp,
            Platform::Kr => Region::Kr,
            Platform::La1 => Region::Lan,
            Platform::La2 => Region::Las,
            Platform::Na1 => Region::Na,
            Platform::Oc1 => Region::Oce,
            Platform::Tr1 => Region::Tr,
            Platform::Ru => Region::Ru,
            Platform::Pbe1 => Region::Pbe,
        }
    }
}

impl From<Region> for Platform {
    fn from(region: Region) -> Self {
        region.platform()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
