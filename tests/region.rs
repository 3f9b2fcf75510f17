// Region and Platform mapping tests
use nashor::{Platform, Region};
use std::str::FromStr;

#[test]
fn every_code_parses_back_to_its_region() {
    for &region in Region::ALL {
        assert_eq!(Region::from_str(region.code()).unwrap(), region);
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert!(Region::from_str("MOON").is_err());
    assert!(Region::from_str("").is_err());
}

#[test]
fn region_platform_pairing_is_total_and_inverse() {
    for &region in Region::ALL {
        assert_eq!(region.platform().region(), region);
    }
}

#[test]
fn platform_hosts() {
    assert_eq!(Platform::Na1.host(), "na1.api.riotgames.com");
    assert_eq!(Platform::Euw1.host(), "euw1.api.riotgames.com");
    assert_eq!(Platform::Kr.host(), "kr.api.riotgames.com");
}

#[test]
fn regional_routes() {
    assert_eq!(Platform::Na1.regional_route(), "americas");
    assert_eq!(Platform::Euw1.regional_route(), "europe");
    assert_eq!(Platform::Kr.regional_route(), "asia");
    assert_eq!(Platform::Oc1.regional_route(), "sea");
    assert_eq!(Platform::Na1.regional_host(), "americas.api.riotgames.com");
}

#[test]
fn serde_uses_upper_case_codes() {
    let region: Region = serde_json::from_str("\"NA\"").unwrap();
    assert_eq!(region, Region::Na);
    assert_eq!(serde_json::to_string(&Region::Eune).unwrap(), "\"EUNE\"");

    let platform: Platform = serde_json::from_str("\"LA2\"").unwrap();
    assert_eq!(platform, Platform::La2);
}

#[test]
fn display_matches_codes() {
    assert_eq!(Region::Na.to_string(), "NA");
    assert_eq!(Platform::Na1.to_string(), "NA1");
}
