/// Concrete data sources for the default pipeline
pub mod datadragon;
pub mod riotapi;

pub use datadragon::DataDragon;
pub use riotapi::RiotApi;
