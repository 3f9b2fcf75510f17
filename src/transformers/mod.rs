/// Stock transformers, one per data domain
pub mod champion;
pub mod championmastery;
pub mod matches;
pub mod staticdata;
pub mod summoner;

pub use champion::ChampionTransformer;
pub use championmastery::ChampionMasteryTransformer;
pub use matches::MatchTransformer;
pub use staticdata::StaticDataTransformer;
pub use summoner::SummonerTransformer;
