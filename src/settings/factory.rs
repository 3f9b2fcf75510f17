// Default pipeline assembly

use crate::pipeline::{DataPipeline, DataSource, DataTransformer};
use crate::sources::{DataDragon, RiotApi};
use crate::transformers::{
    ChampionMasteryTransformer, ChampionTransformer, MatchTransformer, StaticDataTransformer,
    SummonerTransformer,
};

/// Assemble the default pipeline: the Riot API and Data Dragon sources plus
/// the five stock transformers. Expects an already resolved literal
/// credential; environment lookups happen in [`Settings`](super::Settings).
///
/// When `verbose`, prints every declared provided type and transform pair.
/// The report is diagnostic only and has no effect on pipeline behavior.
pub fn create_default_pipeline(api_key: &str, verbose: bool) -> DataPipeline {
    let sources: Vec<Box<dyn DataSource>> = vec![
        Box::new(RiotApi::new(api_key)),
        Box::new(DataDragon::new()),
    ];
    let transformers: Vec<Box<dyn DataTransformer>> = vec![
        Box::new(StaticDataTransformer),
        Box::new(ChampionTransformer),
        Box::new(ChampionMasteryTransformer),
        Box::new(SummonerTransformer),
        Box::new(MatchTransformer),
    ];

    if verbose {
        for source in &sources {
            for tag in source.provides() {
                println!("Provides: {} ({})", tag.name(), source.name());
            }
        }
        for transformer in &transformers {
            for (from, to) in transformer.transforms() {
                println!(
                    "Transformer: {} -> {} ({})",
                    from.name(),
                    to.name(),
                    transformer.name()
                );
            }
        }
        println!();
    }

    DataPipeline::new(sources, transformers)
}
