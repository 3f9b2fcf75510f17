// Champion rotation DTO to client type

use crate::dto::ChampionRotationDto;
use crate::error::{NashorError, Result};
use crate::pipeline::{DataTransformer, PipeValue, TypeTag};
use crate::types::ChampionRotation;

pub struct ChampionTransformer;

impl ChampionTransformer {
    fn convert(dto: ChampionRotationDto) -> ChampionRotation {
        ChampionRotation {
            free_champions: dto.free_champion_ids,
            free_for_new_players: dto.free_champion_ids_for_new_players,
            max_new_player_level: dto.max_new_player_level,
        }
    }
}

impl DataTransformer for ChampionTransformer {
    fn name(&self) -> String {
        "ChampionTransformer".to_string()
    }

    fn transforms(&self) -> Vec<(TypeTag, TypeTag)> {
        vec![(
            TypeTag::of::<ChampionRotationDto>(),
            TypeTag::of::<ChampionRotation>(),
        )]
    }

    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue> {
        if from == TypeTag::of::<ChampionRotationDto>() && to == TypeTag::of::<ChampionRotation>() {
            let dto = value
                .downcast::<ChampionRotationDto>()
                .map_err(|_| NashorError::parse("expected ChampionRotationDto"))?;
            return Ok(Box::new(Self::convert(*dto)));
        }
        Err(NashorError::no_route(format!(
            "ChampionTransformer cannot transform {} -> {}",
            from.name(),
            to.name()
        )))
    }
}
