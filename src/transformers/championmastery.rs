// Champion mastery DTOs to client types

use crate::dto::{ChampionMasteriesDto, ChampionMasteryDto};
use crate::error::{NashorError, Result};
use crate::pipeline::{DataTransformer, PipeValue, TypeTag};
use crate::types::{ChampionMasteries, ChampionMastery};

pub struct ChampionMasteryTransformer;

impl ChampionMasteryTransformer {
    fn convert_one(dto: ChampionMasteryDto) -> ChampionMastery {
        ChampionMastery {
            champion_id: dto.champion_id,
            level: dto.champion_level,
            points: dto.champion_points,
            points_since_last_level: dto.champion_points_since_last_level,
            points_until_next_level: dto.champion_points_until_next_level,
            tokens_earned: dto.tokens_earned,
            last_played: dto.last_play_time,
        }
    }

    fn convert(dto: ChampionMasteriesDto) -> ChampionMasteries {
        let mut masteries: Vec<ChampionMastery> =
            dto.0.into_iter().map(Self::convert_one).collect();
        masteries.sort_by(|a, b| b.points.cmp(&a.points));
        ChampionMasteries { masteries }
    }
}

impl DataTransformer for ChampionMasteryTransformer {
    fn name(&self) -> String {
        "ChampionMasteryTransformer".to_string()
    }

    fn transforms(&self) -> Vec<(TypeTag, TypeTag)> {
        vec![(
            TypeTag::of::<ChampionMasteriesDto>(),
            TypeTag::of::<ChampionMasteries>(),
        )]
    }

    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue> {
        if from == TypeTag::of::<ChampionMasteriesDto>() && to == TypeTag::of::<ChampionMasteries>()
        {
            let dto = value
                .downcast::<ChampionMasteriesDto>()
                .map_err(|_| NashorError::parse("expected ChampionMasteriesDto"))?;
            return Ok(Box::new(Self::convert(*dto)));
        }
        Err(NashorError::no_route(format!(
            "ChampionMasteryTransformer cannot transform {} -> {}",
            from.name(),
            to.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mastery(champion_id: i64, points: i32) -> ChampionMasteryDto {
        ChampionMasteryDto {
            puuid: "puuid-1".to_string(),
            champion_id,
            champion_level: 5,
            champion_points: points,
            last_play_time: 1_700_000_000_000,
            champion_points_since_last_level: 0,
            champion_points_until_next_level: 0,
            tokens_earned: 0,
        }
    }

    #[test]
    fn sorts_by_points_descending() {
        let dto = ChampionMasteriesDto(vec![mastery(1, 100), mastery(2, 900), mastery(3, 500)]);
        let masteries = ChampionMasteryTransformer::convert(dto);
        let ids: Vec<i64> = masteries.masteries.iter().map(|m| m.champion_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
