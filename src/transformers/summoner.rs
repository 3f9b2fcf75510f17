// Summoner DTO to client type

use crate::dto::SummonerDto;
use crate::error::{NashorError, Result};
use crate::pipeline::{DataTransformer, PipeValue, TypeTag};
use crate::types::Summoner;

pub struct SummonerTransformer;

impl SummonerTransformer {
    fn convert(dto: SummonerDto) -> Summoner {
        Summoner {
            puuid: dto.puuid,
            id: dto.id,
            level: dto.summoner_level,
            profile_icon_id: dto.profile_icon_id,
            revision_date: dto.revision_date,
        }
    }
}

impl DataTransformer for SummonerTransformer {
    fn name(&self) -> String {
        "SummonerTransformer".to_string()
    }

    fn transforms(&self) -> Vec<(TypeTag, TypeTag)> {
        vec![(TypeTag::of::<SummonerDto>(), TypeTag::of::<Summoner>())]
    }

    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue> {
        if from == TypeTag::of::<SummonerDto>() && to == TypeTag::of::<Summoner>() {
            let dto = value
                .downcast::<SummonerDto>()
                .map_err(|_| NashorError::parse("expected SummonerDto"))?;
            return Ok(Box::new(Self::convert(*dto)));
        }
        Err(NashorError::no_route(format!(
            "SummonerTransformer cannot transform {} -> {}",
            from.name(),
            to.name()
        )))
    }
}
