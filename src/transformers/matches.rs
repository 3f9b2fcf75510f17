// Match DTO to client type

use crate::dto::{MatchDto, ParticipantDto};
use crate::error::{NashorError, Result};
use crate::pipeline::{DataTransformer, PipeValue, TypeTag};
use crate::types::{Match, Participant};

pub struct MatchTransformer;

impl MatchTransformer {
    fn convert_participant(dto: ParticipantDto) -> Participant {
        Participant {
            puuid: dto.puuid,
            name: dto.riot_id_game_name,
            champion_id: dto.champion_id,
            champion: dto.champion_name,
            team_id: dto.team_id,
            kills: dto.kills,
            deaths: dto.deaths,
            assists: dto.assists,
            won: dto.win,
        }
    }

    fn convert(dto: MatchDto) -> Match {
        Match {
            id: dto.metadata.match_id,
            duration_secs: dto.info.game_duration,
            game_mode: dto.info.game_mode,
            game_version: dto.info.game_version,
            queue_id: dto.info.queue_id,
            participants: dto
                .info
                .participants
                .into_iter()
                .map(Self::convert_participant)
                .collect(),
        }
    }
}

impl DataTransformer for MatchTransformer {
    fn name(&self) -> String {
        "MatchTransformer".to_string()
    }

    fn transforms(&self) -> Vec<(TypeTag, TypeTag)> {
        vec![(TypeTag::of::<MatchDto>(), TypeTag::of::<Match>())]
    }

    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue> {
        if from == TypeTag::of::<MatchDto>() && to == TypeTag::of::<Match>() {
            let dto = value
                .downcast::<MatchDto>()
                .map_err(|_| NashorError::parse("expected MatchDto"))?;
            return Ok(Box::new(Self::convert(*dto)));
        }
        Err(NashorError::no_route(format!(
            "MatchTransformer cannot transform {} -> {}",
            from.name(),
            to.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{MatchInfoDto, MatchMetadataDto};

    #[test]
    fn converts_match_and_participants() {
        let dto = MatchDto {
            metadata: MatchMetadataDto {
                data_version: "2".to_string(),
                match_id: "NA1_1234567890".to_string(),
                participants: vec!["puuid-1".to_string()],
            },
            info: MatchInfoDto {
                game_creation: 1_700_000_000_000,
                game_duration: 1834,
                game_mode: "CLASSIC".to_string(),
                game_version: "14.1.555".to_string(),
                queue_id: 420,
                participants: vec![ParticipantDto {
                    puuid: "puuid-1".to_string(),
                    riot_id_game_name: "Player One".to_string(),
                    champion_id: 266,
                    champion_name: "Aatrox".to_string(),
                    team_id: 100,
                    kills: 7,
                    deaths: 2,
                    assists: 11,
                    win: true,
                }],
            },
        };
        let game = MatchTransformer::convert(dto);
        assert_eq!(game.id, "NA1_1234567890");
        assert_eq!(game.duration_secs, 1834);
        assert_eq!(game.participants.len(), 1);
        assert!(game.participants[0].won);
        assert_eq!(game.participants[0].champion, "Aatrox");
    }
}
