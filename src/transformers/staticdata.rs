// Static-data DTOs to client types

use crate::dto::{ChampionListDto, VersionsDto};
use crate::error::{NashorError, Result};
use crate::pipeline::{DataTransformer, PipeValue, TypeTag};
use crate::types::{Champion, Champions, Versions};

pub struct StaticDataTransformer;

impl StaticDataTransformer {
    fn convert_versions(dto: VersionsDto) -> Versions {
        Versions { versions: dto.0 }
    }

    fn convert_champions(dto: ChampionListDto) -> Result<Champions> {
        let mut champions = Vec::with_capacity(dto.data.len());
        for (slug, data) in dto.data {
            // Data Dragon ships the numeric id as a string
            let id: i64 = data.key.parse().map_err(|_| {
                NashorError::parse(format!("non-numeric champion key '{}' for {slug}", data.key))
            })?;
            champions.push(Champion {
                id,
                slug: data.id,
                name: data.name,
                title: data.title,
                blurb: data.blurb,
                tags: data.tags,
            });
        }
        Ok(Champions {
            version: dto.version,
            champions,
        })
    }
}

impl DataTransformer for StaticDataTransformer {
    fn name(&self) -> String {
        "StaticDataTransformer".to_string()
    }

    fn transforms(&self) -> Vec<(TypeTag, TypeTag)> {
        vec![
            (TypeTag::of::<VersionsDto>(), TypeTag::of::<Versions>()),
            (TypeTag::of::<ChampionListDto>(), TypeTag::of::<Champions>()),
        ]
    }

    fn transform(&self, from: TypeTag, to: TypeTag, value: PipeValue) -> Result<PipeValue> {
        if from == TypeTag::of::<VersionsDto>() && to == TypeTag::of::<Versions>() {
            let dto = value
                .downcast::<VersionsDto>()
                .map_err(|_| NashorError::parse("expected VersionsDto"))?;
            return Ok(Box::new(Self::convert_versions(*dto)));
        }
        if from == TypeTag::of::<ChampionListDto>() && to == TypeTag::of::<Champions>() {
            let dto = value
                .downcast::<ChampionListDto>()
                .map_err(|_| NashorError::parse("expected ChampionListDto"))?;
            return Ok(Box::new(Self::convert_champions(*dto)?));
        }
        Err(NashorError::no_route(format!(
            "StaticDataTransformer cannot transform {} -> {}",
            from.name(),
            to.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ChampionDataDto;
    use indexmap::IndexMap;

    #[test]
    fn parses_numeric_champion_keys() {
        let mut data = IndexMap::new();
        data.insert(
            "Aatrox".to_string(),
            ChampionDataDto {
                id: "Aatrox".to_string(),
                key: "266".to_string(),
                name: "Aatrox".to_string(),
                title: "the Darkin Blade".to_string(),
                blurb: String::new(),
                tags: vec!["Fighter".to_string()],
            },
        );
        let dto = ChampionListDto {
            kind: "champion".to_string(),
            format: "standAloneComplex".to_string(),
            version: "14.1.1".to_string(),
            data,
        };
        let champions = StaticDataTransformer::convert_champions(dto).unwrap();
        assert_eq!(champions.version, "14.1.1");
        assert_eq!(champions.champions[0].id, 266);
        assert_eq!(champions.champions[0].slug, "Aatrox");
    }

    #[test]
    fn rejects_non_numeric_champion_key() {
        let mut data = IndexMap::new();
        data.insert(
            "Broken".to_string(),
            ChampionDataDto {
                id: "Broken".to_string(),
                key: "not-a-number".to_string(),
                name: "Broken".to_string(),
                title: String::new(),
                blurb: String::new(),
                tags: vec![],
            },
        );
        let dto = ChampionListDto {
            kind: "champion".to_string(),
            format: "standAloneComplex".to_string(),
            version: "14.1.1".to_string(),
            data,
        };
        assert!(StaticDataTransformer::convert_champions(dto).is_err());
    }
}
