use async_trait::async_trait;

use super::PokeSource;
use crate::api::ApiError;
use crate::state::{DetailRecord, Listing, ListingEntry, NamedResource, Sprites, TypeSlot};

const SAMPLE_NAMES: [&str; 9] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
];

/// Snapshot of `pokemon?limit=9`
pub fn sample_listing() -> Listing {
    Listing {
        count: 1126,
        next: Some("https://pokeapi.co/api/v2/pokemon?offset=9&limit=9".to_string()),
        previous: None,
        results: SAMPLE_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| ListingEntry {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{}/", index + 1),
            })
            .collect(),
    }
}

/// Partial snapshot of `pokemon/1`
pub fn sample_detail() -> DetailRecord {
    DetailRecord {
        id: 1,
        name: "bulbasaur".to_string(),
        height: 7,
        weight: 69,
        types: vec![
            TypeSlot {
                slot: 1,
                type_info: NamedResource {
                    name: "grass".to_string(),
                    url: "https://pokeapi.co/api/v2/type/12/".to_string(),
                },
            },
            TypeSlot {
                slot: 2,
                type_info: NamedResource {
                    name: "poison".to_string(),
                    url: "https://pokeapi.co/api/v2/type/4/".to_string(),
                },
            },
        ],
        sprites: Sprites {
            front_default: Some(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
                    .to_string(),
            ),
        },
    }
}

/// Embedded sample data. Every detail lookup yields the bulbasaur record.
pub struct StaticSource;

#[async_trait]
impl PokeSource for StaticSource {
    async fn listing(&self, limit: u32) -> Result<Listing, ApiError> {
        let mut listing = sample_listing();
        listing.results.truncate(limit as usize);
        Ok(listing)
    }

    async fn detail(&self, _name: &str) -> Result<DetailRecord, ApiError> {
        Ok(sample_detail())
    }
}
