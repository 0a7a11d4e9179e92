//! Typed views of the PokeAPI resources consumed by the pipeline
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! source payloads is ignored during deserialization.

use serde::Deserialize;

/// A `{name, url}` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub url: String,
}

/// One bounded page of the entity listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListingPage {
    pub results: Vec<NamedRef>,
}

/// The full per-entity detail resource
#[derive(Debug, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    /// Source unit: hectograms
    pub weight: u32,
    /// Source unit: decimeters
    pub height: u32,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub species: NamedRef,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedRef,
}

/// The per-type resource; only the damage relations are read
#[derive(Debug, Deserialize)]
pub struct TypeResource {
    pub damage_relations: DamageRelations,
}

/// Raw damage-relation lists as served per type.
///
/// Both effectiveness variants are computed from this one shape: the
/// detailed variant reads the three `*_damage_from` lists, the simple
/// variant reads `double_damage_to` and `double_damage_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedRef>,
}

/// The per-move resource
#[derive(Debug, Deserialize)]
pub struct MoveResource {
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
    #[serde(default)]
    pub flavor_text_entries: Vec<MoveFlavorText>,
}

#[derive(Debug, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedRef,
}

/// The per-species resource
#[derive(Debug, Deserialize)]
pub struct SpeciesResource {
    pub name: String,
    pub evolves_from_species: Option<NamedRef>,
    #[serde(default)]
    pub flavor_text_entries: Vec<SpeciesFlavorText>,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesFlavorText {
    pub flavor_text: String,
    pub language: NamedRef,
    pub version: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_resource_deserializes_nested_sprites() {
        let json = serde_json::json!({
            "id": 1,
            "name": "bulbasaur",
            "weight": 69,
            "height": 7,
            "sprites": {
                "other": {
                    "official-artwork": {
                        "front_default": "https://img.example/bulbasaur.png"
                    }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://api.example/type/12/" } }
            ],
            "species": { "name": "bulbasaur", "url": "https://api.example/pokemon-species/1/" },
            "moves": [
                { "move": { "name": "tackle", "url": "https://api.example/move/33/" } }
            ]
        });

        let pokemon: PokemonResource = serde_json::from_value(json).unwrap();
        assert_eq!(pokemon.id, 1);
        assert_eq!(
            pokemon.sprites.other.official_artwork.front_default.as_deref(),
            Some("https://img.example/bulbasaur.png")
        );
        assert_eq!(pokemon.types[0].type_ref.name, "grass");
        assert_eq!(pokemon.moves[0].move_ref.name, "tackle");
    }

    #[test]
    fn test_missing_sprites_default_to_no_image() {
        let json = serde_json::json!({
            "id": 132,
            "name": "ditto",
            "weight": 40,
            "height": 3,
            "types": [
                { "type": { "name": "normal", "url": "https://api.example/type/1/" } }
            ],
            "species": { "name": "ditto", "url": "https://api.example/pokemon-species/132/" }
        });

        let pokemon: PokemonResource = serde_json::from_value(json).unwrap();
        assert!(pokemon.sprites.other.official_artwork.front_default.is_none());
        assert!(pokemon.moves.is_empty());
    }

    #[test]
    fn test_species_resource_without_predecessor() {
        let json = serde_json::json!({
            "name": "bulbasaur",
            "evolves_from_species": null,
            "flavor_text_entries": [],
            "genera": []
        });

        let species: SpeciesResource = serde_json::from_value(json).unwrap();
        assert!(species.evolves_from_species.is_none());
    }
}
