//! Entity records mirrored from the library backend.
//!
//! Everything here is owned by the backend. The frontend only reads these
//! records into view state and builds [`NewCollection`] payloads.

pub mod formatting;

use serde::{Deserialize, Serialize};

pub use formatting::{derive_collection_id, initials, media_url};

/// Anything rendered as a keyed card.
///
/// Keys must be stable and unique within one list so re-renders can
/// reuse the right card.
pub trait Keyed {
    fn key(&self) -> String;
}

// ─────────────────────────────────────────────────────────────────────────────
// Games
// ─────────────────────────────────────────────────────────────────────────────

/// A game in the library (`GET /jogos`).
///
/// Only `id` is required. Display fields default when missing and any
/// other backend fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub imagem_capa: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub desenvolvedor: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Game {
    /// Name shown on cards. Unnamed records fall back to their id.
    pub fn display_name(&self) -> String {
        if self.nome.trim().is_empty() {
            format!("Game #{}", self.id)
        } else {
            self.nome.clone()
        }
    }
}

impl Keyed for Game {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

/// A user-defined collection (`GET /colecoes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub capa: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
}

impl Keyed for Collection {
    fn key(&self) -> String {
        self.id.clone()
    }
}

/// Body of `POST /colecoes`.
///
/// `capa` and `descricao` are always sent as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCollection {
    pub id: String,
    pub nome: String,
    pub capa: Option<String>,
    pub descricao: Option<String>,
}

impl NewCollection {
    /// Build a creation payload from a user-supplied name.
    ///
    /// Returns `None` for names that are empty after trimming.
    pub fn from_name(name: &str) -> Option<Self> {
        let nome = name.trim();
        if nome.is_empty() {
            return None;
        }
        Some(Self {
            id: derive_collection_id(nome),
            nome: nome.to_string(),
            capa: None,
            descricao: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_game_minimal_record() {
        let games: Vec<Game> = serde_json::from_value(json!([{ "id": 1, "nome": "Chess" }])).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].nome, "Chess");
        assert_eq!(games[0].imagem_capa, None);
        assert!(games[0].tags.is_empty());
        assert_eq!(games[0].key(), "1");
    }

    #[test]
    fn test_game_ignores_unknown_fields() {
        let game: Game = serde_json::from_value(json!({
            "id": 7,
            "nome": "Celeste",
            "caminho_executavel": "C:/Games/Celeste/Celeste.exe",
            "avaliacao": { "gameplay": 3 },
            "tags": ["platformer"]
        }))
        .unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(game.tags, vec!["platformer".to_string()]);
    }

    #[test]
    fn test_game_display_name_fallback() {
        let game: Game = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(game.display_name(), "Game #42");
    }

    #[test]
    fn test_collection_optional_fields() {
        let c: Collection = serde_json::from_value(json!({ "id": "rpg", "nome": "RPG" })).unwrap();
        assert_eq!(c.capa, None);
        assert_eq!(c.descricao, None);
        assert_eq!(c.key(), "rpg");
    }

    #[test]
    fn test_new_collection_wire_shape() {
        let body = NewCollection::from_name("Retro Hits").unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "id": "retro-hits", "nome": "Retro Hits", "capa": null, "descricao": null })
        );
    }

    #[test]
    fn test_new_collection_rejects_blank_names() {
        assert_eq!(NewCollection::from_name(""), None);
        assert_eq!(NewCollection::from_name("   \t"), None);
    }

    #[test]
    fn test_new_collection_trims_name() {
        let body = NewCollection::from_name("  Jogos de Terror ").unwrap();
        assert_eq!(body.nome, "Jogos de Terror");
        assert_eq!(body.id, "jogos-de-terror");
    }
}
