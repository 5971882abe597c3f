//! View state synchronization.
//!
//! Each view keeps a local copy of one backend list. That copy is a cache:
//! a successful read replaces it wholesale, a failed read leaves it alone.

use std::fmt;

use crate::Error;

/// Which list a view mirrors. Used for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Games,
    Collections,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Games => write!(f, "games"),
            EntityKind::Collections => write!(f, "collections"),
        }
    }
}

/// Apply the result of a list read to view state.
///
/// On success the list is replaced in backend order and `true` is returned.
/// On failure the error is logged and the list keeps its prior contents.
pub fn resync<T>(current: &mut Vec<T>, result: Result<Vec<T>, Error>, kind: EntityKind) -> bool {
    match result {
        Ok(items) => {
            tracing::debug!(%kind, count = items.len(), "List resynchronized");
            *current = items;
            true
        }
        Err(e) => {
            tracing::error!(%kind, error = %e, "Failed to fetch list");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salsi_types::{Game, Keyed};

    fn game(id: u64, nome: &str) -> Game {
        Game {
            id,
            nome: nome.to_string(),
            imagem_capa: None,
            descricao: None,
            desenvolvedor: None,
            studio: None,
            tags: Vec::new(),
        }
    }

    fn failure() -> Error {
        Error::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn test_success_replaces_in_order() {
        let mut state = vec![game(9, "Old")];
        let fetched = vec![game(2, "B"), game(1, "A"), game(3, "C")];

        assert!(resync(&mut state, Ok(fetched.clone()), EntityKind::Games));
        assert_eq!(state, fetched);
    }

    #[test]
    fn test_failure_keeps_prior_list() {
        let mut state = vec![game(1, "Chess"), game(2, "Go")];
        let before = state.clone();

        assert!(!resync(&mut state, Err(failure()), EntityKind::Games));
        assert_eq!(state, before);
    }

    #[test]
    fn test_first_failure_stays_empty() {
        let mut state: Vec<Game> = Vec::new();
        assert!(!resync(&mut state, Err(failure()), EntityKind::Games));
        assert!(state.is_empty());
    }

    #[test]
    fn test_success_with_empty_list_clears() {
        let mut state = vec![game(1, "Chess")];
        assert!(resync(&mut state, Ok(Vec::new()), EntityKind::Games));
        assert!(state.is_empty());
    }

    #[test]
    fn test_single_game_scenario_keys() {
        let mut state = Vec::new();
        resync(&mut state, Ok(vec![game(1, "Chess")]), EntityKind::Games);

        let keys: Vec<String> = state.iter().map(Keyed::key).collect();
        assert_eq!(keys, vec!["1".to_string()]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Games.to_string(), "games");
        assert_eq!(EntityKind::Collections.to_string(), "collections");
    }
}
