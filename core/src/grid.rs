//! Card grid layout for the collections view.

use salsi_types::{Collection, Keyed};

/// One cell of the collections grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot<'a> {
    /// The "add new" affordance. Always the first cell.
    CreateNew,
    Entity(&'a Collection),
}

impl GridSlot<'_> {
    /// Render key. The affordance uses a key no collection id can produce,
    /// since derived ids never contain whitespace.
    pub fn key(&self) -> String {
        match self {
            GridSlot::CreateNew => "create new".to_string(),
            GridSlot::Entity(c) => c.key(),
        }
    }
}

/// Lay out `collections` behind the creation affordance, in list order.
pub fn collection_grid(collections: &[Collection]) -> Vec<GridSlot<'_>> {
    std::iter::once(GridSlot::CreateNew)
        .chain(collections.iter().map(GridSlot::Entity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(id: &str) -> Collection {
        Collection {
            id: id.to_string(),
            nome: id.to_uppercase(),
            capa: None,
            descricao: None,
        }
    }

    #[test]
    fn test_empty_grid_has_only_affordance() {
        assert_eq!(collection_grid(&[]), vec![GridSlot::CreateNew]);
    }

    #[test]
    fn test_grid_is_n_plus_one_affordance_first() {
        let collections: Vec<_> = ["rpg", "retro-hits", "coop"].into_iter().map(collection).collect();
        let grid = collection_grid(&collections);

        assert_eq!(grid.len(), collections.len() + 1);
        assert_eq!(grid[0], GridSlot::CreateNew);
        let keys: Vec<String> = grid[1..].iter().map(GridSlot::key).collect();
        assert_eq!(keys, vec!["rpg", "retro-hits", "coop"]);
    }

    #[test]
    fn test_affordance_key_is_distinct() {
        let collections = vec![collection("create-new")];
        let grid = collection_grid(&collections);
        assert_ne!(grid[0].key(), grid[1].key());
    }
}
