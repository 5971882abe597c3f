//! The backend operations the views depend on.
//!
//! [`crate::ApiClient`] is the real implementation. The trait is the seam the
//! sync and creation logic is written against.

use salsi_types::{Collection, Game, NewCollection};

use crate::Error;

/// Filters accepted by `GET /jogos`.
///
/// The default query is a plain listing of the whole library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameQuery {
    /// Free-text search over names, tags, developer and description.
    pub text: String,
    /// Every tag must be present on a game for it to match.
    pub tags: Vec<String>,
}

impl GameQuery {
    /// Parse the search box contents. `#tag` words become tag filters and the
    /// remaining words form the text query.
    pub fn parse(input: &str) -> Self {
        let mut text = Vec::new();
        let mut tags = Vec::new();
        for word in input.split_whitespace() {
            match word.strip_prefix('#') {
                Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
                Some(_) => {}
                None => text.push(word),
            }
        }
        Self {
            text: text.join(" "),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty()
    }

    /// Query parameters, omitting empty filters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.text.is_empty() {
            params.push(("q", self.text.clone()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }
        params
    }
}

/// Read and create operations against the library backend.
#[allow(async_fn_in_trait)]
pub trait LibraryBackend {
    /// `GET /jogos`
    async fn list_games(&self, query: &GameQuery) -> Result<Vec<Game>, Error>;

    /// `GET /colecoes`
    async fn list_collections(&self) -> Result<Vec<Collection>, Error>;

    /// `POST /colecoes`. The response body is not used.
    async fn create_collection(&self, collection: &NewCollection) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(GameQuery::default().params().is_empty());
        assert!(GameQuery::parse("   ").is_empty());
    }

    #[test]
    fn test_parse_text_and_tags() {
        let q = GameQuery::parse("dark souls #rpg #souls-like");
        assert_eq!(q.text, "dark souls");
        assert_eq!(q.tags, vec!["rpg".to_string(), "souls-like".to_string()]);
        assert_eq!(
            q.params(),
            vec![
                ("q", "dark souls".to_string()),
                ("tags", "rpg,souls-like".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_ignores_bare_hash() {
        let q = GameQuery::parse("# metroid");
        assert_eq!(q.text, "metroid");
        assert!(q.tags.is_empty());
    }
}
