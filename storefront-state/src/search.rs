use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{Action, Store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub keyword: String,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetKeyword(String),
    SetResults(Vec<SearchResult>),
    Reset,
}

impl Action<SearchState> for SearchAction {
    fn reduce(self, state: &SearchState) -> SearchState {
        match self {
            SearchAction::SetKeyword(keyword) => SearchState {
                keyword,
                results: state.results.clone(),
            },
            SearchAction::SetResults(results) => SearchState {
                keyword: state.keyword.clone(),
                results,
            },
            SearchAction::Reset => SearchState::default(),
        }
    }
}

/// Lives in memory only.
pub type SearchStore = Store<SearchState, SearchAction>;

impl Default for SearchStore {
    fn default() -> Self {
        Store::new(SearchState::default())
    }
}
