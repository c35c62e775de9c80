//! Static catalog matching

use crate::domain::entities::{NetworkDescriptor, SearchResult, Token};

/// Case-insensitive substring match across every network's catalog.
///
/// A token matches when its name, symbol or address contains `query`.
/// Results keep network order, then catalog order.
pub fn match_catalog(query: &str, networks: &[NetworkDescriptor]) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    let needle = needle.as_str();

    networks
        .iter()
        .flat_map(move |network| {
            network
                .tokens
                .iter()
                .filter(move |token| token.matches_lowercase(needle))
                .map(move |token| SearchResult::from_catalog(token.clone(), network))
        })
        .collect()
}

/// Name/symbol filter over a single network's token list.
///
/// This is the list view for the currently selected network; unlike
/// `match_catalog` it does not match on addresses. The query is used as
/// typed: an empty query returns the whole list, whitespace is not trimmed.
pub fn filter_network_tokens<'a>(query: &str, network: &'a NetworkDescriptor) -> Vec<&'a Token> {
    let needle = query.to_lowercase();

    network
        .tokens
        .iter()
        .filter(|token| {
            token.name.to_lowercase().contains(&needle)
                || token.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}
