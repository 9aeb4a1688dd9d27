// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog filtering: which film and cinema cards a filter keeps visible.

/// The film listing's combined filter state.
///
/// All three parts must match for a film to stay visible. An empty search
/// term or location means "any"; the category always applies because one
/// tab is always active.
#[derive(Debug, Clone, Default)]
pub struct FilmFilter {
    /// The active category tab, as a lowercase hyphenated slug.
    pub category: String,
    /// The search box content; matched case-insensitively as a substring
    /// of the title.
    pub search_term: String,
    /// The selected location; matched exactly, empty means any.
    pub location: String,
}

/// The cinema listing's combined filter state.
#[derive(Debug, Clone, Default)]
pub struct CinemaFilter {
    /// The search box content; matched case-insensitively as a substring
    /// of the cinema name.
    pub search_term: String,
    /// The selected location; matched case-insensitively, empty means any.
    pub location: String,
}

/// Decides whether a film stays visible under `filter`.
///
/// # Arguments
///
/// * `filter` - The combined filter state
/// * `category` - The film's category slug
/// * `title` - The film's display title
/// * `location` - The film's location tag
#[must_use]
pub fn film_matches(filter: &FilmFilter, category: &str, title: &str, location: &str) -> bool {
    if category != filter.category {
        return false;
    }
    if !filter.search_term.is_empty()
        && !title
            .to_lowercase()
            .contains(&filter.search_term.to_lowercase())
    {
        return false;
    }
    if !filter.location.is_empty() && location != filter.location {
        return false;
    }
    true
}

/// Decides whether a cinema stays visible under `filter`.
///
/// The empty search term matches every name, so a blank filter keeps all
/// cinemas visible.
#[must_use]
pub fn cinema_matches(filter: &CinemaFilter, name: &str, location: &str) -> bool {
    let matches_search: bool = name
        .to_lowercase()
        .contains(&filter.search_term.to_lowercase());
    let matches_location: bool =
        filter.location.is_empty() || location.to_lowercase() == filter.location.to_lowercase();
    matches_search && matches_location
}
