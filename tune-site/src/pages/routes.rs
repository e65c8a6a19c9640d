//! Route table
//!
//! Maps a request path to the page initializer that renders it. Built once
//! at startup. Matching is on the lowercased path, entries are tried in
//! order, and the first match wins. Paths that match no entry and are not
//! the home page resolve to `None`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Discography,
    Beats,
    Merch,
    Projects,
    About,
    Contact,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Discography => "discography",
            Route::Beats => "beats",
            Route::Merch => "merch",
            Route::Projects => "projects",
            Route::About => "about",
            Route::Contact => "contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Section pages in precedence order; home is checked last
const SECTIONS: [(&[&str], Route); 6] = [
    (&["discography"], Route::Discography),
    (&["beats", "packs"], Route::Beats),
    (&["merch"], Route::Merch),
    (&["other-projects", "projects"], Route::Projects),
    (&["about"], Route::About),
    (&["contact"], Route::Contact),
];

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(&'static [&'static str], Route)>,
}

impl RouteTable {
    pub fn standard() -> Self {
        Self {
            entries: SECTIONS.to_vec(),
        }
    }

    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = path.to_lowercase();

        let section = self
            .entries
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| path.contains(p)))
            .map(|(_, route)| *route);
        if section.is_some() {
            return section;
        }

        if path.is_empty() || path.ends_with('/') || path.ends_with("index.html") {
            return Some(Route::Home);
        }
        None
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
