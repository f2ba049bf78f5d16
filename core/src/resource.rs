//! Per-kind table driving the generic gateway.
//!
//! Each record type names its collection path and its filter type; each
//! filter type lists its string facets in the fixed order they are sent
//! upstream. Adding a resource kind means adding one impl of each trait.

use serde::de::DeserializeOwned;

use crate::types::{Character, CharacterFilter, Episode, EpisodeFilter, Location, LocationFilter};

/// A record type exposed by one upstream collection endpoint.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Collection path relative to the upstream base URL. Singular, so it
    /// doubles as the kind's name in log lines and messages.
    const COLLECTION: &'static str;

    type Filter: QueryFilter + Send + Sync;

    fn id(&self) -> i64;
}

/// Filter criteria that can be rendered as upstream query parameters.
pub trait QueryFilter {
    /// String facets as `(parameter, value)` pairs in the kind's fixed order.
    /// Absent values keep their slot so the order never depends on which
    /// fields are set.
    fn facets(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Requested page. Always rendered last.
    fn page(&self) -> Option<i64>;
}

impl Resource for Character {
    const COLLECTION: &'static str = "character";
    type Filter = CharacterFilter;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Location {
    const COLLECTION: &'static str = "location";
    type Filter = LocationFilter;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Episode {
    const COLLECTION: &'static str = "episode";
    type Filter = EpisodeFilter;

    fn id(&self) -> i64 {
        self.id
    }
}

impl QueryFilter for CharacterFilter {
    fn facets(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("name", self.name.as_deref()),
            ("status", self.status.as_deref()),
            ("species", self.species.as_deref()),
            ("type", self.kind.as_deref()),
            ("gender", self.gender.as_deref()),
        ]
    }

    fn page(&self) -> Option<i64> {
        self.page
    }
}

impl QueryFilter for LocationFilter {
    fn facets(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("name", self.name.as_deref()),
            ("type", self.kind.as_deref()),
            ("dimension", self.dimension.as_deref()),
        ]
    }

    fn page(&self) -> Option<i64> {
        self.page
    }
}

impl QueryFilter for EpisodeFilter {
    fn facets(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("name", self.name.as_deref()),
            ("episode", self.episode.as_deref()),
        ]
    }

    fn page(&self) -> Option<i64> {
        self.page
    }
}
