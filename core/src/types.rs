//! Catalog records, pagination envelopes and filter criteria.
//!
//! # Design
//! Records mirror the upstream wire schema field for field; Rust-side names
//! differ only where the wire name is a keyword or ambiguous (`type` becomes
//! `kind`, the episode's `episode` code becomes `episode_code`). The
//! mock-server crate defines its fixtures independently, so integration tests
//! catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Total number of matches across all pages.
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of a collection, in upstream order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// A name + URL pair pointing at a location. Never resolved locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationReference {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Subspecies; the upstream sends an empty string when there is none.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub origin: LocationReference,
    pub location: LocationReference,
    pub image: String,
    /// URLs of the episodes this character appears in.
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    /// URLs of the characters last seen here.
    pub residents: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Episode {
    pub id: i64,
    pub name: String,
    pub air_date: String,
    /// Season/episode code such as `S01E01`.
    #[serde(rename = "episode")]
    pub episode_code: String,
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Filter criteria for the character collection. All fields optional; an
/// empty filter lists the first page unfiltered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterFilter {
    pub name: Option<String>,
    /// `Alive`, `Dead` or `unknown`.
    pub status: Option<String>,
    pub species: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// `Female`, `Male`, `Genderless` or `unknown`.
    pub gender: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationFilter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub dimension: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeFilter {
    pub name: Option<String>,
    /// Episode code or code prefix, e.g. `S01E01` or `S02`.
    pub episode: Option<String>,
    pub page: Option<i64>,
}
