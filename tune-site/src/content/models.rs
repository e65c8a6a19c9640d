//! Typed content records
//!
//! Mirrors the JSON files under `data/`. Keys are camelCase on disk. Lists
//! that are missing from a file deserialize as empty, and an `image` that is
//! missing, `null` or empty means the record has no artwork.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Display value that may be written as a JSON number or a string
/// (`"year": 2024`, `"value": "50+"`, `"price": 29.99`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

/// Artwork reference, treating an empty string as absent
fn artwork(image: &Option<String>) -> Option<&str> {
    image.as_deref().filter(|s| !s.trim().is_empty())
}

/// `discography.json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Discography {
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub singles: Vec<Single>,
}

impl Discography {
    /// The first album is the latest release
    pub fn latest(&self) -> Option<&Album> {
        self.albums.first()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Scalar,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    #[serde(default)]
    pub title: String,
    /// Display string such as `3:45`
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Single {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Single {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

/// `beats.json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeatCatalog {
    #[serde(default)]
    pub beats: Vec<Beat>,
    #[serde(default)]
    pub sample_packs: Vec<SamplePack>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Beat {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub bpm: Scalar,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: BeatPrice,
    #[serde(default)]
    pub purchase_link: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Beat {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BeatPrice {
    #[serde(default)]
    pub lease: Scalar,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePack {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Scalar,
    #[serde(default)]
    pub purchase_link: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl SamplePack {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

/// `merch.json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MerchCatalog {
    #[serde(default)]
    pub products: Vec<MerchProduct>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchProduct {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Scalar,
    #[serde(default)]
    pub purchase_link: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl MerchProduct {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

/// `projects.json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCatalog {
    #[serde(default)]
    pub featured_projects: Vec<Project>,
    #[serde(default)]
    pub collaborations: Vec<Collaboration>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Collaboration {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Collaboration {
    pub fn artwork(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

/// `site.json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteData {
    #[serde(default)]
    pub artist: Artist,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Platform key (`youtube`, `bandcamp`, ...) to profile URL
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl SiteData {
    /// Profile URL for a platform, ignoring blank entries
    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social
            .get(platform)
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Artist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: Option<Bio>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Artist {
    pub fn portrait(&self) -> Option<&str> {
        artwork(&self.image)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Bio {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub full: Vec<String>,
    #[serde(default)]
    pub influences: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Stat {
    #[serde(default)]
    pub value: Scalar,
    #[serde(default)]
    pub label: String,
}
