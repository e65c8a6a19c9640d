//! Test Helper Utilities
//!
//! Shared fixtures for testing tune-site: an on-disk site in a temp
//! directory and an in-memory source that counts fetches.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;
use tune_site::content::{ContentSource, FetchError};

pub const FIXTURE_YEAR: i32 = 2031;

pub const DISCOGRAPHY_JSON: &str = r#"{
  "albums": [
    {"id": "a1", "title": "X", "year": 2024, "description": "d",
     "tracks": [{"title": "T1", "duration": "3:00"}]}
  ],
  "singles": [
    {"id": "s1", "title": "Night <Drive>", "type": "Single", "image": "img/s1.jpg"}
  ]
}"#;

pub const BEATS_JSON: &str = r#"{
  "beats": [
    {"id": "b1", "title": "Low Sun", "genre": "Lo-Fi", "bpm": 84, "description": "warm",
     "price": {"lease": 25}, "purchaseLink": "https://shop.example/b1"}
  ],
  "samplePacks": [
    {"id": "p1", "title": "Dust Kit", "category": "Drums", "description": "vinyl drums",
     "price": "15", "purchaseLink": "https://shop.example/p1"}
  ]
}"#;

pub const MERCH_JSON: &str = r#"{
  "products": [
    {"id": "m1", "title": "Tour Tee", "category": "Apparel", "description": "black",
     "price": 30, "purchaseLink": "https://shop.example/m1"}
  ]
}"#;

pub const PROJECTS_JSON: &str = r#"{
  "featuredProjects": [
    {"id": "f1", "title": "Short Film", "type": "Score", "description": "original score"}
  ],
  "collaborations": [
    {"id": "c1", "title": "Duet", "type": "Feature", "description": "guest verse"}
  ]
}"#;

pub const SITE_JSON: &str = r#"{
  "artist": {
    "name": "Tune Eternal",
    "bio": {"short": "Lead", "full": ["One", "Two"], "influences": "Tape & dust"},
    "image": ""
  },
  "stats": [{"value": "12", "label": "Releases"}, {"value": 300, "label": "Shows"}],
  "social": {
    "soundcloud": "https://soundcloud.example/te",
    "youtube": "https://youtube.example/te",
    "instagram": "https://instagram.example/te"
  }
}"#;

pub const HEADER_HTML: &str = r#"<header class="header"><nav><a href="/">Home</a></nav></header>"#;
pub const FOOTER_HTML: &str =
    r#"<footer class="footer"><p>&copy; <span id="copyright-year">2000</span> Tune Eternal</p></footer>"#;

fn shell(title: &str, sections: &[&str]) -> String {
    let containers: String = sections
        .iter()
        .map(|slot| format!(r#"<div class="section" data-content="{}"><p>Loading</p></div>"#, slot))
        .collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>{}</title></head><body><div id="header-placeholder"></div><main>{}</main><div id="footer-placeholder"></div></body></html>"#,
        title, containers
    )
}

/// Page shells keyed by site path
pub fn fixture_pages() -> Vec<(&'static str, String)> {
    vec![
        ("index.html", shell("Home", &["latest-release", "tracks"])),
        ("pages/discography.html", shell("Discography", &["albums", "singles"])),
        ("pages/beats.html", shell("Beats", &["beats", "packs"])),
        ("pages/merch.html", shell("Merch", &["products"])),
        ("pages/other-projects.html", shell("Projects", &["featured", "collabs"])),
        ("pages/about.html", shell("About", &["artist-image", "bio", "stats"])),
        ("pages/contact.html", shell("Contact", &["platform-links"])),
        ("pages/press.html", shell("Press", &[])),
    ]
}

/// Every file of the fixture site keyed by site path
pub fn fixture_files() -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = fixture_pages()
        .into_iter()
        .map(|(path, html)| (path.to_string(), html))
        .collect();
    files.extend(
        [
            ("components/hamburger_nav.html", HEADER_HTML),
            ("components/footer.html", FOOTER_HTML),
            ("data/discography.json", DISCOGRAPHY_JSON),
            ("data/beats.json", BEATS_JSON),
            ("data/merch.json", MERCH_JSON),
            ("data/projects.json", PROJECTS_JSON),
            ("data/site.json", SITE_JSON),
            ("css/style.css", "body { margin: 0; }\n"),
        ]
        .into_iter()
        .map(|(path, body)| (path.to_string(), body.to_string())),
    );
    files
}

pub fn write_fixture_site(root: &Path) {
    for (path, body) in fixture_files() {
        let file = root.join(&path);
        std::fs::create_dir_all(file.parent().expect("fixture file has a parent")).unwrap();
        std::fs::write(file, body).unwrap();
    }
}

/// Fixture site in a fresh temp directory
pub fn fixture_site() -> TempDir {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    write_fixture_site(dir.path());
    dir
}

/// In-memory source that records every fetch
#[derive(Default)]
pub struct CountingSource {
    files: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    delay: Option<Duration>,
    fetches: Mutex<Vec<String>>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source serving the whole fixture site
    pub fn fixture() -> Self {
        fixture_files()
            .into_iter()
            .fold(Self::new(), |source, (path, body)| {
                source.with_file(&format!("/{}", path), &body)
            })
    }

    pub fn with_file(mut self, path: &str, body: &str) -> Self {
        self.files.insert(path.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn without_file(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    /// Answer `path` with a failure status
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.statuses.insert(path.to_string(), status);
        self
    }

    /// Hold every fetch open for `delay` so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.fetches.lock().unwrap().push(path.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(status) = self.statuses.get(path) {
            return Err(FetchError::Status(*status));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}
