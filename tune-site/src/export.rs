//! Static export
//!
//! Walks the site directory, writes every routable page as rendered HTML and
//! copies all other files unchanged. Pages the route table does not know
//! are left out of the export.

use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{SiteError, SiteResult};
use crate::pages::{is_page_path, PageRenderer};

/// Counts from one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub rendered: usize,
    pub copied: usize,
    pub skipped: usize,
}

/// Export the site at `site_root` into `out_dir`
///
/// `out_dir` may live inside `site_root`; it is excluded from the walk.
pub async fn export_site(
    renderer: &PageRenderer,
    site_root: &Path,
    out_dir: &Path,
) -> SiteResult<ExportSummary> {
    if !site_root.is_dir() {
        return Err(SiteError::NotFound(site_root.display().to_string()));
    }

    tokio::fs::create_dir_all(out_dir).await?;
    let root = site_root.canonicalize()?;
    let out = out_dir.canonicalize()?;

    let mut summary = ExportSummary::default();
    for file in site_files(&root, &out) {
        let Ok(relative) = file.strip_prefix(&root) else {
            continue;
        };
        let page_path = site_path(relative);
        let target = out.join(relative);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        if is_page_path(&page_path) {
            if renderer.route(&page_path).is_none() {
                warn!("Skipping {}: no page route", page_path);
                summary.skipped += 1;
                continue;
            }
            let doc = renderer.render(&page_path).await?;
            tokio::fs::write(&target, doc.into_string()).await?;
            summary.rendered += 1;
        } else {
            tokio::fs::copy(&file, &target).await?;
            summary.copied += 1;
        }
        debug!("Exported {}", page_path);
    }

    info!(
        "Export complete: {} pages rendered, {} files copied, {} skipped",
        summary.rendered, summary.copied, summary.skipped
    );
    Ok(summary)
}

fn site_files(root: &Path, out: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.path() != out && !is_hidden(e));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => warn!("Error accessing entry: {}", e),
        }
    }
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

/// Site-absolute request path for a file relative to the root
fn site_path(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("/{}", segments.join("/"))
}
