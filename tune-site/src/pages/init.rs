//! Page initializers
//!
//! One initializer per route. Each loads the content it needs, writes every
//! section whose container the shell provides, then runs the reveal pass.
//! A failed load skips the page's sections without any visible error.

use tracing::debug;

use crate::content::ContentStore;
use crate::render::templates::{
    album_card, artist_image, beat_card, bio_block, collab_card, latest_release, merch_card,
    platform_links, project_card, render_list, sample_pack_card, single_card, stat_item, track_row,
};
use crate::render::Html;

use super::document::{Document, Slot};
use super::reveal::register_reveal_targets;
use super::routes::Route;

/// Tracks shown on the home page
const FEATURED_TRACK_COUNT: usize = 4;

/// Outcome of one initializer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Sections written, in render order
    pub rendered: Vec<Slot>,
    /// Elements newly registered by the reveal pass
    pub revealed: usize,
}

pub struct PageInit<'a> {
    store: &'a ContentStore,
}

impl<'a> PageInit<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    pub async fn run(&self, route: Route, doc: &mut Document) -> InitReport {
        let mut report = InitReport::default();

        match route {
            Route::Home => self.home(doc, &mut report).await,
            Route::Discography => self.discography(doc, &mut report).await,
            Route::Beats => self.beats(doc, &mut report).await,
            Route::Merch => self.merch(doc, &mut report).await,
            Route::Projects => self.projects(doc, &mut report).await,
            Route::About => self.about(doc, &mut report).await,
            Route::Contact => self.contact(doc, &mut report).await,
        }

        report.revealed = register_reveal_targets(doc);
        debug!(
            "Initialized {} page: {} sections, {} reveal targets",
            route,
            report.rendered.len(),
            report.revealed
        );
        report
    }

    async fn home(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(discography) = self.store.discography().await else {
            return;
        };
        let Some(latest) = discography.latest() else {
            return;
        };

        write(doc, report, Slot::LatestRelease, latest_release(latest));

        if !latest.tracks.is_empty() {
            let tracks: Html = latest
                .tracks
                .iter()
                .take(FEATURED_TRACK_COUNT)
                .map(track_row)
                .collect();
            write(doc, report, Slot::Tracks, tracks);
        }
    }

    async fn discography(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.discography().await else {
            return;
        };

        write(doc, report, Slot::Albums, render_list(&data.albums, album_card));
        write(doc, report, Slot::Singles, render_list(&data.singles, single_card));
    }

    async fn beats(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.beats().await else {
            return;
        };

        write(doc, report, Slot::Beats, render_list(&data.beats, beat_card));
        write(doc, report, Slot::Packs, render_list(&data.sample_packs, sample_pack_card));
    }

    async fn merch(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.merch().await else {
            return;
        };

        write(doc, report, Slot::Products, render_list(&data.products, merch_card));
    }

    async fn projects(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.projects().await else {
            return;
        };

        write(
            doc,
            report,
            Slot::Featured,
            render_list(&data.featured_projects, |p| project_card(p, true)),
        );
        write(doc, report, Slot::Collabs, render_list(&data.collaborations, collab_card));
    }

    async fn about(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.site_data().await else {
            return;
        };

        write(doc, report, Slot::ArtistImage, artist_image(&data.artist));
        if let Some(bio) = &data.artist.bio {
            write(doc, report, Slot::Bio, bio_block(bio));
        }
        write(doc, report, Slot::Stats, render_list(&data.stats, stat_item));
    }

    async fn contact(&self, doc: &mut Document, report: &mut InitReport) {
        let Some(data) = self.store.site_data().await else {
            return;
        };

        write(doc, report, Slot::PlatformLinks, platform_links(&data));
    }
}

/// Guard and skip: a shell without the container simply loses the section
fn write(doc: &mut Document, report: &mut InitReport, slot: Slot, fragment: Html) {
    if doc.fill(slot, &fragment) {
        report.rendered.push(slot);
    } else {
        debug!("No container for '{}', skipping", slot.marker());
    }
}
