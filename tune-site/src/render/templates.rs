//! Record → HTML fragment templates
//!
//! Pure functions, one per record kind. Every record field goes through
//! [`Text`]; only the fixed icons and placeholders are trusted markup.
//! Cards carry `data-animate` for the reveal pass and `data-id` with the
//! record id.

use super::html::{Html, Text};
use super::placeholder::Placeholder;
use crate::content::models::{
    Album, Artist, Beat, Bio, Collaboration, MerchProduct, Project, SamplePack, SiteData, Single,
    Stat, Track,
};

const PLAY_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><polygon points="5,3 19,12 5,21"/></svg>"#;

const ARROW_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M5 12h14M12 5l7 7-7 7"/></svg>"#;

/// Link target for the home page release block (relative to the site root)
const DISCOGRAPHY_PAGE: &str = "pages/discography.html";

/// `<img>` for a record with artwork, otherwise the fallback graphic
pub fn artwork(image: Option<&str>, alt: &str, fallback: Html) -> Html {
    match image {
        Some(src) => Html::trusted(format!(
            r#"<img src="{}" alt="{}">"#,
            Text(src),
            Text(alt)
        )),
        None => fallback,
    }
}

/// Map a list through a template and concatenate
pub fn render_list<T>(items: &[T], template: impl Fn(&T) -> Html) -> Html {
    items.iter().map(template).collect()
}

pub fn album_card(album: &Album) -> Html {
    let image = artwork(album.artwork(), &album.title, Placeholder::Album.svg());
    Html::trusted(format!(
        r#"<article class="card" data-animate data-id="{id}"><div class="card_image">{image}</div><div class="card_content"><span class="card_label">{year}</span><h3 class="card_title">{title}</h3><p class="card_description">{description}</p></div></article>"#,
        id = Text(&album.id.to_string()),
        year = Text(&album.year.to_string()),
        title = Text(&album.title),
        description = Text(&album.description),
    ))
}

pub fn single_card(single: &Single) -> Html {
    let image = artwork(single.artwork(), &single.title, Placeholder::Square.svg());
    Html::trusted(format!(
        r#"<article class="card" data-animate data-id="{id}"><div class="card_image">{image}</div><div class="card_content"><span class="card_label">{kind}</span><h3 class="card_title">{title}</h3></div></article>"#,
        id = Text(&single.id.to_string()),
        kind = Text(&single.kind),
        title = Text(&single.title),
    ))
}

pub fn track_row(track: &Track) -> Html {
    Html::trusted(format!(
        r#"<div class="card card--track"><div class="card_image">{art}</div><div class="card_content"><h3 class="card_title">{title}</h3><span class="card_meta">{duration}</span></div><button class="btn btn--icon" aria-label="Play">{PLAY_ICON}</button></div>"#,
        art = Placeholder::Playable.square(60.0),
        title = Text(&track.title),
        duration = Text(&track.duration),
    ))
}

pub fn beat_card(beat: &Beat) -> Html {
    let image = artwork(beat.artwork(), &beat.title, Placeholder::Playable.square(180.0));
    Html::trusted(format!(
        r#"<div class="card card--horizontal" data-animate data-id="{id}"><div class="card_image">{image}</div><div class="card_content"><span class="card_label">{genre} / {bpm} BPM</span><h3 class="card_title">{title}</h3><p class="card_description">{description}</p></div><div class="card_actions"><span class="price">${price}</span><a href="{link}" class="btn btn--secondary btn--small">License</a></div></div>"#,
        id = Text(&beat.id.to_string()),
        genre = Text(&beat.genre),
        bpm = Text(&beat.bpm.to_string()),
        title = Text(&beat.title),
        description = Text(&beat.description),
        price = Text(&beat.price.lease.to_string()),
        link = Text(&beat.purchase_link),
    ))
}

pub fn sample_pack_card(pack: &SamplePack) -> Html {
    let image = artwork(pack.artwork(), &pack.title, Placeholder::Waveform.svg());
    shop_card(
        &pack.id.to_string(),
        image,
        &pack.category,
        &pack.title,
        &pack.description,
        &pack.price.to_string(),
        &pack.purchase_link,
        "Get Pack",
    )
}

pub fn merch_card(product: &MerchProduct) -> Html {
    let image = artwork(product.artwork(), &product.title, Placeholder::Apparel.svg());
    shop_card(
        &product.id.to_string(),
        image,
        &product.category,
        &product.title,
        &product.description,
        &product.price.to_string(),
        &product.purchase_link,
        "View",
    )
}

#[allow(clippy::too_many_arguments)]
fn shop_card(
    id: &str,
    image: Html,
    category: &str,
    title: &str,
    description: &str,
    price: &str,
    link: &str,
    action: &str,
) -> Html {
    Html::trusted(format!(
        r#"<article class="card" data-animate data-id="{id}"><div class="card_image">{image}</div><div class="card_content"><span class="card_label">{category}</span><h3 class="card_title">{title}</h3><p class="card_description">{description}</p><div class="card_footer"><span class="price">${price}</span><a href="{link}" class="btn btn--secondary btn--small">{action}</a></div></div></article>"#,
        id = Text(id),
        category = Text(category),
        title = Text(title),
        description = Text(description),
        price = Text(price),
        link = Text(link),
        action = Text(action),
    ))
}

/// Project card; `featured` selects the large variant
pub fn project_card(project: &Project, featured: bool) -> Html {
    let image = artwork(project.artwork(), &project.title, Placeholder::Video.svg());
    let class = if featured { "card card--featured" } else { "card" };
    Html::trusted(format!(
        r#"<article class="{class}" data-animate data-id="{id}"><div class="card_image">{image}<div class="card_overlay"><button class="btn-play" aria-label="Play">{PLAY_ICON}</button></div></div><div class="card_content"><span class="card_label">{kind}</span><h3 class="card_title">{title}</h3><p class="card_description">{description}</p></div></article>"#,
        id = Text(&project.id.to_string()),
        kind = Text(&project.kind),
        title = Text(&project.title),
        description = Text(&project.description),
    ))
}

pub fn collab_card(collab: &Collaboration) -> Html {
    let image = artwork(collab.artwork(), &collab.title, Placeholder::Square.svg());
    Html::trusted(format!(
        r#"<article class="card" data-animate data-id="{id}"><div class="card_image">{image}</div><div class="card_content"><span class="card_label">{kind}</span><h3 class="card_title">{title}</h3><p class="card_description">{description}</p></div></article>"#,
        id = Text(&collab.id.to_string()),
        kind = Text(&collab.kind),
        title = Text(&collab.title),
        description = Text(&collab.description),
    ))
}

pub fn stat_item(stat: &Stat) -> Html {
    Html::trusted(format!(
        r#"<div class="stat-item" data-animate><span class="stat-number">{value}</span><span class="stat-label">{label}</span></div>"#,
        value = Text(&stat.value.to_string()),
        label = Text(&stat.label),
    ))
}

/// Home page block for the most recent album
pub fn latest_release(album: &Album) -> Html {
    let image = match album.artwork() {
        Some(src) => Html::trusted(format!(
            r#"<img src="{}" alt="{}" class="home-release_img">"#,
            Text(src),
            Text(&album.title)
        )),
        None => Placeholder::Album.square(400.0),
    };

    Html::trusted(format!(
        r#"<div class="home-release_artwork">{image}</div><div class="home-release_info"><span class="home-release_label">Latest Release</span><h2 class="home-release_title">{title}</h2><p class="home-release_description">{description}</p><div class="home-release_actions"><a href="{DISCOGRAPHY_PAGE}" class="btn btn--primary">Listen Now</a><a href="{DISCOGRAPHY_PAGE}" class="link-arrow">View All Releases{ARROW_ICON}</a></div></div>"#,
        title = Text(&album.title),
        description = Text(&album.description),
    ))
}

pub fn artist_image(artist: &Artist) -> Html {
    match artist.portrait() {
        Some(src) => Html::trusted(format!(
            r#"<img src="{}" alt="{}" class="about-image_img">"#,
            Text(src),
            Text(&artist.name)
        )),
        None => Placeholder::Portrait.sized(500.0, 600.0),
    }
}

/// Lead paragraph, full paragraphs, then influences after a divider
pub fn bio_block(bio: &Bio) -> Html {
    let mut out = Html::trusted(format!(
        r#"<h2>About</h2><p class="text-lead">{}</p>"#,
        Text(&bio.short)
    ));

    for paragraph in &bio.full {
        out.push(&Html::trusted(format!("<p>{}</p>", Text(paragraph))));
    }

    if let Some(influences) = bio.influences.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push(&Html::trusted(format!(
            r#"<div class="divider divider--accent"></div><h3>Influences</h3><p>{}</p>"#,
            Text(influences)
        )));
    }

    out
}

struct Platform {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

/// Featured platforms, in display order
const PLATFORMS: [Platform; 3] = [
    Platform {
        key: "youtube",
        label: "YouTube",
        icon: r#"<svg viewBox="0 0 24 24" fill="currentColor" width="32" height="32"><rect x="3" y="5" width="18" height="14" rx="3" fill="none" stroke="currentColor" stroke-width="1.5"/><polygon points="10,8 16,12 10,16" fill="currentColor"/></svg>"#,
    },
    Platform {
        key: "bandcamp",
        label: "Bandcamp",
        icon: r#"<svg viewBox="0 0 24 24" fill="currentColor" width="32" height="32"><polygon points="4,17 10,7 20,7 14,17" fill="currentColor"/></svg>"#,
    },
    Platform {
        key: "soundcloud",
        label: "SoundCloud",
        icon: r#"<svg viewBox="0 0 24 24" fill="currentColor" width="32" height="32"><rect x="2" y="14" width="2" height="4" rx="1" fill="currentColor"/><rect x="6" y="10" width="2" height="8" rx="1" fill="currentColor"/><rect x="10" y="8" width="2" height="10" rx="1" fill="currentColor"/><rect x="14" y="6" width="2" height="12" rx="1" fill="currentColor"/><rect x="18" y="10" width="2" height="8" rx="1" fill="currentColor"/></svg>"#,
    },
];

/// Outbound links for the featured platforms the artist has a profile on
pub fn platform_links(site: &SiteData) -> Html {
    PLATFORMS
        .iter()
        .filter_map(|platform| {
            let url = site.social_link(platform.key)?;
            Some(Html::trusted(format!(
                r#"<a href="{url}" class="platform-link" target="_blank" rel="noopener"><span class="platform-link_icon">{icon}</span><span class="platform-link_label">{label}</span><span class="platform-link_arrow">{ARROW_ICON}</span></a>"#,
                url = Text(url),
                icon = platform.icon,
                label = platform.label,
            )))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::Scalar;

    fn album(image: Option<&str>) -> Album {
        Album {
            id: "a1".into(),
            title: "Night & Day".to_string(),
            year: Scalar::from(2024),
            description: "d".to_string(),
            image: image.map(str::to_string),
            tracks: Vec::new(),
        }
    }

    #[test]
    fn test_album_card_without_image_uses_placeholder() {
        let html = album_card(&album(None)).into_string();
        assert!(html.contains("placeholder-img--album"));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"data-animate data-id="a1""#));
        assert!(html.contains("Night &amp; Day"));
        assert!(html.contains(">2024<"));
    }

    #[test]
    fn test_album_card_with_image_has_single_img() {
        let html = album_card(&album(Some("/img/cover.jpg"))).into_string();
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"<img src="/img/cover.jpg""#));
        assert!(!html.contains("placeholder-img"));
    }

    #[test]
    fn test_empty_image_counts_as_missing() {
        let html = album_card(&album(Some(""))).into_string();
        assert!(html.contains("placeholder-img--album"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_fields_are_escaped() {
        let single = Single {
            id: "s\"1".into(),
            title: "<script>x</script>".to_string(),
            kind: "EP".to_string(),
            image: None,
        };
        let html = single_card(&single).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains(r#"data-id="s&quot;1""#));
        assert!(html.contains("placeholder-img--square"));
    }

    #[test]
    fn test_beat_card_price_and_link() {
        let beat: Beat = serde_json::from_value(serde_json::json!({
            "id": "b1", "title": "Drift", "genre": "Lo-Fi", "bpm": 85,
            "description": "chill", "price": {"lease": 25},
            "purchaseLink": "https://shop.example/b1?a=1&b=2"
        }))
        .unwrap();

        let html = beat_card(&beat).into_string();
        assert!(html.contains("Lo-Fi / 85 BPM"));
        assert!(html.contains(r#"<span class="price">$25</span>"#));
        assert!(html.contains(r#"href="https://shop.example/b1?a=1&amp;b=2""#));
        assert!(html.contains("placeholder-img--playable"));
        assert!(html.contains(r#"viewBox="0 0 180 180""#));
    }

    #[test]
    fn test_project_card_variants() {
        let project = Project {
            id: "p1".into(),
            title: "Score".to_string(),
            kind: "Film".to_string(),
            description: String::new(),
            image: None,
        };
        assert!(project_card(&project, true)
            .as_str()
            .starts_with(r#"<article class="card card--featured""#));
        assert!(project_card(&project, false)
            .as_str()
            .starts_with(r#"<article class="card" "#));
        assert!(project_card(&project, false)
            .as_str()
            .contains("placeholder-img--video"));
    }

    #[test]
    fn test_bio_block_sections() {
        let bio = Bio {
            short: "Lead".to_string(),
            full: vec!["One".to_string(), "Two".to_string()],
            influences: Some(String::new()),
        };
        let html = bio_block(&bio).into_string();
        assert!(html.contains(r#"<p class="text-lead">Lead</p>"#));
        assert!(html.contains("<p>One</p><p>Two</p>"));
        assert!(!html.contains("divider"));

        let with_influences = Bio {
            influences: Some("Jazz".to_string()),
            ..bio
        };
        assert!(bio_block(&with_influences).as_str().contains("<p>Jazz</p>"));
    }

    #[test]
    fn test_platform_links_fixed_order_and_filtering() {
        let site: SiteData = serde_json::from_value(serde_json::json!({
            "social": {
                "soundcloud": "https://sc.example",
                "youtube": "https://yt.example",
                "instagram": "https://ig.example"
            }
        }))
        .unwrap();

        let html = platform_links(&site).into_string();
        let yt = html.find("YouTube").unwrap();
        let sc = html.find("SoundCloud").unwrap();
        assert!(yt < sc);
        assert!(!html.contains("Bandcamp"));
        assert!(!html.contains("ig.example"));
        assert_eq!(html.matches(r#"rel="noopener""#).count(), 2);
    }
}
