//! Placeholder artwork for records without an image
//!
//! Every graphic is an inline SVG carrying the shared `placeholder-img` class
//! plus a per-category `placeholder-img--<name>` class. Output depends only
//! on the category and size.

use super::html::Html;

const CLASS: &str = "placeholder-img";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Vinyl-style disc
    Album,
    /// Inset square
    Square,
    /// Play triangle
    Playable,
    /// Shirt silhouette
    Apparel,
    /// Widescreen frame with play button
    Video,
    /// Head and shoulders
    Portrait,
    /// Bar waveform
    Waveform,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::Album,
        Placeholder::Square,
        Placeholder::Playable,
        Placeholder::Apparel,
        Placeholder::Video,
        Placeholder::Portrait,
        Placeholder::Waveform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Album => "album",
            Placeholder::Square => "square",
            Placeholder::Playable => "playable",
            Placeholder::Apparel => "apparel",
            Placeholder::Video => "video",
            Placeholder::Portrait => "portrait",
            Placeholder::Waveform => "waveform",
        }
    }

    /// Category class, e.g. `placeholder-img--album`
    pub fn marker_class(self) -> String {
        format!("{}--{}", CLASS, self.name())
    }

    /// Default viewBox as (width, height)
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Placeholder::Video => (800.0, 450.0),
            Placeholder::Portrait => (500.0, 600.0),
            _ => (400.0, 400.0),
        }
    }

    /// Graphic at its default size
    pub fn svg(self) -> Html {
        let (width, height) = self.default_size();
        self.sized(width, height)
    }

    /// Square graphic of edge `size`
    pub fn square(self, size: f64) -> Html {
        self.sized(size, size)
    }

    pub fn sized(self, w: f64, h: f64) -> Html {
        let body = match self {
            Placeholder::Album => format!(
                r##"<rect width="{w}" height="{h}" fill="#242424"/><circle cx="{cx}" cy="{cy}" r="{r1}" fill="#333" stroke="#444" stroke-width="2"/><circle cx="{cx}" cy="{cy}" r="{r2}" fill="#1a1a1a"/>"##,
                cx = w / 2.0,
                cy = h / 2.0,
                r1 = w * 0.3,
                r2 = w * 0.1,
            ),
            Placeholder::Square => format!(
                r##"<rect width="{w}" height="{h}" fill="#1a1a1a"/><rect x="{x}" y="{y}" width="{iw}" height="{ih}" fill="#333" rx="4"/>"##,
                x = w * 0.2,
                y = h * 0.2,
                iw = w * 0.6,
                ih = h * 0.6,
            ),
            Placeholder::Playable => format!(
                r##"<rect width="{w}" height="{h}" fill="#242424"/><polygon points="{x1},{y1} {x1},{y2} {x2},{y3}" fill="#444"/>"##,
                x1 = w * 0.38,
                y1 = h * 0.25,
                y2 = h * 0.75,
                x2 = w * 0.68,
                y3 = h * 0.5,
            ),
            Placeholder::Apparel => format!(
                r##"<rect width="{w}" height="{h}" fill="#1a1a1a"/><rect x="{bx}" y="{by}" width="{bw}" height="{bh}" fill="#333" rx="4"/><rect x="{nx}" y="{ny}" width="{nw}" height="{nh}" fill="#333"/>"##,
                bx = w * 0.3,
                by = h * 0.2,
                bw = w * 0.4,
                bh = h * 0.5,
                nx = w * 0.4,
                ny = h * 0.15,
                nw = w * 0.2,
                nh = h * 0.08,
            ),
            Placeholder::Video => format!(
                r##"<rect width="{w}" height="{h}" fill="#1a1a1a"/><rect x="{fx}" y="{fy}" width="{fw}" height="{fh}" fill="#333" rx="8"/><polygon points="{px1},{py1} {px1},{py2} {px2},{py3}" fill="#444"/>"##,
                fx = w * 0.35,
                fy = h * 0.3,
                fw = w * 0.3,
                fh = h * 0.4,
                px1 = w * 0.44,
                py1 = h * 0.4,
                py2 = h * 0.6,
                px2 = w * 0.56,
                py3 = h * 0.5,
            ),
            Placeholder::Portrait => format!(
                r##"<rect width="{w}" height="{h}" fill="#1a1a1a"/><circle cx="{cx}" cy="{hy}" r="{hr}" fill="#333"/><ellipse cx="{cx}" cy="{sy}" rx="{srx}" ry="{sry}" fill="#333"/>"##,
                cx = w / 2.0,
                hy = h * 0.35,
                hr = w * 0.2,
                sy = h * 0.75,
                srx = w * 0.24,
                sry = h * 0.25,
            ),
            Placeholder::Waveform => {
                let bars: [(f64, f64, f64, &str); 6] = [
                    (0.15, 0.4, 0.25, "#333"),
                    (0.28, 0.25, 0.45, "#444"),
                    (0.41, 0.3, 0.35, "#333"),
                    (0.54, 0.2, 0.55, "#444"),
                    (0.67, 0.35, 0.3, "#333"),
                    (0.80, 0.45, 0.15, "#444"),
                ];
                let mut body = format!(r##"<rect width="{w}" height="{h}" fill="#1a1a1a"/>"##);
                for (x, y, bar_h, fill) in bars {
                    body.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                        w * x,
                        h * y,
                        w * 0.08,
                        h * bar_h,
                        fill
                    ));
                }
                body
            }
        };

        Html::trusted(format!(
            r#"<svg class="{} {}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">{}</svg>"#,
            CLASS,
            self.marker_class(),
            w,
            h,
            body
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_is_marked() {
        for kind in Placeholder::ALL {
            let svg = kind.svg();
            assert!(svg.as_str().starts_with("<svg"));
            assert!(svg.as_str().contains(&kind.marker_class()));
            assert!(svg.as_str().contains("placeholder-img "));
            assert!(!svg.as_str().contains("<img"));
        }
    }

    #[test]
    fn test_deterministic_for_size() {
        assert_eq!(Placeholder::Waveform.square(120.0), Placeholder::Waveform.square(120.0));
        assert_ne!(Placeholder::Waveform.square(120.0), Placeholder::Waveform.square(400.0));
    }

    #[test]
    fn test_album_geometry() {
        let svg = Placeholder::Album.svg().into_string();
        assert!(svg.contains(r#"viewBox="0 0 400 400""#));
        assert!(svg.contains(r#"cx="200" cy="200" r="120""#));
        assert!(svg.contains(r#"r="40""#));
    }

    #[test]
    fn test_wide_defaults() {
        assert!(Placeholder::Video
            .svg()
            .as_str()
            .contains(r#"viewBox="0 0 800 450""#));
        assert!(Placeholder::Portrait
            .svg()
            .as_str()
            .contains(r#"viewBox="0 0 500 600""#));
    }
}
