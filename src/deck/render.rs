//! Page assembly
//!
//! The page is built top to bottom: head and style sheet, title block,
//! background panels, solution tabs, benefit/challenge cards, footer.

use tracing::debug;

use crate::assets::{bundle, embed_image, embed_required};
use crate::config::{Config, PageConfig};
use crate::error::Result;

use super::content::{
    Card, FeatureColumn, NoteKind, Phase, ARCHITECTURE_CAPTION, BENEFITS, CHALLENGES, DISCLAIMER,
    FOOTER_TITLE,
    FEATURE_COLUMNS, GUIDING_QUESTIONS, PHASES, PRESSURE_FACTORS, PRESSURE_INTRO, PRESSURE_OUTRO,
    PROCESS_STEPS, SUBTITLE, TABS, TECHNOLOGY_HEADER,
};
use super::markup::{escape_html, ordered_list, section_title, unordered_list};

/// Images resolved for a single render pass
struct Images {
    problem: String,
    questions: String,
    architecture: String,
}

/// Renders the complete page for one request
pub struct PageRenderer<'a> {
    config: &'a Config,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the page. Fails only if the architecture diagram cannot be read.
    pub fn render(&self) -> Result<String> {
        let assets = &self.config.assets;
        let images = Images {
            problem: embed_image(assets.problem_path()),
            questions: embed_image(assets.questions_path()),
            architecture: embed_required(assets.architecture_path())?,
        };

        let page = &self.config.page;
        let mut html = String::with_capacity(
            images.problem.len() + images.questions.len() + images.architecture.len() + 32 * 1024,
        );

        html.push_str(&self.head(&images));
        html.push_str("<body>\n<div class=\"block-container\">\n");
        html.push_str(&self.header());
        html.push_str(&self.background_section());
        html.push_str(&self.solution_section(&images.architecture));
        html.push_str(&self.considerations_section());
        if page.show_timeline {
            html.push_str(&timeline_section(PHASES));
        }
        if page.show_disclaimer {
            html.push_str(&format!(
                "<div class=\"disclaimer\">{}</div>\n",
                escape_html(DISCLAIMER)
            ));
        }
        html.push_str(&footer(page));
        html.push_str("</div>\n<script>\n");
        html.push_str(&bundle::script());
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(html)
    }

    fn head(&self, images: &Images) -> String {
        let page = &self.config.page;
        let favicon = favicon_uri(&page.icon);

        format!(
            "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n\
             <meta charset=\"UTF-8\"/>\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n\
             <title>{title}</title>\n\
             <link rel=\"icon\" href=\"{favicon}\"/>\n\
             <style>\n{css}</style>\n\
             <style>\n{backgrounds}</style>\n\
             </head>\n",
            title = escape_html(&page.title),
            favicon = escape_html(&favicon),
            css = bundle::stylesheet(),
            backgrounds = self.background_rules(images),
        )
    }

    /// Background-image rules for the two panels; an image that failed to
    /// embed gets no rule and the panel shows only its overlay colour.
    fn background_rules(&self, images: &Images) -> String {
        let mut css = String::new();
        for (class, uri, name) in [
            ("panel-problem", &images.problem, &self.config.assets.problem_image),
            ("panel-questions", &images.questions, &self.config.assets.questions_image),
        ] {
            if uri.is_empty() {
                debug!("Background image {} not embedded", name);
                continue;
            }
            css.push_str(&format!(".{} {{ background-image: url('{}'); }}\n", class, uri));
        }
        css
    }

    fn header(&self) -> String {
        let page = &self.config.page;
        format!(
            "<div class=\"title\"><a href=\"{url}\">🌾{title}</a></div>\n\
             <div class=\"subtitle\">{subtitle}</div>\n",
            url = escape_html(&page.home_url),
            title = escape_html(&page.title),
            subtitle = escape_html(SUBTITLE),
        )
    }

    fn background_section(&self) -> String {
        let pressure = unordered_list(PRESSURE_FACTORS.iter().copied());
        let questions = unordered_list(GUIDING_QUESTIONS.iter().copied());

        let mut html = section_title("Hintergrund & Motivation");
        html.push_str(&format!(
            "<div class=\"table-container\">\n\
             <div class=\"column\"><div class=\"panel-bg panel-problem\"><div class=\"column-content\">\n\
             <h4>🧭  Ausgangszustand</h4>\n\
             <p class=\"lead\"><strong>{intro}</strong></p>\n\
             <div class=\"pressure\">{pressure}</div>\n\
             <p class=\"lead\">{outro}</p>\n\
             </div></div></div>\n\
             <div class=\"column\"><div class=\"panel-bg panel-questions\"><div class=\"column-content\">\n\
             <h4>❔ Leitfragen</h4>\n\
             <div class=\"questions\">{questions}</div>\n\
             </div></div></div>\n\
             </div>\n",
            intro = PRESSURE_INTRO,
            outro = PRESSURE_OUTRO,
        ));
        html
    }

    fn solution_section(&self, architecture: &str) -> String {
        let mut html = section_title("Ein Lösungsansatz");

        html.push_str("<div class=\"tabs\">\n");
        for (i, tab) in TABS.iter().enumerate() {
            html.push_str(&format!(
                "<button class=\"tab{active}\" data-tab=\"{id}\">{title}</button>\n",
                active = if i == 0 { " active" } else { "" },
                id = tab.id,
                title = tab.title,
            ));
        }
        html.push_str("</div>\n");

        html.push_str(&format!(
            "<div class=\"tab-panel active\" id=\"tab-{}\">\n",
            TABS[0].id
        ));
        html.push_str(&format!(
            "<div class=\"section-header\">{}</div>\n",
            escape_html(TECHNOLOGY_HEADER)
        ));
        html.push_str(&format!(
            "<div class=\"architecture\"><img src=\"{}\" alt=\"{caption}\"><p>{caption}</p></div>\n",
            architecture,
            caption = ARCHITECTURE_CAPTION,
        ));
        html.push_str("<div class=\"feature-grid\">\n");
        for column in FEATURE_COLUMNS {
            html.push_str(&feature_column(column));
        }
        html.push_str("</div>\n</div>\n");

        html.push_str(&format!("<div class=\"tab-panel\" id=\"tab-{}\">\n", TABS[1].id));
        html.push_str("<div class=\"section-header\">Ablaufplan</div>\n<div class=\"highlight-box\">");
        html.push_str(&ordered_list(PROCESS_STEPS.iter().copied()));
        html.push_str("</div>\n</div>\n");

        html
    }

    fn considerations_section(&self) -> String {
        let mut html = section_title("Abwägungen im Überblick");
        html.push_str("<div class=\"pros-cons\">\n");
        html.push_str(&card_list("pros", "✅ Nutzenpotenziale", BENEFITS));
        html.push_str(&card_list("cons", "⚠️ Herausforderungen", CHALLENGES));
        html.push_str("</div>\n");
        html
    }
}

/// Inline SVG favicon showing `icon`. The icon is escaped for XML, then the
/// whole document is percent-encoded for the `data:` URI.
fn favicon_uri(icon: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        escape_html(icon)
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

/// Convenience wrapper used by the server and the CLI
pub fn render_page(config: &Config) -> Result<String> {
    PageRenderer::new(config).render()
}

fn feature_column(column: &FeatureColumn) -> String {
    let mut html = format!(
        "<div class=\"feature\">\n<div class=\"feature-title\"><h4>{} {}</h4></div>\n",
        column.icon,
        escape_html(column.title)
    );

    html.push_str("<div class=\"feature-body\"><ul>");
    for bullet in column.bullets {
        html.push_str("<li>");
        html.push_str(bullet.html);
        html.push_str("</li>");
        if !bullet.children.is_empty() {
            html.push_str(&unordered_list(bullet.children.iter().copied()));
        }
    }
    html.push_str("</ul></div>\n");

    for note in column.notes {
        let class = match note.kind {
            NoteKind::Connectivity => "note-connectivity",
            NoteKind::Energy => "note-energy",
        };
        html.push_str(&format!(
            "<div class=\"note {}\">{}</div>\n",
            class,
            unordered_list([note.html])
        ));
    }

    if !column.footnotes.is_empty() {
        html.push_str("<div class=\"footnotes\">");
        for footnote in column.footnotes {
            html.push_str(&format!("<i>{}</i><br>", escape_html(footnote)));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn card_list(kind: &str, heading: &str, cards: &[Card]) -> String {
    let mut html = format!(
        "<div class=\"card-list {}\">\n<h4>{}</h4>\n",
        kind, heading
    );
    for card in cards {
        html.push_str(&format!(
            "<div class=\"card\"><div class=\"card-icon\">{}</div><div>\
             <span class=\"card-label\">{}:</span>\
             <span class=\"card-text\">{}</span></div></div>\n",
            escape_html(card.icon),
            escape_html(card.label),
            escape_html(card.description),
        ));
    }
    html.push_str("</div>\n");
    html
}

fn timeline_section(phases: &[Phase]) -> String {
    let mut html = section_title("Zeitplan");
    html.push_str(
        "<table class=\"phases\">\n<tr><th>Phase</th><th>Zeitspanne</th><th>Aufgaben</th></tr>\n",
    );
    for phase in phases {
        let tasks = phase
            .tasks
            .iter()
            .map(|task| format!("• {}", escape_html(task)))
            .collect::<Vec<_>>()
            .join("<br>");
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(phase.name),
            escape_html(phase.span),
            tasks
        ));
    }
    html.push_str("</table>\n");
    html
}

fn footer(page: &PageConfig) -> String {
    format!(
        "<div class=\"footer\">\n\
         {footer_title} - Präsentation für potenzielle Projektpartner im Rahmen von <a href=\"{partner_url}\">{partner}</a><br>\n\
         © {year} | {institution} | Kontakt: <a href=\"mailto:{email}\">{email}</a>\n\
         </div>\n",
        footer_title = FOOTER_TITLE,
        partner_url = escape_html(&page.partner_url),
        partner = escape_html(&page.partner_name),
        year = page.year,
        institution = escape_html(&page.institution),
        email = escape_html(&page.contact_email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DATA_URI_PREFIX;
    use crate::config::AssetsConfig;
    use crate::error::DeckError;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn fixture_config(name: &str, with_backgrounds: bool) -> (Config, PathBuf) {
        let dir = std::env::temp_dir().join(format!("smartag-render-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let assets = AssetsConfig {
            dir: dir.clone(),
            ..AssetsConfig::default()
        };
        RgbImage::from_pixel(8, 4, Rgb([27, 94, 32]))
            .save(assets.architecture_path())
            .unwrap();
        if with_backgrounds {
            RgbImage::from_pixel(2, 2, Rgb([200, 230, 201]))
                .save(assets.questions_path())
                .unwrap();
            std::fs::write(assets.problem_path(), b"jpeg bytes").unwrap();
        }

        let config = Config {
            assets,
            ..Config::default()
        };
        (config, dir)
    }

    #[test]
    fn test_render_with_all_assets() {
        let (config, dir) = fixture_config("full", true);
        let html = render_page(&config).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Smarte und resiliente Landwirtschaft mit Edge AI</title>"));
        assert!(html.contains(".panel-problem { background-image: url('data:image/png;base64,"));
        assert!(html.contains(".panel-questions { background-image: url('data:image/png;base64,"));
        assert!(html.contains(&format!("<img src=\"{}", DATA_URI_PREFIX)));
        assert!(html.contains("Beispielhafter technischer Aufbau"));
        assert!(html.trim_end().ends_with("</html>"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_backgrounds_still_render() {
        let (config, dir) = fixture_config("nobg", false);
        let html = render_page(&config).unwrap();

        assert!(!html.contains(".panel-problem { background-image"));
        assert!(!html.contains(".panel-questions { background-image"));
        assert!(html.contains("🧭  Ausgangszustand"));
        assert!(html.contains("❔ Leitfragen"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_architecture_fails() {
        let config = Config {
            assets: AssetsConfig {
                dir: PathBuf::from("/nonexistent/smartag"),
                ..AssetsConfig::default()
            },
            ..Config::default()
        };

        match render_page(&config) {
            Err(DeckError::AssetRead { path, .. }) => {
                assert!(path.ends_with("TechnologieAufbauErweitert3.png"))
            }
            other => panic!("expected asset error, got {:?}", other.map(|h| h.len())),
        }
    }

    #[test]
    fn test_cards_rendered_in_order_and_escaped() {
        let (config, dir) = fixture_config("cards", false);
        let html = render_page(&config).unwrap();

        assert_eq!(html.matches("<div class=\"card\">").count(), BENEFITS.len() + CHALLENGES.len());
        assert!(html.contains("Umweltschonend &amp; verbesserter Ressourceneinsatz"));

        let first = html.find("Wirtschaftlichkeit:").unwrap();
        let last = html.find("Reproduzierbarkeit:").unwrap();
        let challenges = html.find("⚠️ Herausforderungen").unwrap();
        assert!(first < last && last < challenges);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_first_tab_active() {
        let (config, dir) = fixture_config("tabs", false);
        let html = render_page(&config).unwrap();

        assert!(html.contains("<button class=\"tab active\" data-tab=\"technologie\">"));
        assert!(html.contains("<button class=\"tab\" data-tab=\"ablauf\">"));
        assert!(html.contains("<div class=\"tab-panel active\" id=\"tab-technologie\">"));
        assert!(html.contains("<div class=\"tab-panel\" id=\"tab-ablauf\">"));
        assert_eq!(html.matches("<ol class=\"steps\">").count(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_optional_sections() {
        let (mut config, dir) = fixture_config("optional", false);

        let html = render_page(&config).unwrap();
        assert!(!html.contains("class=\"phases\""));
        assert!(!html.contains("class=\"disclaimer\""));

        config.page.show_timeline = true;
        config.page.show_disclaimer = true;
        let html = render_page(&config).unwrap();
        assert!(html.contains("class=\"phases\""));
        assert_eq!(html.matches("<tr><td>").count(), PHASES.len());
        assert!(html.contains("Forschungsprojekt"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_footer_uses_page_config() {
        let (mut config, dir) = fixture_config("footer", false);
        config.page.contact_email = "team@example.org".to_string();
        config.page.year = 2026;

        let html = render_page(&config).unwrap();
        assert!(html.contains("<a href=\"mailto:team@example.org\">team@example.org</a>"));
        assert!(html.contains("© 2026 | Technische Hochschule Brandenburg"));
        assert!(html.contains("Smarte und resiliente Landwirtschaft via Edge AI - Präsentation"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_favicon_is_percent_encoded() {
        let uri = favicon_uri("<&#");

        let payload = uri.strip_prefix("data:image/svg+xml,").unwrap();
        assert!(!payload.contains('<'));
        assert!(!payload.contains('#'));
        assert!(!payload.contains('&'));
        // XML-escaped icon, then percent-encoded
        assert!(payload.contains("%26lt%3B%26amp%3B%23"));
        assert!(payload.starts_with("%3Csvg"));
    }

    #[test]
    fn test_default_favicon_in_head() {
        let (config, dir) = fixture_config("favicon", false);
        let html = render_page(&config).unwrap();

        let expected = format!("<link rel=\"icon\" href=\"{}\"/>", favicon_uri("📡"));
        assert!(html.contains(&expected));

        std::fs::remove_dir_all(&dir).ok();
    }
}
