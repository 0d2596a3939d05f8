//! HTML site generation.
//!
//! Renders the loaded [`Content`] into a single static page. Sections are
//! composed in a fixed vertical order:
//!
//! ```text
//! header · hero · about-me · skills · education · certifications · projects · contact · footer
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html     # The page
//! ├── site.css       # Colors/theme from config + static/style.css
//! ├── site.js        # Browser runtime (static/site.js)
//! └── favicon.svg    # ...anything under content/assets/
//! ```
//!
//! Stylesheet and script links carry a content fingerprint (`?v=<sha256
//! prefix>`) so a new build is never served from a stale cache.
//!
//! ## Browser Runtime
//!
//! Interactive behavior (typed text, scroll-spy, reveals, menu, project
//! toggle, contact relay, notifications) is bound by `site.js`. Its settings
//! are embedded as JSON in `<script id="folio-runtime">`, serialized from the
//! same config the [`crate::view`] model runs on. Relay credentials are baked
//! in when present; without them the form reports a configuration error on
//! submit and never calls the relay.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated content is escaped.

use crate::config::{self, ScrollSpyConfig, SiteConfig, ToastConfig, TypingConfig};
use crate::contact::{
    CONFIG_ERROR_MESSAGE, FAILED_MESSAGE, MissingCredential, RelayCredentials, SENT_MESSAGE,
};
use crate::content::{Content, Profile, ProjectEntry};
use crate::sections::{NAV_LINKS, SectionId};
use crate::view::reveal::RevealAnimation;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");
const ICON_FONT_HREF: &str = "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined";

/// What a generate run wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Generated files, relative to the output directory.
    pub pages: Vec<String>,
    /// Files copied from `assets/`, relative to the output directory.
    pub assets: Vec<String>,
    pub relay_configured: bool,
}

pub fn generate(
    content: &Content,
    output_dir: &Path,
    credentials: Result<&RelayCredentials, &MissingCredential>,
) -> Result<GenerateReport, GenerateError> {
    let config = &content.config;
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme, &config.reveal),
        CSS_STATIC
    );

    if let Err(missing) = credentials {
        tracing::warn!(%missing, "contact form will report a configuration error");
    }
    let runtime = runtime_json(content, credentials.ok())?;

    let assets = Assets {
        css_href: fingerprinted("site.css", &css),
        js_href: fingerprinted("site.js", JS),
    };

    fs::create_dir_all(output_dir)?;
    let page = render_page(content, &assets, &runtime);
    fs::write(output_dir.join("index.html"), page.into_string())?;
    fs::write(output_dir.join("site.css"), &css)?;
    fs::write(output_dir.join("site.js"), JS)?;

    let copied = match &content.assets_dir {
        Some(dir) => copy_assets(dir, output_dir)?,
        None => Vec::new(),
    };
    tracing::debug!(assets = copied.len(), "copied static assets");

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        pages: vec![
            "index.html".to_string(),
            "site.css".to_string(),
            "site.js".to_string(),
        ],
        assets: copied,
        relay_configured: credentials.is_ok(),
    })
}

/// `name?v=<first 8 hex chars of SHA-256(body)>`.
fn fingerprinted(name: &str, body: &str) -> String {
    let digest = Sha256::digest(body.as_bytes());
    let hex = format!("{:x}", digest);
    format!("{}?v={}", name, &hex[..8])
}

fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(copied)
}

// ============================================================================
// Runtime config
// ============================================================================

#[derive(Serialize)]
struct RuntimeConfig<'a> {
    phrases: &'a [String],
    typing: &'a TypingConfig,
    scroll_spy: &'a ScrollSpyConfig,
    reveal: RuntimeReveal,
    projects: RuntimeProjects<'a>,
    toasts: &'a ToastConfig,
    relay: RuntimeRelay<'a>,
    messages: RuntimeMessages,
    sections: Vec<&'static str>,
}

#[derive(Serialize)]
struct RuntimeReveal {
    duration_ms: u64,
}

#[derive(Serialize)]
struct RuntimeProjects<'a> {
    preview: usize,
    load_delay_ms: u64,
    fallback_image: &'a str,
}

#[derive(Serialize)]
struct RuntimeRelay<'a> {
    endpoint: &'a str,
    service_id: Option<&'a str>,
    template_id: Option<&'a str>,
    public_key: Option<&'a str>,
}

#[derive(Serialize)]
struct RuntimeMessages {
    sent: &'static str,
    failed: &'static str,
    config_error: &'static str,
}

/// Serialize the browser runtime settings, safe to embed in `<script>`.
fn runtime_json(
    content: &Content,
    credentials: Option<&RelayCredentials>,
) -> Result<String, GenerateError> {
    let config: &SiteConfig = &content.config;
    let runtime = RuntimeConfig {
        phrases: &content.profile.phrases,
        typing: &config.typing,
        scroll_spy: &config.scroll_spy,
        reveal: RuntimeReveal {
            duration_ms: config.reveal.duration_ms,
        },
        projects: RuntimeProjects {
            preview: config.projects.preview,
            load_delay_ms: config.projects.load_delay_ms,
            fallback_image: &config.projects.fallback_image,
        },
        toasts: &config.toasts,
        relay: RuntimeRelay {
            endpoint: &config.contact.endpoint,
            service_id: credentials.map(|c| c.service_id.as_str()),
            template_id: credentials.map(|c| c.template_id.as_str()),
            public_key: credentials.map(|c| c.public_key.as_str()),
        },
        messages: RuntimeMessages {
            sent: SENT_MESSAGE,
            failed: FAILED_MESSAGE,
            config_error: CONFIG_ERROR_MESSAGE,
        },
        sections: SectionId::ALL.iter().map(|s| s.as_str()).collect(),
    };
    let json = serde_json::to_string(&runtime)?;
    // `</script>` inside a string would end the element early.
    Ok(json.replace("</", "<\\/"))
}

// ============================================================================
// HTML Components
// ============================================================================

struct Assets {
    css_href: String,
    js_href: String,
}

/// Stagger delay and threshold for a card at `index` within its list.
fn card_reveal(config: &SiteConfig, index: usize) -> (String, String) {
    let delay = config.reveal.stagger_ms * index as u64;
    (delay.to_string(), config.reveal.card_threshold.to_string())
}

fn base_document(title: &str, assets: &Assets, runtime: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="favicon.svg";
                link rel="stylesheet" href=(ICON_FONT_HREF);
                link rel="stylesheet" href=(assets.css_href);
            }
            body {
                (content)
                div #toaster aria-live="polite" {}
                script type="application/json" id="folio-runtime" { (PreEscaped(runtime)) }
                script src=(assets.js_href) defer {}
            }
        }
    }
}

fn section_heading(
    config: &SiteConfig,
    id: SectionId,
    title: &str,
    subtitle: Option<&str>,
) -> Markup {
    html! {
        header.section-heading
            id={ (id.as_str()) "-heading" }
            data-reveal=(RevealAnimation::FadeDown.as_str())
            data-reveal-threshold=(config.reveal.heading_threshold) {
            h2 { (title) }
            @if let Some(subtitle) = subtitle {
                p.section-subtitle { (subtitle) }
            }
        }
    }
}

/// Site header: logo, desktop links, mobile toggle and menu.
pub(crate) fn site_header(profile: &Profile) -> Markup {
    html! {
        header.site-header {
            a.logo href="#" data-nav="home" { (profile.name) }
            nav.site-nav {
                @for link in &NAV_LINKS {
                    a.nav-link.active[link.section == SectionId::Home]
                        href=(link.section.href())
                        data-section=(link.section.as_str())
                        data-nav=(link.section.as_str()) {
                        (link.label)
                    }
                }
            }
            button #menu-toggle type="button" aria-label="Toggle navigation"
                aria-expanded="false" aria-controls="mobile-menu" {
                span.material-symbols-outlined { "menu" }
            }
            nav #mobile-menu hidden {
                @for link in &NAV_LINKS {
                    a.nav-link
                        href=(link.section.href())
                        data-section=(link.section.as_str())
                        data-nav=(link.section.as_str()) {
                        (link.label)
                    }
                }
            }
        }
    }
}

fn hero(profile: &Profile) -> Markup {
    let first = profile.phrases.first().map(String::as_str).unwrap_or_default();
    html! {
        section.hero id=(SectionId::Home.as_str()) {
            div.hero-text {
                h1 { "Hi, I'm " span.accent { (profile.name) } }
                p.typing-text {
                    (profile.phrase_prefix) " "
                    span #typed-text data-full=(first) {}
                    span.caret aria-hidden="true" { "|" }
                }
                noscript { p { (profile.phrase_prefix) " " (first) } }
                div.hero-actions {
                    @if let Some(resume) = &profile.resume_url {
                        a.button.hero-button href=(resume) target="_blank" rel="noreferrer" {
                            "Download Resume"
                        }
                    }
                    @for social in &profile.socials {
                        a.button.button-ghost.hero-button href=(social.url) target="_blank"
                            rel="noreferrer" aria-label=(social.label) {
                            (social.label)
                        }
                    }
                }
            }
            figure.hero-portrait {
                img src=(profile.avatar) alt={ "Portrait of " (profile.name) };
                @for tag in &profile.hero_tags {
                    span.hero-tag { (tag) }
                }
            }
        }
    }
}

fn about(content: &Content) -> Markup {
    let config = &content.config;
    html! {
        section id=(SectionId::AboutMe.as_str()) {
            (section_heading(config, SectionId::AboutMe, "About Me", None))
            div.about-body data-reveal=(RevealAnimation::FadeUp.as_str())
                data-reveal-threshold=(config.reveal.card_threshold) {
                @if let Some(bio) = &content.about_html {
                    (PreEscaped(bio))
                }
                @if let Some(quote) = &content.profile.quote {
                    blockquote { "\u{201C}" (quote) "\u{201D}" }
                }
            }
        }
    }
}

fn skills(content: &Content) -> Markup {
    let config = &content.config;
    html! {
        section id=(SectionId::Skills.as_str()) {
            (section_heading(config, SectionId::Skills, "My Skills", None))
            div.skill-groups {
                @for group in &content.skills {
                    div.skill-group {
                        h3 { (group.title.to_uppercase()) }
                        div.skill-grid {
                            @for (idx, skill) in group.skills.iter().enumerate() {
                                @let (delay, threshold) = card_reveal(config, idx);
                                div.card.skill-card
                                    data-reveal=(RevealAnimation::ScaleUp.as_str())
                                    data-reveal-delay=(delay)
                                    data-reveal-threshold=(threshold) {
                                    img src=(skill.icon_url()) alt={ (skill.name) " logo" }
                                        loading="lazy";
                                    p { (skill.name) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn education(content: &Content) -> Markup {
    let config = &content.config;
    html! {
        section id=(SectionId::Education.as_str()) {
            (section_heading(config, SectionId::Education, "Education",
                Some("My academic journey")))
            ol.timeline {
                @for (idx, entry) in content.education.iter().enumerate() {
                    @let (delay, threshold) = card_reveal(config, idx);
                    li.card.timeline-entry
                        data-reveal=(RevealAnimation::SlideRight.as_str())
                        data-reveal-delay=(delay)
                        data-reveal-threshold=(threshold) {
                        span.material-symbols-outlined.entry-icon { (entry.icon) }
                        div {
                            h3 { (entry.degree) }
                            p.accent { (entry.institution) }
                            p.muted { (entry.location) " · " (entry.period) }
                            p { (entry.description) }
                        }
                    }
                }
            }
        }
    }
}

fn certifications(content: &Content) -> Markup {
    let config = &content.config;
    html! {
        section id=(SectionId::Certifications.as_str()) {
            (section_heading(config, SectionId::Certifications, "Certifications",
                Some("Professional achievements and credentials")))
            div.card-grid {
                @for (idx, cert) in content.certifications.iter().enumerate() {
                    @let (delay, threshold) = card_reveal(config, idx);
                    article.card.cert-card
                        data-reveal=(RevealAnimation::ScaleUp.as_str())
                        data-reveal-delay=(delay)
                        data-reveal-threshold=(threshold) {
                        span.material-symbols-outlined.entry-icon { (cert.icon) }
                        h3 { (cert.title) }
                        p.accent { (cert.issuer) }
                        p.muted { (cert.date) }
                        p.credential { "ID: " (cert.credential_id) }
                        ul.tags {
                            @for skill in &cert.skills {
                                li { (skill) }
                            }
                        }
                        a.button href=(cert.link) target="_blank" rel="noopener noreferrer" {
                            "View Certificate"
                        }
                    }
                }
            }
        }
    }
}

fn project_card(config: &SiteConfig, project: &ProjectEntry, idx: usize) -> Markup {
    let extra = idx >= config.projects.preview;
    // Cards hidden behind "View All" restart their stagger when revealed.
    let stagger_idx = if extra { idx - config.projects.preview } else { idx };
    let (delay, threshold) = card_reveal(config, stagger_idx);
    html! {
        article.card.project-card
            data-extra[extra]
            hidden[extra]
            data-reveal=(RevealAnimation::ScaleUp.as_str())
            data-reveal-delay=(delay)
            data-reveal-threshold=(threshold) {
            img src=(project.image) alt={ "Screenshot of " (project.title) }
                data-fallback=(config.projects.fallback_image) loading="lazy";
            div.project-body {
                h3 { (project.title) }
                p { (project.description) }
                ul.tags {
                    @for tag in &project.tech {
                        li { (tag) }
                    }
                }
                div.project-links {
                    a href=(project.live) target="_blank" rel="noreferrer" { "Live" }
                    a href=(project.client) target="_blank" rel="noreferrer" { "Client" }
                    a href=(project.server) target="_blank" rel="noreferrer" { "Server" }
                }
            }
        }
    }
}

pub(crate) fn projects(content: &Content) -> Markup {
    let config = &content.config;
    let has_more = content.projects.len() > config.projects.preview;
    html! {
        section id=(SectionId::Projects.as_str()) {
            (section_heading(config, SectionId::Projects, "My Projects", None))
            div #project-grid .card-grid {
                @for (idx, project) in content.projects.iter().enumerate() {
                    (project_card(config, project, idx))
                }
            }
            @if has_more {
                div.center {
                    button #view-all-button .button type="button" { "View All Projects" }
                }
            }
        }
    }
}

fn contact(content: &Content) -> Markup {
    let config = &content.config;
    let details = &content.profile.contact;
    let mut channels: Vec<(&str, &str, String)> =
        vec![("mail", details.email.as_str(), format!("mailto:{}", details.email))];
    if let Some(phone) = &details.phone {
        channels.push(("call", phone.as_str(), format!("tel:{}", phone.replace(' ', ""))));
    }
    html! {
        section id=(SectionId::Contact.as_str()) {
            (section_heading(config, SectionId::Contact, "Get In Touch",
                Some("Have a project in mind? Let's talk.")))
            div.contact-layout {
                div.contact-channels {
                    @for (idx, (icon, label, href)) in channels.iter().enumerate() {
                        @let (delay, threshold) = card_reveal(config, idx);
                        a.card.contact-card href=(href)
                            data-reveal=(RevealAnimation::SlideRight.as_str())
                            data-reveal-delay=(delay)
                            data-reveal-threshold=(threshold) {
                            span.material-symbols-outlined { (icon) }
                            span { (label) }
                        }
                    }
                    @if let Some(location) = &details.location {
                        p.card.contact-card {
                            span.material-symbols-outlined { "location_on" }
                            span { (location) }
                        }
                    }
                }
                form #contact-form .card novalidate {
                    label for="full-name" { "Full Name" }
                    input #full-name type="text" name="full-name" placeholder="Your Full Name";
                    label for="email" { "Email" }
                    input #email type="email" name="email" placeholder="Your Email";
                    label for="message" { "Message" }
                    textarea #message name="message" rows="4"
                        placeholder="Tell me about your project, requirements..." {}
                    button.button type="submit" { "Send Message" }
                }
            }
        }
    }
}

fn footer(profile: &Profile) -> Markup {
    html! {
        footer.site-footer {
            p { (profile.name) " · " (profile.role) }
            a href="#contact" data-nav="contact" { "Let's work together" }
        }
    }
}

fn divider() -> Markup {
    html! { hr.divider; }
}

// ============================================================================
// Page Renderer
// ============================================================================

fn render_page(content: &Content, assets: &Assets, runtime: &str) -> Markup {
    let title = format!("{} | {}", content.profile.name, content.config.title);
    let body = html! {
        (site_header(&content.profile))
        main {
            (hero(&content.profile))
            (about(content))
            (divider())
            (skills(content))
            (divider())
            (education(content))
            (divider())
            (certifications(content))
            (divider())
            (projects(content))
            (contact(content))
        }
        (footer(&content.profile))
    };
    base_document(&title, assets, runtime, body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    /// The temp dir must outlive the content: `assets_dir` points into it.
    fn fixture_content() -> (TempDir, Content) {
        let tmp = setup_fixtures();
        let content = content::load(tmp.path()).unwrap();
        (tmp, content)
    }

    fn credentials() -> RelayCredentials {
        RelayCredentials {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
        }
    }

    fn render(content: &Content) -> String {
        let assets = Assets {
            css_href: "site.css".into(),
            js_href: "site.js".into(),
        };
        let runtime = runtime_json(content, None).unwrap();
        render_page(content, &assets, &runtime).into_string()
    }

    #[test]
    fn page_includes_doctype_and_title() {
        let (_tmp, content) = fixture_content();
        let html = render(&content);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada Example | Portfolio</title>"));
    }

    #[test]
    fn sections_render_in_document_order() {
        let (_tmp, content) = fixture_content();
        let html = render(&content);
        let anchors: Vec<String> = SectionId::ALL
            .iter()
            .map(|s| format!(r#"id="{}""#, s.as_str()))
            .collect();
        let needles: Vec<&str> = anchors.iter().map(String::as_str).collect();
        assert_in_order(&html, &needles);
    }

    #[test]
    fn collections_render_in_file_order() {
        let (_tmp, content) = fixture_content();
        let html = render(&content);
        assert_in_order(&html, &["Event Hub", "Event Sphere", "Green Nest", "Hero Apps"]);
        assert_in_order(&html, &["2025 - 2028", "2020 - 2022"]);
    }

    #[test]
    fn header_links_every_nav_section() {
        let (_tmp, content) = fixture_content();
        let html = site_header(&content.profile).into_string();
        for link in &NAV_LINKS {
            assert!(html.contains(&format!(r#"data-section="{}""#, link.section.as_str())));
        }
        assert!(html.contains(r##"href="#about-me""##));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn projects_beyond_preview_are_hidden() {
        let (_tmp, content) = fixture_content();
        let html = projects(&content).into_string();
        assert_eq!(html.matches("project-card").count(), 4);
        assert_eq!(html.matches("data-extra").count(), 1);
        assert!(html.contains("view-all-button"));
    }

    #[test]
    fn toggle_button_absent_when_everything_fits() {
        let (_tmp, mut content) = fixture_content();
        content.projects.truncate(3);
        let html = projects(&content).into_string();
        assert!(!html.contains("data-extra"));
        assert!(!html.contains("view-all-button"));
    }

    #[test]
    fn cards_stagger_reveal_by_index() {
        let (_tmp, content) = fixture_content();
        let html = projects(&content).into_string();
        assert_in_order(
            &html,
            &[
                r#"data-reveal-delay="0""#,
                r#"data-reveal-delay="100""#,
                r#"data-reveal-delay="200""#,
            ],
        );
    }

    #[test]
    fn contact_form_uses_relay_field_names() {
        let (_tmp, content) = fixture_content();
        let html = render(&content);
        assert!(html.contains(r#"name="full-name""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="message""#));
        assert!(html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn markdown_biography_is_embedded() {
        let (_tmp, content) = fixture_content();
        let html = render(&content);
        assert!(html.contains("<strong>React</strong>"));
    }

    #[test]
    fn html_escape_in_maud() {
        let (_tmp, mut content) = fixture_content();
        content.profile.name = "<script>alert('xss')</script>".to_string();
        let html = site_header(&content.profile).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn runtime_json_omits_missing_credentials() {
        let (_tmp, content) = fixture_content();
        let json: serde_json::Value =
            serde_json::from_str(&runtime_json(&content, None).unwrap()).unwrap();
        assert!(json["relay"]["public_key"].is_null());
        assert_eq!(json["typing"]["type_ms"], 70);
        assert_eq!(json["projects"]["preview"], 3);
        assert_eq!(json["phrases"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn runtime_json_cannot_close_its_script_tag() {
        let (_tmp, mut content) = fixture_content();
        content.profile.phrases = vec!["</script><script>alert(1)</script>".to_string()];
        let json = runtime_json(&content, None).unwrap();
        assert!(!json.contains("</script"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["phrases"][0], "</script><script>alert(1)</script>");
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = fingerprinted("site.css", "body {}");
        let b = fingerprinted("site.css", "body { color: red }");
        assert!(a.starts_with("site.css?v="));
        assert_eq!(a.len(), "site.css?v=".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn generate_writes_page_and_assets() {
        let (_tmp, content) = fixture_content();
        let out = TempDir::new().unwrap();
        let creds = credentials();
        let report = generate(&content, out.path(), Ok(&creds)).unwrap();

        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("site.css").is_file());
        assert!(out.path().join("site.js").is_file());
        assert!(out.path().join("favicon.svg").is_file());
        assert_eq!(report.assets, vec!["favicon.svg".to_string()]);
        assert!(report.relay_configured);

        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("pk_123"));
        let css = fs::read_to_string(out.path().join("site.css")).unwrap();
        assert!(css.contains("--color-primary: #f59e0b"));
        // The mobile menu never overlays the desktop nav.
        assert!(css.contains("@media (min-width: 769px)"));
    }

    #[test]
    fn generate_without_credentials_still_builds() {
        let (_tmp, content) = fixture_content();
        let out = TempDir::new().unwrap();
        let missing = MissingCredential(crate::contact::SERVICE_ID_VAR);
        let report = generate(&content, out.path(), Err(&missing)).unwrap();
        assert!(!report.relay_configured);
        assert!(out.path().join("index.html").is_file());
    }
}
