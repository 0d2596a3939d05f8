//! # Folio
//!
//! A static generator for a single-page developer portfolio. Content files
//! describe the person; the generator renders one page whose sections appear
//! in a fixed vertical order, each addressable by anchor.
//!
//! # Architecture: Two Halves of One Page
//!
//! ```text
//! content/  →  content::load  →  generate  →  dist/index.html + site.css + site.js
//!                    │
//!                    └──────────→  view::Page  (headless model of the running page)
//! ```
//!
//! The static half renders HTML with maud. The interactive half (typed text,
//! scroll-spy, reveals, menu, project toggle, contact form, notifications) is
//! modelled in [`view`] as deterministic state machines driven by a
//! virtual-time timer queue, and bound in the browser by a small embedded
//! script that reads the same settings from the page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Loads `profile.toml`, `about.md` and the collection files into [`content::Content`] |
//! | [`sections`] | Section identifiers, document order, navigation links |
//! | [`generate`] | Renders the page with maud, writes styles/script, copies assets |
//! | [`view`] | Headless page model: timers, typing, scroll-spy, reveals, menu, projects, toasts |
//! | [`contact`] | Contact form, relay credentials and the EmailJS relay client |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting for `check` and `build` |
//! | [`logging`] | `tracing` subscriber setup for diagnostics |
//!
//! # Design Decisions
//!
//! ## Virtual Time
//!
//! Every delayed behavior on the page is a timer. [`view::timer::TimerQueue`]
//! owns them all, so `Page::advance(ms)` replays any timeline exactly and
//! `Page::unmount` cancels everything in one place. No test ever sleeps.
//!
//! ## Content as Data Files
//!
//! Skills, education, certifications and projects are TOML arrays rendered in
//! file order. The biography is Markdown. Nothing about the person lives in
//! the templates.
//!
//! ## Credentials at Build Time
//!
//! Relay credentials are read from the environment when the page is built and
//! embedded in it. When one is missing the build still succeeds and the form
//! reports a configuration error instead of calling the relay.

pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod logging;
pub mod output;
pub mod sections;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
