//! Headless model of the page's interactive behavior.
//!
//! The generated page ships a small browser runtime; this module is the same
//! behavior as owned Rust state, driven by discrete events on a virtual
//! clock. A [`Page`] is explicitly mounted and torn down:
//!
//! - [`Page::mount`] initializes the reveal registry once and starts the
//!   typed-text loop.
//! - Events arrive through [`Page::scroll`], [`Page::resize`], [`Page::toggle_menu`],
//!   [`Page::select_nav`], [`Page::toggle_projects`] and
//!   [`Page::submit_contact`].
//! - [`Page::advance`] moves time forward and fires due timers.
//! - [`Page::unmount`] cancels every timer and releases every observer. It
//!   consumes the page, so nothing can act on a torn-down view.
//!
//! | Module | Behavior |
//! |--------|----------|
//! | [`timer`] | Virtual-time timer queue with cancellation handles |
//! | [`typed_text`] | Hero phrase typing/deleting loop |
//! | [`scroll_spy`] | Scroll offset → active nav section, throttled |
//! | [`reveal`] | Fire-once entrance animations |
//! | [`menu`] | Mobile menu toggle and nav scroll targets |
//! | [`projects`] | Project list expand/collapse |
//! | [`toast`] | Transient notifications |

pub mod menu;
pub mod projects;
pub mod reveal;
pub mod scroll_spy;
pub mod timer;
pub mod toast;
pub mod typed_text;

use crate::config::SiteConfig;
use crate::contact::{
    ContactForm, MailRelay, MissingCredential, RelayCredentials, SubmitError, SubmitOutcome,
};
use crate::sections::{NavLink, SectionId};
use menu::{MobileMenu, ScrollTarget};
use projects::{ProjectsToggle, ToggleEffect};
use reveal::{RevealEvent, RevealRegistry, RevealSpec};
use scroll_spy::{ScrollOutcome, ScrollSpy, SectionLayout};
use thiserror::Error;
use timer::{TimerHandle, TimerQueue};
use toast::{Notification, ToastId, Toasts};
use typed_text::TypedText;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("typed text needs at least one phrase")]
    NoPhrases,
}

/// Geometry measured when the page mounts.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Sections in document order.
    pub sections: Vec<SectionLayout>,
    pub viewport_height: f64,
    /// Elements with an entrance animation.
    pub reveals: Vec<RevealSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKey {
    TypingTick,
    ProjectsLoaded,
    ScrollSpyFlush,
    ToastExpired(ToastId),
}

/// What [`Page::unmount`] released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    pub timers_cancelled: usize,
    pub observers_released: usize,
}

pub struct Page {
    timers: TimerQueue<TimerKey>,
    typed: TypedText,
    typing_timer: Option<TimerHandle>,
    spy: ScrollSpy,
    reveals: RevealRegistry,
    menu: MobileMenu,
    projects: ProjectsToggle,
    toasts: Toasts,
    contact: ContactForm,
    viewport_height: f64,
    offset: f64,
    mounted_reveals: Vec<RevealEvent>,
}

impl Page {
    pub fn mount(
        config: &SiteConfig,
        phrases: Vec<String>,
        project_count: usize,
        layout: Layout,
    ) -> Result<Self, ViewError> {
        let typed = TypedText::new(phrases, config.typing)?;

        let mut reveals = RevealRegistry::new(config.reveal);
        for spec in layout.reveals {
            reveals.register(spec);
        }
        // Anything already inside the viewport at load plays without a scroll.
        let mounted_reveals = reveals.observe(0.0, layout.viewport_height);

        let mut timers = TimerQueue::new();
        let typing_timer = Some(timers.schedule(typed.delay_ms(), TimerKey::TypingTick));

        tracing::debug!(
            observers = reveals.len(),
            sections = layout.sections.len(),
            "page mounted"
        );

        Ok(Self {
            timers,
            typed,
            typing_timer,
            spy: ScrollSpy::new(config.scroll_spy, layout.sections),
            reveals,
            menu: MobileMenu::default(),
            projects: ProjectsToggle::new(&config.projects, project_count),
            toasts: Toasts::new(config.toasts),
            contact: ContactForm::new(),
            viewport_height: layout.viewport_height,
            offset: 0.0,
            mounted_reveals,
        })
    }

    /// Current virtual time in milliseconds since mount.
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Move time forward by `ms`, firing every timer that falls due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers.now().saturating_add(ms);
        while let Some((_, key)) = self.timers.pop_due(until) {
            match key {
                TimerKey::TypingTick => {
                    let delay = self.typed.tick();
                    self.typing_timer = Some(self.timers.schedule(delay, TimerKey::TypingTick));
                }
                TimerKey::ProjectsLoaded => {
                    self.projects.finish_loading();
                }
                TimerKey::ScrollSpyFlush => {
                    self.spy.flush(self.timers.now());
                }
                TimerKey::ToastExpired(id) => {
                    self.toasts.dismiss(id);
                }
            }
        }
    }

    /// Report a scroll event. Returns the entrance animations it triggered.
    pub fn scroll(&mut self, offset: f64) -> Vec<RevealEvent> {
        self.offset = offset;
        if let ScrollOutcome::Deferred {
            flush_in_ms: Some(delay),
        } = self.spy.on_scroll(self.timers.now(), offset)
        {
            self.timers.schedule(delay, TimerKey::ScrollSpyFlush);
        }
        self.reveals.observe(offset, self.viewport_height)
    }

    /// Report a new viewport and section geometry. A taller viewport can
    /// bring pending elements past their threshold.
    pub fn resize(
        &mut self,
        viewport_height: f64,
        sections: Vec<SectionLayout>,
    ) -> Vec<RevealEvent> {
        self.viewport_height = viewport_height;
        self.spy.set_layout(sections);
        self.reveals.observe(self.offset, viewport_height)
    }

    pub fn typed_text(&self) -> &TypedText {
        &self.typed
    }

    pub fn active_section(&self) -> SectionId {
        self.spy.active()
    }

    pub fn reveals(&self) -> &RevealRegistry {
        &self.reveals
    }

    /// Entrance animations triggered by the initial layout, before any scroll.
    pub fn mounted_reveals(&self) -> &[RevealEvent] {
        &self.mounted_reveals
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn select_nav(&mut self, link: &NavLink) -> ScrollTarget {
        self.menu.select(link)
    }

    pub fn projects(&self) -> &ProjectsToggle {
        &self.projects
    }

    pub fn toggle_projects(&mut self) -> ToggleEffect {
        let effect = self.projects.toggle();
        if let ToggleEffect::StartLoading { delay_ms } = effect {
            self.timers.schedule(delay_ms, TimerKey::ProjectsLoaded);
        }
        effect
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn show_toast(&mut self, notification: Notification) -> ToastId {
        let (id, lifetime) = self.toasts.show(notification);
        self.timers.schedule(lifetime, TimerKey::ToastExpired(id));
        id
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Submit the contact form and show the resulting notification.
    pub fn submit_contact(
        &mut self,
        relay: &dyn MailRelay,
        credentials: Result<RelayCredentials, MissingCredential>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let outcome = self.contact.submit(relay, credentials)?;
        self.show_toast(outcome.notification());
        Ok(outcome)
    }

    /// Tear the view down: cancel the typing loop and every other pending
    /// timer, release the reveal observers.
    pub fn unmount(mut self) -> Teardown {
        let mut timers_cancelled = 0;
        if let Some(handle) = self.typing_timer.take() {
            if self.timers.cancel(handle) {
                timers_cancelled += 1;
            }
        }
        timers_cancelled += self.timers.clear();
        let observers_released = self.reveals.release();
        self.toasts.clear();
        tracing::debug!(timers_cancelled, observers_released, "page unmounted");
        Teardown {
            timers_cancelled,
            observers_released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reveal::{RevealAnimation, RevealState};
    use super::toast::ToastKind;
    use super::*;
    use crate::contact::{ContactFields, RelayError, CONFIG_ERROR_MESSAGE, PUBLIC_KEY_VAR};
    use crate::sections::NAV_LINKS;
    use crate::view::projects::ProjectsState;

    struct AcceptingRelay;

    impl MailRelay for AcceptingRelay {
        fn send(&self, _: &RelayCredentials, _: &ContactFields) -> Result<(), RelayError> {
            Ok(())
        }
    }

    fn layout() -> Layout {
        Layout {
            sections: vec![
                SectionLayout {
                    id: SectionId::Home,
                    top: 0.0,
                    height: 800.0,
                },
                SectionLayout {
                    id: SectionId::AboutMe,
                    top: 800.0,
                    height: 600.0,
                },
                SectionLayout {
                    id: SectionId::Projects,
                    top: 1400.0,
                    height: 900.0,
                },
            ],
            viewport_height: 1000.0,
            reveals: vec![
                RevealSpec {
                    element: "about-me-heading".into(),
                    top: 850.0,
                    threshold: 0.8,
                    delay_ms: 0,
                    animation: RevealAnimation::FadeDown,
                },
                RevealSpec {
                    element: "project-0".into(),
                    top: 2000.0,
                    threshold: 0.85,
                    delay_ms: 0,
                    animation: RevealAnimation::ScaleUp,
                },
            ],
        }
    }

    fn unthrottled_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.scroll_spy.throttle_ms = 0;
        config
    }

    fn mount(config: &SiteConfig, projects: usize) -> Page {
        Page::mount(config, vec!["hi".into(), "yo".into()], projects, layout()).unwrap()
    }

    #[test]
    fn mount_plays_reveals_already_in_view() {
        let mut layout = layout();
        layout.reveals.push(RevealSpec {
            element: "hero-portrait".into(),
            top: 100.0,
            threshold: 0.85,
            delay_ms: 0,
            animation: RevealAnimation::FadeUp,
        });
        let mut page =
            Page::mount(&SiteConfig::default(), vec!["hi".into()], 0, layout).unwrap();

        assert_eq!(page.mounted_reveals().len(), 1);
        assert_eq!(page.mounted_reveals()[0].element, "hero-portrait");
        assert_eq!(page.reveals().state("hero-portrait"), Some(RevealState::Fired));
        assert_eq!(page.reveals().state("about-me-heading"), Some(RevealState::Pending));

        // Already fired at mount, so the first scroll does not replay it.
        assert!(page.scroll(0.0).is_empty());
    }

    #[test]
    fn resize_reveals_elements_a_taller_viewport_exposes() {
        let mut page = mount(&unthrottled_config(), 0);
        assert_eq!(page.reveals().state("about-me-heading"), Some(RevealState::Pending));

        let sections = layout().sections;
        let events = page.resize(1200.0, sections);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].element, "about-me-heading");
        assert_eq!(page.reveals().state("project-0"), Some(RevealState::Pending));
    }

    #[test]
    fn resize_moves_section_boundaries() {
        let mut page = mount(&unthrottled_config(), 0);
        page.scroll(760.0);
        assert_eq!(page.active_section(), SectionId::AboutMe);

        page.resize(
            1000.0,
            vec![
                SectionLayout {
                    id: SectionId::Home,
                    top: 0.0,
                    height: 1200.0,
                },
                SectionLayout {
                    id: SectionId::AboutMe,
                    top: 1200.0,
                    height: 600.0,
                },
            ],
        );
        page.scroll(820.0);
        assert_eq!(page.active_section(), SectionId::Home);
        page.scroll(1150.0);
        assert_eq!(page.active_section(), SectionId::AboutMe);
    }

    #[test]
    fn mount_rejects_empty_phrases() {
        let result = Page::mount(&SiteConfig::default(), vec![], 0, Layout::default());
        assert!(matches!(result, Err(ViewError::NoPhrases)));
    }

    #[test]
    fn typing_loop_runs_on_virtual_time() {
        let mut page = mount(&SiteConfig::default(), 0);
        assert_eq!(page.typed_text().text(), "");

        page.advance(69);
        assert_eq!(page.typed_text().text(), "");
        page.advance(1);
        assert_eq!(page.typed_text().text(), "h");
        page.advance(70);
        assert_eq!(page.typed_text().text(), "hi");

        // Notice completion, hold, delete twice, then move to the next phrase.
        page.advance(70 + 1500 + 40 + 40);
        assert_eq!(page.typed_text().text(), "");
        assert_eq!(page.typed_text().phrase_index(), 1);
        page.advance(500);
        assert_eq!(page.typed_text().text(), "y");
    }

    #[test]
    fn scroll_updates_active_section_and_reveals_once() {
        let mut page = mount(&unthrottled_config(), 0);

        let events = page.scroll(0.0);
        assert!(events.is_empty());
        assert_eq!(page.active_section(), SectionId::Home);

        let events = page.scroll(760.0);
        assert_eq!(page.active_section(), SectionId::AboutMe);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].element, "about-me-heading");

        page.scroll(0.0);
        assert!(page.scroll(760.0).is_empty());
        assert_eq!(page.reveals().state("about-me-heading"), Some(RevealState::Fired));
        assert_eq!(page.reveals().state("project-0"), Some(RevealState::Pending));
    }

    #[test]
    fn throttled_scroll_settles_on_trailing_evaluation() {
        let mut page = mount(&SiteConfig::default(), 0);
        page.scroll(0.0);
        page.advance(10);
        page.scroll(760.0);
        page.scroll(1350.0);
        assert_eq!(page.active_section(), SectionId::Home);

        page.advance(90);
        assert_eq!(page.active_section(), SectionId::Projects);
    }

    #[test]
    fn projects_expand_after_delay_and_collapse_immediately() {
        let mut page = mount(&SiteConfig::default(), 5);
        assert_eq!(page.projects().visible(), 3);

        page.toggle_projects();
        page.advance(1499);
        assert_eq!(page.projects().visible(), 3);
        assert!(page.projects().button_disabled());
        page.advance(1);
        assert_eq!(page.projects().visible(), 5);

        assert_eq!(page.toggle_projects(), ToggleEffect::Collapsed);
        assert_eq!(page.projects().visible(), 3);
        assert_eq!(page.projects().state(), ProjectsState::Collapsed);
    }

    #[test]
    fn nav_selection_closes_menu() {
        let mut page = mount(&SiteConfig::default(), 0);
        assert!(page.toggle_menu());
        let target = page.select_nav(&NAV_LINKS[5]);
        assert_eq!(target, ScrollTarget::Section(SectionId::Contact));
        assert!(!page.menu_open());
    }

    #[test]
    fn contact_notification_expires() {
        let mut page = mount(&SiteConfig::default(), 0);
        page.submit_contact(&AcceptingRelay, Err(MissingCredential(PUBLIC_KEY_VAR)))
            .unwrap();

        let toast = page.toasts().last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, CONFIG_ERROR_MESSAGE);

        page.advance(3999);
        assert!(page.toasts().last().is_some());
        page.advance(1);
        assert!(page.toasts().last().is_none());
    }

    #[test]
    fn contact_success_clears_form() {
        let mut page = mount(&SiteConfig::default(), 0);
        page.contact_mut().fields_mut().message = "hello".into();
        let credentials = RelayCredentials {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "k".into(),
        };
        let outcome = page.submit_contact(&AcceptingRelay, Ok(credentials)).unwrap();
        assert!(outcome.is_sent());
        assert!(page.contact().fields().is_empty());
        assert_eq!(page.toasts().last().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn unmount_cancels_timers_and_releases_observers() {
        let mut page = mount(&SiteConfig::default(), 5);
        page.toggle_projects();
        page.show_toast(Notification::success("hi"));
        assert_eq!(page.pending_timers(), 3);

        let teardown = page.unmount();
        assert_eq!(
            teardown,
            Teardown {
                timers_cancelled: 3,
                observers_released: 2,
            }
        );
    }
}
