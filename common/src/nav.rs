use tracing::debug;

use crate::{
    scroll::{ScrollExecutor, ScrollSettings},
    section::Section,
};

// NavState
//
// the active section and whether the compact menu is open.  these are the only
// mutable bits of the page, and nothing outside the controller writes them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_expanded: bool,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            active: Section::first(),
            menu_expanded: false,
        }
    }
}

// NavController
//
// there are two producers for the active section: clicks on a nav link (which also
// scroll the page) and the scroll-spy (which only reports what is already in view).
// both funnel through here, and whichever wrote last wins.  during a click-driven
// jump the spy will briefly report the sections in between, but both paths converge
// on the same destination once the animation settles
pub struct NavController<E: ScrollExecutor> {
    state: NavState,
    settings: ScrollSettings,
    executor: E,
}

impl<E: ScrollExecutor> NavController<E> {
    pub fn new(executor: E, settings: ScrollSettings) -> Self {
        NavController {
            state: NavState::default(),
            settings,
            executor,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn active(&self) -> Section {
        self.state.active
    }

    pub fn menu_expanded(&self) -> bool {
        self.state.menu_expanded
    }

    pub fn settings(&self) -> ScrollSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: ScrollSettings) {
        self.settings = settings;
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    // jump to a section
    //
    // selecting a destination always closes the compact menu; on wide screens the
    // menu is never shown, so this only has a visible effect in the compact layout
    pub fn select_section(&mut self, section: Section) {
        debug!({ section = %section }, "selecting section");

        self.state.active = section;
        self.state.menu_expanded = false;

        let request = self.settings.request(section);
        self.executor.scroll_to(&request);
    }

    // labels that do not name a section are ignored
    pub fn select_label(&mut self, label: &str) {
        match Section::from_label(label) {
            Some(section) => self.select_section(section),
            None => debug!({ label = label }, "ignoring unknown section"),
        }
    }

    pub fn on_scroll_spy_update(&mut self, section: Section) {
        if self.state.active != section {
            debug!({ section = %section }, "scroll-spy moved active section");
        }

        self.state.active = section;
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_expanded = !self.state.menu_expanded;
    }
}
