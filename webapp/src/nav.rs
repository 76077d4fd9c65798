use dioxus::prelude::*;

use common::{nav::NavController, scroll::ScrollSettings, section::Section};

use crate::scroll::WindowScroller;

// the single owner of the navigation state
//
// clicks and the scroll-spy both write through the helpers below, and the nav bar
// is the only reader
pub static NAV: GlobalSignal<NavController<WindowScroller>> =
    Signal::global(|| NavController::new(WindowScroller::default(), ScrollSettings::default()));

pub fn configure(settings: ScrollSettings) {
    NAV.with_mut(|nav| nav.set_settings(settings));
}

pub fn select_section(section: Section) {
    NAV.with_mut(|nav| nav.select_section(section));
}

pub fn on_scroll_spy_update(section: Section) {
    NAV.with_mut(|nav| nav.on_scroll_spy_update(section));
}

pub fn toggle_menu() {
    NAV.with_mut(|nav| nav.toggle_menu());
}

pub fn is_active(section: Section) -> bool {
    NAV.read().active() == section
}

pub fn menu_expanded() -> bool {
    NAV.read().menu_expanded()
}
