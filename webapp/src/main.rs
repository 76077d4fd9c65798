#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use common::theme::ThemeName;

mod components;

mod nav;

mod scroll;

mod sections;

mod styles;

mod portfolio;
use portfolio::{Portfolio, ThemedPortfolio};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the router only picks a theme variant; everything else on the page is
// in-page anchored scrolling handled by nav.rs
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Portfolio {},
    #[route("/theme/:theme")]
    ThemedPortfolio { theme: ThemeName },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{styles::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
