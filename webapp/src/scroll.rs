use dioxus::prelude::*;
use gloo_console::error as console_error;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use common::{
    scroll::{ScrollAnimation, ScrollExecutor, ScrollRequest, scroll_target},
    section::Section,
    spy::{ScrollSpy, SectionBounds, SpySettings, ViewportProbe},
};

use crate::nav;

// roughly one frame at 60hz
const FRAME_MS: u32 = 16;

const SPY_INTERVAL_MS: u32 = 100;

// how close to the bottom of the document still counts as the end of the page
const PAGE_END_SLACK_PX: f64 = 2.0;

// WindowScroller
//
// animates window.scrollY towards an anchor.  each request runs as its own task;
// a newer request cancels whatever animation is still in flight
#[derive(Default)]
pub struct WindowScroller {
    animation: Option<Task>,
}

impl ScrollExecutor for WindowScroller {
    fn scroll_to(&mut self, request: &ScrollRequest) {
        if let Some(task) = self.animation.take() {
            task.cancel();
        }

        let request = request.clone();
        self.animation = Some(spawn(async move {
            animate(request).await;
        }));
    }
}

async fn animate(request: ScrollRequest) {
    let Some(window) = web_sys::window() else {
        console_error!("no global window exists");
        return;
    };

    let Some(document) = window.document() else {
        console_error!("window has no document");
        return;
    };

    let Some(root) = document.document_element() else {
        console_error!("document has no root element");
        return;
    };

    let Some(element) = document.get_element_by_id(request.anchor_id) else {
        console_error!(format!("no element for anchor {}", request.anchor_id));
        return;
    };

    let start = window.scroll_y().unwrap_or_default();
    let max_scroll = f64::from(root.scroll_height() - root.client_height());
    let target = scroll_target(
        start,
        element.get_bounding_client_rect().top(),
        request.offset_px,
        max_scroll,
    );

    debug!({ anchor = request.anchor_id, from = start, to = target }, "scrolling to anchor");

    let animation = ScrollAnimation::new(start, target, request.duration_ms);

    // without a performance clock, fall back to counting frames
    let clock = window.performance();
    let began = clock.as_ref().map(|p| p.now()).unwrap_or_default();
    let mut frames = 0u32;

    loop {
        let elapsed = match &clock {
            Some(p) => p.now() - began,
            None => f64::from(frames * FRAME_MS),
        };

        window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));

        if animation.is_finished(elapsed) {
            break;
        }

        frames += 1;
        TimeoutFuture::new(FRAME_MS).await;
    }
}

fn probe_viewport() -> Option<ViewportProbe> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let scroll_y = window.scroll_y().ok()?;

    let bounds = Section::all()
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.anchor_id())?;
            let rect = element.get_bounding_client_rect();

            Some(SectionBounds {
                section: *section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();

    // a page that fits the viewport is at its "end" without scrolling, which should
    // not make the last section active
    let at_page_end = scroll_y > 0.0
        && scroll_y + f64::from(root.client_height())
            >= f64::from(root.scroll_height()) - PAGE_END_SLACK_PX;

    Some(ViewportProbe {
        bounds,
        at_page_end,
    })
}

// use_scroll_spy
//
// polls the section geometry every SPY_INTERVAL_MS and reports changes to the
// nav controller.  the future is owned by the calling component and stops with it
pub fn use_scroll_spy(settings: SpySettings, offset_px: i32) {
    use_future(move || async move {
        let mut spy = ScrollSpy::new(settings, offset_px);

        if !spy.enabled() {
            debug!("scroll-spy disabled");
            return;
        }

        loop {
            if let Some(section) = probe_viewport().and_then(|probe| spy.observe(&probe)) {
                nav::on_scroll_spy_update(section);
            }

            TimeoutFuture::new(SPY_INTERVAL_MS).await;
        }
    });
}
