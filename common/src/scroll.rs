use serde::{Deserialize, Serialize};

use crate::section::Section;

pub const DEFAULT_SCROLL_DURATION_MS: u32 = 500;

// the header is fixed and 96px tall, so anchors land just below it
pub const DEFAULT_SCROLL_OFFSET_PX: i32 = -96;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub duration_ms: u32,
    pub offset_px: i32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            duration_ms: DEFAULT_SCROLL_DURATION_MS,
            offset_px: DEFAULT_SCROLL_OFFSET_PX,
        }
    }
}

impl ScrollSettings {
    pub fn request(&self, section: Section) -> ScrollRequest {
        ScrollRequest {
            anchor_id: section.anchor_id(),
            duration_ms: self.duration_ms,
            offset_px: self.offset_px,
        }
    }
}

// a single smooth-scroll instruction handed to whatever is driving the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor_id: &'static str,
    pub duration_ms: u32,
    pub offset_px: i32,
}

// ScrollExecutor
//
// the navigation controller does not know how the page actually scrolls.  the
// webapp animates the window, the tests just record what was asked for.  requests
// are fire-and-forget: a newer request is free to supersede an unfinished one
pub trait ScrollExecutor {
    fn scroll_to(&mut self, request: &ScrollRequest);
}

// absolute scroll position that puts an element `offset_px` from the viewport top
//
// element_top is relative to the viewport (i.e. getBoundingClientRect().top)
pub fn scroll_target(current_scroll: f64, element_top: f64, offset_px: i32, max_scroll: f64) -> f64 {
    let target = current_scroll + element_top + f64::from(offset_px);

    target.clamp(0.0, max_scroll.max(0.0))
}

// standard ease-in-out quadratic, t in [0, 1]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);

    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        ScrollAnimation {
            from,
            to,
            duration_ms,
        }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }

        let progress = elapsed_ms / f64::from(self.duration_ms);

        self.from + (self.to - self.from) * ease_in_out_quad(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.duration_ms == 0 || elapsed_ms >= f64::from(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_header() {
        let request = ScrollSettings::default().request(Section::Projects);

        assert_eq!(
            request,
            ScrollRequest {
                anchor_id: "projects",
                duration_ms: 500,
                offset_px: -96,
            }
        );
    }

    #[test]
    fn target_accounts_for_offset() {
        // element 1000px below the viewport top while scrolled to 200
        assert_eq!(scroll_target(200.0, 1000.0, -96, 5000.0), 1104.0);
    }

    #[test]
    fn target_is_clamped() {
        assert_eq!(scroll_target(0.0, 10.0, -96, 5000.0), 0.0);
        assert_eq!(scroll_target(4000.0, 2000.0, -96, 5000.0), 5000.0);
        assert_eq!(scroll_target(0.0, 500.0, -96, -1.0), 0.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn animation_lands_on_target() {
        let anim = ScrollAnimation::new(100.0, 900.0, 500);

        assert_eq!(anim.position_at(0.0), 100.0);
        assert_eq!(anim.position_at(250.0), 500.0);
        assert_eq!(anim.position_at(500.0), 900.0);
        assert_eq!(anim.position_at(750.0), 900.0);
        assert!(!anim.is_finished(499.0));
        assert!(anim.is_finished(500.0));
    }

    #[test]
    fn zero_duration_jumps() {
        let anim = ScrollAnimation::new(0.0, 300.0, 0);

        assert!(anim.is_finished(0.0));
        assert_eq!(anim.position_at(0.0), 300.0);
    }
}
