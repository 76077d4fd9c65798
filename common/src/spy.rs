use serde::{Deserialize, Serialize};

use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpySettings {
    pub enabled: bool,
    // fall back to the nearest section when none straddles the reference line
    pub proximity: bool,
}

impl Default for SpySettings {
    fn default() -> Self {
        SpySettings {
            enabled: true,
            proximity: true,
        }
    }
}

// viewport-relative bounds of a section element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportProbe {
    pub bounds: Vec<SectionBounds>,
    pub at_page_end: bool,
}

// section "in view" for a reference line `line` pixels below the viewport top
//
// short trailing sections can never reach the line, so hitting the bottom of the
// page counts as being on the last one
pub fn section_in_view(probe: &ViewportProbe, line: f64, proximity: bool) -> Option<Section> {
    if probe.at_page_end && !probe.bounds.is_empty() {
        return Some(Section::last());
    }

    let inside = probe
        .bounds
        .iter()
        .find(|b| b.top <= line && b.bottom > line)
        .map(|b| b.section);

    if inside.is_some() || !proximity {
        return inside;
    }

    probe
        .bounds
        .iter()
        .min_by(|a, b| (a.top - line).abs().total_cmp(&(b.top - line).abs()))
        .map(|b| b.section)
}

// ScrollSpy
//
// turns a stream of viewport probes into a stream of section changes.  repeated
// probes that land on the same section produce nothing, so the consumer only
// writes when something actually moved
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    settings: SpySettings,
    line: f64,
    last: Option<Section>,
}

impl ScrollSpy {
    // offset_px is the scroll offset used for jumps, so the reference line sits
    // exactly where a jump would leave the anchor
    pub fn new(settings: SpySettings, offset_px: i32) -> Self {
        ScrollSpy {
            settings,
            line: f64::from(-offset_px),
            last: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn reference_line(&self) -> f64 {
        self.line
    }

    pub fn observe(&mut self, probe: &ViewportProbe) -> Option<Section> {
        if !self.settings.enabled {
            return None;
        }

        let current = section_in_view(probe, self.line, self.settings.proximity)?;

        if self.last == Some(current) {
            return None;
        }

        self.last = Some(current);
        Some(current)
    }
}
