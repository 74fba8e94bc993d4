/*
 * Scroll Reveal Module
 *
 * Works out which page sections intersect the viewport and reveals them
 * once enough of each is on screen. Revealing a section also fills its
 * skill bars to their target widths. A revealed section stays revealed.
 */

use log::debug;

use crate::params::SectionConfig;

/// Fraction of an element's height inside the viewport.
pub fn visible_ratio(top: f32, height: f32, viewport_top: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let overlap_top = top.max(viewport_top);
    let overlap_bottom = (top + height).min(viewport_top + viewport_height);
    ((overlap_bottom - overlap_top) / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    pub label: String,
    pub target_width: f32,
    /// Width currently applied, in percent.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub top: f32,
    pub height: f32,
    pub visible: bool,
    pub skill_bars: Vec<SkillBar>,
}

impl Section {
    fn reveal(&mut self) {
        self.visible = true;
        for bar in &mut self.skill_bars {
            bar.width = bar.target_width;
        }
    }
}

pub struct ScrollReveal {
    pub sections: Vec<Section>,
    threshold: f32,
    observing: bool,
}

impl ScrollReveal {
    pub fn new(sections: &[SectionConfig], threshold: f32) -> Self {
        let sections = sections
            .iter()
            .map(|s| Section {
                title: s.title.clone(),
                top: s.top,
                height: s.height,
                visible: false,
                skill_bars: s
                    .skill_bars
                    .iter()
                    .map(|b| SkillBar {
                        label: b.label.clone(),
                        target_width: b.width,
                        width: 0.0,
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections,
            threshold,
            observing: true,
        }
    }

    /// Check every hidden section against the viewport. Returns how many were revealed.
    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32) -> usize {
        if !self.observing {
            return 0;
        }

        let mut revealed = 0;
        for section in self.sections.iter_mut().filter(|s| !s.visible) {
            let ratio = visible_ratio(section.top, section.height, viewport_top, viewport_height);
            if ratio > 0.0 && ratio >= self.threshold {
                section.reveal();
                debug!("revealed section '{}'", section.title);
                revealed += 1;
            }
        }
        revealed
    }

    pub fn dispose(&mut self) {
        self.observing = false;
    }
}
