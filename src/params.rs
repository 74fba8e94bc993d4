/*
 * Parameters Module
 *
 * This module defines the tunable values of the particle field and the
 * page configuration that decides which effects are mounted. Everything
 * can be loaded from a JSON file; missing fields fall back to the defaults,
 * which describe the full portfolio page.
 */

use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

// Parameters for the particle field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Surface area (in surface units squared) allotted to each point.
    pub area_per_point: f32,
    pub max_points: usize,
    /// Largest absolute value of each velocity component.
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    /// Pairs closer than this are joined by a line.
    pub link_distance: f32,
    /// Line alpha for two coincident points.
    pub link_alpha: f32,
    pub color: [u8; 3],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_point: 15000.0,
            max_points: 80,
            max_speed: 0.25,
            min_radius: 0.5,
            max_radius: 2.5,
            min_opacity: 0.1,
            max_opacity: 0.6,
            link_distance: 150.0,
            link_alpha: 0.06,
            color: [0, 212, 255],
        }
    }
}

impl FieldParams {
    pub fn radius_range(&self) -> RangeInclusive<f32> {
        self.min_radius..=self.max_radius
    }

    pub fn opacity_range(&self) -> RangeInclusive<f32> {
        self.min_opacity..=self.max_opacity
    }

    pub fn speed_range(&self) -> RangeInclusive<f32> {
        -self.max_speed..=self.max_speed
    }

    // Slider range for the link distance in the control panel
    pub fn get_link_distance_range() -> RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.area_per_point.is_finite() && self.area_per_point > 0.0) {
            return Err(Error::InvalidParam("area_per_point must be > 0".into()));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(Error::InvalidParam("max_speed must be >= 0".into()));
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(Error::InvalidParam(format!(
                "radius range {}..={} is empty or non-positive",
                self.min_radius, self.max_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.min_opacity)
            || !(0.0..=1.0).contains(&self.max_opacity)
            || self.min_opacity > self.max_opacity
        {
            return Err(Error::InvalidParam(format!(
                "opacity range {}..={} must lie within 0..=1",
                self.min_opacity, self.max_opacity
            )));
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(Error::InvalidParam("link_distance must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err(Error::InvalidParam("link_alpha must lie within 0..=1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// Pause once a word is fully typed.
    pub hold_ms: u64,
    /// Pause after a word is fully deleted.
    pub next_word_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: [
                "Data Scientist",
                "AI Engineer",
                "Full-Stack Developer",
                "Operations Analyst",
                "Problem Solver",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_ms: 2000,
            next_word_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillBarConfig {
    pub label: String,
    /// Target width in percent.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    /// Page-space offset of the section's top edge.
    pub top: f32,
    pub height: f32,
    #[serde(default)]
    pub skill_bars: Vec<SkillBarConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterConfig {
    pub target: i64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub links: Vec<String>,
    pub has_hamburger: bool,
    /// Path of the page being shown, used to pick the active link.
    pub current_path: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            links: ["index.html", "projects.html", "experience.html", "contact.html"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            has_hamburger: true,
            current_path: "/".to_string(),
        }
    }
}

// Which effects the page carries, and how they are set up
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `None` means the page has no particle canvas.
    pub particles: Option<FieldParams>,
    pub typewriter: Option<TypewriterConfig>,
    pub navbar: Option<NavbarConfig>,
    pub sections: Vec<SectionConfig>,
    pub counters: Vec<CounterConfig>,
    pub counter_duration_ms: u64,
    pub glow_orb: bool,
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        let bar = |label: &str, width: f32| SkillBarConfig {
            label: label.to_string(),
            width,
        };
        Self {
            particles: Some(FieldParams::default()),
            typewriter: Some(TypewriterConfig::default()),
            navbar: Some(NavbarConfig::default()),
            sections: vec![
                SectionConfig {
                    title: "About".to_string(),
                    top: 700.0,
                    height: 500.0,
                    skill_bars: Vec::new(),
                },
                SectionConfig {
                    title: "Skills".to_string(),
                    top: 1300.0,
                    height: 600.0,
                    skill_bars: vec![
                        bar("Python", 95.0),
                        bar("Machine Learning", 90.0),
                        bar("Rust", 75.0),
                        bar("SQL", 85.0),
                    ],
                },
                SectionConfig {
                    title: "Projects".to_string(),
                    top: 2000.0,
                    height: 700.0,
                    skill_bars: Vec::new(),
                },
            ],
            counters: vec![
                CounterConfig {
                    target: 5,
                    prefix: String::new(),
                    suffix: "+".to_string(),
                    top: 550.0,
                    height: 80.0,
                },
                CounterConfig {
                    target: 150,
                    prefix: String::new(),
                    suffix: "+".to_string(),
                    top: 550.0,
                    height: 80.0,
                },
                CounterConfig {
                    target: 99,
                    prefix: String::new(),
                    suffix: "%".to_string(),
                    top: 550.0,
                    height: 80.0,
                },
            ],
            counter_duration_ms: 2000,
            glow_orb: true,
            reveal_threshold: 0.1,
        }
    }
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(field) = &self.particles {
            field.validate()?;
        }
        if let Some(typewriter) = &self.typewriter {
            if typewriter.words.is_empty() {
                return Err(Error::InvalidParam("typewriter needs at least one word".into()));
            }
            let total = typewriter
                .type_delay_ms
                .saturating_add(typewriter.delete_delay_ms)
                .saturating_add(typewriter.hold_ms)
                .saturating_add(typewriter.next_word_ms);
            if total == 0 {
                return Err(Error::InvalidParam("typewriter delays cannot all be zero".into()));
            }
        }
        for section in &self.sections {
            if !(section.height > 0.0) {
                return Err(Error::InvalidParam(format!(
                    "section '{}' must have a positive height",
                    section.title
                )));
            }
            for bar in &section.skill_bars {
                if !(0.0..=100.0).contains(&bar.width) {
                    return Err(Error::InvalidParam(format!(
                        "skill bar '{}' width {} is outside 0..=100",
                        bar.label, bar.width
                    )));
                }
            }
        }
        if self.counter_duration_ms == 0 {
            return Err(Error::InvalidParam("counter_duration_ms must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::InvalidParam("reveal_threshold must lie within 0..=1".into()));
        }
        Ok(())
    }
}
