/*
 * Navbar Module
 *
 * Scroll state, hamburger menu toggling and the active link of the page
 * navigation bar.
 */

use log::debug;

use crate::params::NavbarConfig;

/// Scroll offset past which the navbar switches to its scrolled look.
pub const SCROLLED_OFFSET: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

pub struct Navbar {
    pub links: Vec<NavLink>,
    has_hamburger: bool,
    scrolled: bool,
    menu_open: bool,
    attached: bool,
}

/// File name of the page at `path`, defaulting to `index.html` for directory paths.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "index.html",
    }
}

impl Navbar {
    pub fn new(config: &NavbarConfig) -> Self {
        let current = current_page(&config.current_path);
        let links = config
            .links
            .iter()
            .map(|href| NavLink {
                href: href.clone(),
                active: href == current,
            })
            .collect();

        Self {
            links,
            has_hamburger: config.has_hamburger,
            scrolled: false,
            menu_open: false,
            attached: true,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if self.attached {
            self.scrolled = scroll_y > SCROLLED_OFFSET;
        }
    }

    // Hamburger click: opens or closes the links and flips the hamburger icon
    pub fn toggle_menu(&mut self) {
        if self.attached && self.has_hamburger {
            self.menu_open = !self.menu_open;
            debug!("menu {}", if self.menu_open { "opened" } else { "closed" });
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_hamburger_active(&self) -> bool {
        self.menu_open
    }

    pub fn has_hamburger(&self) -> bool {
        self.has_hamburger
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    pub fn dispose(&mut self) {
        self.attached = false;
    }
}
