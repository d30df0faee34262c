//! Small stateful page widgets.

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a link always collapses the menu.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// FAQ entries, each expanded or collapsed on its own.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    pub fn new(entries: usize) -> Self {
        Self {
            expanded: vec![false; entries],
        }
    }

    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let e = self.expanded.get_mut(index)?;
        *e = !*e;
        Some(*e)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }
}

/// Horizontal auto-scroll for the testimonial strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    step: f64,
    offset: f64,
}

impl Carousel {
    pub fn new(step: f64) -> Self {
        Self { step, offset: 0.0 }
    }

    /// Next scroll offset; wraps to 0 once it reaches `scroll_width`.
    pub fn advance(&mut self, scroll_width: f64) -> f64 {
        self.offset += self.step;
        if self.offset >= scroll_width {
            self.offset = 0.0;
        }
        self.offset
    }
}
