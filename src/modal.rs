/// The overlay panels on the page, each mapped to a DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Project,
    Tech,
    Website,
}

impl ModalKind {
    pub const ALL: [ModalKind; 3] = [ModalKind::Project, ModalKind::Tech, ModalKind::Website];

    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::Project => "project-modal",
            ModalKind::Tech => "tech-modal",
            ModalKind::Website => "website-modal",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.element_id() == id)
    }

    fn index(self) -> usize {
        match self {
            ModalKind::Project => 0,
            ModalKind::Tech => 1,
            ModalKind::Website => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Visibility of every modal. `close` and `backdrop_click` report whether a
/// modal was hidden, and `escape` lists the kinds it hid.
#[derive(Debug, Clone, Default)]
pub struct ModalSet {
    states: [Visibility; 3],
}

impl ModalSet {
    pub fn state(&self, kind: ModalKind) -> Visibility {
        self.states[kind.index()]
    }

    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.state(kind) == Visibility::Visible
    }

    pub fn any_visible(&self) -> bool {
        self.states.contains(&Visibility::Visible)
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.states[kind.index()] = Visibility::Visible;
    }

    pub fn close(&mut self, kind: ModalKind) -> bool {
        let was = self.is_visible(kind);
        self.states[kind.index()] = Visibility::Hidden;
        was
    }

    /// Escape hides whatever is showing.
    pub fn escape(&mut self) -> Vec<ModalKind> {
        ModalKind::ALL
            .into_iter()
            .filter(|k| self.close(*k))
            .collect()
    }

    /// A click whose target is the overlay itself (not the content box).
    pub fn backdrop_click(&mut self, kind: ModalKind, target_is_overlay: bool) -> bool {
        target_is_overlay && self.close(kind)
    }
}
