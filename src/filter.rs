use crate::model::Project;

pub const ALL: &str = "all";

/// Current tag filter and search query for the project grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    tag: String,
    query: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            tag: ALL.to_string(),
            query: String::new(),
        }
    }
}

impl ProjectFilter {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.trim().to_lowercase();
        if self.tag.is_empty() {
            self.tag = ALL.to_string();
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    pub fn matches(&self, p: &Project) -> bool {
        let tag_ok = self.tag == ALL || p.primary_tech() == self.tag;
        tag_ok && (self.query.is_empty() || self.text_matches(p))
    }

    fn text_matches(&self, p: &Project) -> bool {
        let q = self.query.as_str();
        p.title.to_lowercase().contains(q)
            || p.description.to_lowercase().contains(q)
            || p.tags.iter().any(|t| t.to_lowercase().contains(q))
    }

    /// `(id, visible)` for every project, in order. The slice is not touched.
    pub fn visibility<'a>(&self, projects: &'a [Project]) -> Vec<(&'a str, bool)> {
        projects
            .iter()
            .map(|p| (p.id.as_str(), self.matches(p)))
            .collect()
    }
}

/// Trailing-edge debounce keyed by tickets: every new value supersedes the
/// previous one, and only the newest ticket releases its value when its
/// timer fires.
#[derive(Debug)]
pub struct Debounce<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }
}

impl<T> Debounce<T> {
    pub fn schedule(&mut self, value: T) -> u64 {
        self.latest += 1;
        self.pending = Some(value);
        self.latest
    }

    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.latest {
            self.pending.take()
        } else {
            None
        }
    }
}
