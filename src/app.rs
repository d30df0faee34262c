//! Page-level state: the loaded data, the project filter and the modals.

use crate::filter::ProjectFilter;
use crate::gallery;
use crate::loader::Dataset;
use crate::modal::{ModalKind, ModalSet};
use crate::view::{Action, Node};

/// Everything the page renders from the dataset, one entry per container.
pub struct Gallery {
    pub projects: Vec<Node>,
    pub websites: Vec<Node>,
    pub tech: Vec<Node>,
    pub filters: Vec<Node>,
    pub featured: Vec<Node>,
    pub testimonials: Vec<Node>,
    pub clients: Vec<Node>,
}

pub struct ModalView {
    pub kind: ModalKind,
    pub content: Node,
}

/// What the page has to do after an [`Action`].
pub enum Effect {
    ShowModal(ModalView),
    Refilter,
}

pub struct Portfolio {
    data: Dataset,
    filter: ProjectFilter,
    modals: ModalSet,
    featured_count: usize,
}

impl Portfolio {
    pub fn new(data: Dataset, featured_count: usize) -> Self {
        Self {
            data,
            filter: ProjectFilter::default(),
            modals: ModalSet::default(),
            featured_count,
        }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn modals(&self) -> &ModalSet {
        &self.modals
    }

    pub fn modals_mut(&mut self) -> &mut ModalSet {
        &mut self.modals
    }

    pub fn gallery(&self) -> Gallery {
        let d = &self.data;
        Gallery {
            projects: gallery::project_cards(&d.projects),
            websites: gallery::website_cards(&d.websites),
            tech: gallery::tech_cards(&d.projects),
            filters: self.filter_buttons(),
            featured: gallery::featured_cards(&d.projects, self.featured_count),
            testimonials: gallery::testimonial_list(&d.testimonials),
            clients: gallery::client_list(&d.clients),
        }
    }

    pub fn filter_buttons(&self) -> Vec<Node> {
        gallery::filter_buttons(&self.data.projects, self.filter.tag())
    }

    pub fn open_project(&mut self, id: &str) -> ModalView {
        let project = self.data.projects.iter().find(|p| p.id == id);
        if project.is_none() {
            log::warn!("no project with id {id:?}");
        }
        self.show(ModalKind::Project, gallery::project_detail(project))
    }

    pub fn open_tech(&mut self, tech: &str) -> ModalView {
        let content = gallery::tech_list(tech, &self.data.projects);
        self.show(ModalKind::Tech, content)
    }

    pub fn open_website(&mut self, id: &str) -> ModalView {
        let website = self.data.websites.iter().find(|w| w.id == id);
        self.show(ModalKind::Website, gallery::website_preview(website))
    }

    fn show(&mut self, kind: ModalKind, content: Node) -> ModalView {
        self.modals.open(kind);
        ModalView { kind, content }
    }

    pub fn dispatch(&mut self, action: &Action) -> Effect {
        match action {
            Action::ProjectDetails(id) => {
                // A project opened from the tech list replaces it.
                self.modals.close(ModalKind::Tech);
                Effect::ShowModal(self.open_project(id))
            }
            Action::TechList(tech) => Effect::ShowModal(self.open_tech(tech)),
            Action::WebsitePreview(id) => Effect::ShowModal(self.open_website(id)),
            Action::Filter(tag) => {
                self.filter.set_tag(tag);
                Effect::Refilter
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
    }

    /// Which project cards should be shown under the current filter.
    pub fn visibility(&self) -> Vec<(&str, bool)> {
        self.filter.visibility(&self.data.projects)
    }
}
