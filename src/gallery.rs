//! Pure renderers: data in, view trees out.

use crate::model::{Client, Project, Testimonial, Website};
use crate::view::{el, Action, Element, Node};

pub const NOT_FOUND: &str = "Project not found.";

pub fn project_cards(projects: &[Project]) -> Vec<Node> {
    projects.iter().map(project_card).collect()
}

fn project_card(p: &Project) -> Node {
    let mut card = el("article")
        .class("project-card")
        .attr("data-id", p.id.as_str())
        .attr("data-tech", p.primary_tech());
    if let Some(img) = p.images.first() {
        card = card.child(
            el("img")
                .attr("src", img.as_str())
                .attr("alt", p.title.as_str())
                .attr("loading", "lazy"),
        );
    }
    card.child(el("h3").text(p.title.as_str()))
        .child(el("p").class("project-desc").text(p.description.as_str()))
        .child(tech_badges(&p.tech))
        .child(
            el("div")
                .class("project-links")
                .child(external_link(&p.live, "Live Demo"))
                .child(external_link(&p.repo, "Code"))
                .child(
                    el("button")
                        .class("btn details-btn")
                        .attr("type", "button")
                        .action(&Action::ProjectDetails(p.id.clone()))
                        .text("Details"),
                ),
        )
        .into()
}

fn tech_badges(tech: &[String]) -> Element {
    el("ul")
        .class("tech-badges")
        .children(tech.iter().map(|t| Node::from(el("li").text(t.as_str()))))
}

fn external_link(href: &str, label: &str) -> Element {
    el("a")
        .class("btn")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

pub fn website_cards(websites: &[Website]) -> Vec<Node> {
    websites
        .iter()
        .map(|w| {
            el("a")
                .class("website-card")
                .attr("href", w.url.as_str())
                .attr("data-id", w.id.as_str())
                .action(&Action::WebsitePreview(w.id.clone()))
                .child(
                    el("img")
                        .attr("src", w.image.as_str())
                        .attr("alt", w.title.as_str())
                        .attr("loading", "lazy"),
                )
                .child(el("h3").text(w.title.as_str()))
                .child(tech_badges(&w.tech))
                .into()
        })
        .collect()
}

/// How a click on a website card should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickIntent {
    Preview,
    Navigate,
}

impl ClickIntent {
    pub fn from_modifiers(ctrl: bool, meta: bool) -> Self {
        if ctrl || meta {
            ClickIntent::Navigate
        } else {
            ClickIntent::Preview
        }
    }
}

/// Distinct technology tags in first-appearance order, with the number of
/// projects that list each one.
pub fn tech_counts(projects: &[Project]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for p in projects {
        let mut seen: Vec<&str> = Vec::new();
        for t in &p.tech {
            if seen.contains(&t.as_str()) {
                continue;
            }
            seen.push(t);
            match counts.iter_mut().find(|(name, _)| name == t) {
                Some((_, n)) => *n += 1,
                None => counts.push((t.clone(), 1)),
            }
        }
    }
    counts
}

pub fn tech_cards(projects: &[Project]) -> Vec<Node> {
    tech_counts(projects)
        .into_iter()
        .map(|(tech, n)| {
            let label = if n == 1 { "project" } else { "projects" };
            el("button")
                .class("tech-card")
                .attr("type", "button")
                .action(&Action::TechList(tech.clone()))
                .child(el("span").class("tech-name").text(tech))
                .child(el("span").class("tech-count").text(format!("{n} {label}")))
                .into()
        })
        .collect()
}

/// Tag buttons for the project filter: "all" followed by every distinct
/// primary technology. Exactly one button carries `active`.
pub fn filter_buttons(projects: &[Project], active: &str) -> Vec<Node> {
    let mut tags = vec!["all".to_string()];
    for p in projects {
        let t = p.primary_tech();
        if !t.is_empty() && !tags.contains(&t) {
            tags.push(t);
        }
    }
    tags.into_iter()
        .map(|t| {
            let class = if t == active { "filter-btn active" } else { "filter-btn" };
            el("button")
                .class(class)
                .attr("type", "button")
                .attr("data-filter", t.as_str())
                .action(&Action::Filter(t.clone()))
                .text(t)
                .into()
        })
        .collect()
}

pub fn featured_cards(projects: &[Project], n: usize) -> Vec<Node> {
    projects
        .iter()
        .take(n)
        .map(|p| {
            let summary = p
                .case_study
                .as_ref()
                .map(|c| c.challenge.as_str())
                .unwrap_or(p.description.as_str());
            el("div")
                .class("case-study-card")
                .attr("data-id", p.id.as_str())
                .child(el("h3").text(p.title.as_str()))
                .child(el("p").class("role").text(p.role.as_str()))
                .child(el("p").text(summary))
                .child(
                    el("button")
                        .class("btn")
                        .attr("type", "button")
                        .action(&Action::ProjectDetails(p.id.clone()))
                        .text("Read case study"),
                )
                .into()
        })
        .collect()
}

pub fn testimonial_list(items: &[Testimonial]) -> Vec<Node> {
    items
        .iter()
        .map(|t| {
            let cite = match &t.company {
                Some(c) => format!("{}, {}", t.author, c),
                None => t.author.clone(),
            };
            el("blockquote")
                .class("testimonial")
                .child(el("p").text(t.text.as_str()))
                .child(el("cite").text(cite))
                .into()
        })
        .collect()
}

pub fn client_list(clients: &[Client]) -> Vec<Node> {
    clients
        .iter()
        .map(|c| {
            el("a")
                .class("client-logo")
                .attr("href", c.url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(
                    el("img")
                        .attr("src", c.logo.as_str())
                        .attr("alt", c.name.as_str())
                        .attr("loading", "lazy"),
                )
                .into()
        })
        .collect()
}

pub fn project_detail(project: Option<&Project>) -> Node {
    let Some(p) = project else {
        return el("p").class("not-found").text(NOT_FOUND).into();
    };
    let mut body = el("div")
        .class("project-detail")
        .child(el("h2").text(p.title.as_str()))
        .child(el("p").class("role").text(p.role.as_str()))
        .child(el("p").text(p.description.as_str()))
        .child(tech_badges(&p.tech))
        .child(
            el("div")
                .class("gallery-images")
                .children(p.images.iter().map(|src| {
                    Node::from(
                        el("img")
                            .attr("src", src.as_str())
                            .attr("alt", p.title.as_str()),
                    )
                })),
        );
    if let Some(cs) = &p.case_study {
        body = body.child(
            el("section")
                .class("case-study")
                .child(el("h3").text("Challenge"))
                .child(el("p").text(cs.challenge.as_str()))
                .child(el("h3").text("Solution"))
                .child(el("p").text(cs.solution.as_str()))
                .child(el("h3").text("Results"))
                .child(el("p").text(cs.results.as_str())),
        );
    }
    body.child(
        el("div")
            .class("project-links")
            .child(external_link(&p.live, "Live Demo"))
            .child(external_link(&p.repo, "Code")),
    )
    .into()
}

pub fn tech_list(tech: &str, projects: &[Project]) -> Node {
    let matching: Vec<Node> = projects
        .iter()
        .filter(|p| p.tech.iter().any(|t| t == tech))
        .map(|p| {
            el("li")
                .child(
                    el("button")
                        .class("link-btn")
                        .attr("type", "button")
                        .action(&Action::ProjectDetails(p.id.clone()))
                        .text(p.title.as_str()),
                )
                .into()
        })
        .collect();
    let list = if matching.is_empty() {
        Node::from(el("p").class("not-found").text("No projects use this technology."))
    } else {
        el("ul").class("tech-projects").children(matching).into()
    };
    el("div")
        .class("tech-detail")
        .child(el("h2").text(format!("Projects using {tech}")))
        .child(list)
        .into()
}

pub fn website_preview(website: Option<&Website>) -> Node {
    let Some(w) = website else {
        return el("p").class("not-found").text("Website not found.").into();
    };
    el("div")
        .class("website-preview")
        .child(el("h2").text(w.title.as_str()))
        .child(
            el("iframe")
                .attr("src", w.url.as_str())
                .attr("title", w.title.as_str())
                .attr("loading", "lazy")
                .attr("sandbox", "allow-scripts allow-same-origin"),
        )
        .child(external_link(&w.url, "Open site"))
        .into()
}
