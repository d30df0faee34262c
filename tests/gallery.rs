use folio_wasm::app::{Effect, Portfolio};
use folio_wasm::gallery::{self, ClickIntent, NOT_FOUND};
use folio_wasm::loader::{DataSource, Dataset};
use folio_wasm::modal::ModalKind;
use folio_wasm::view::{Action, Node};

fn fallback_app() -> Portfolio {
    Portfolio::new(Dataset::resolve(Err(anyhow::anyhow!("offline"))), 3)
}

fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.as_element().and_then(|e| e.get_attr(name))
}

#[test]
fn fetch_failure_renders_fallback_counts() {
    let app = fallback_app();
    assert_eq!(app.data().source, DataSource::Fallback);
    let g = app.gallery();
    assert_eq!(g.projects.len(), 2);
    assert_eq!(g.websites.len(), 2);
    assert_eq!(g.testimonials.len(), app.data().testimonials.len());
    assert_eq!(g.clients.len(), app.data().clients.len());
}

#[test]
fn parse_failure_discards_both_collections() {
    let good_websites = r#"[{"id":"x","title":"X","url":"https://x.test"}]"#;
    let data = Dataset::resolve(Ok(("{not json".to_string(), good_websites.to_string())));
    assert_eq!(data.source, DataSource::Fallback);
    assert_eq!(data.websites.len(), 2);
    assert_ne!(data.websites[0].id, "x");
}

#[test]
fn network_data_is_parsed_with_optional_fields() {
    let projects = r#"[
        {"id":"p1","title":"One","tech":["Rust"],"caseStudy":{"challenge":"c","solution":"s","results":"r"}},
        {"id":"p2","title":"Two"}
    ]"#;
    let websites = r#"[{"id":"w1","title":"W","url":"https://w.test","image":"w.png","tech":[]}]"#;
    let data = Dataset::resolve(Ok((projects.to_string(), websites.to_string())));
    assert_eq!(data.source, DataSource::Network);
    assert_eq!(data.projects.len(), 2);
    assert_eq!(data.projects[0].case_study.as_ref().map(|c| c.results.as_str()), Some("r"));
    assert!(data.projects[1].tech.is_empty());
    assert_eq!(data.projects[1].primary_tech(), "");
    assert_eq!(data.websites[0].url, "https://w.test");
    assert!(!data.testimonials.is_empty());
}

#[test]
fn project_cards_preserve_order_and_carry_actions() {
    let app = fallback_app();
    let cards = gallery::project_cards(&app.data().projects);
    let ids: Vec<&str> = cards.iter().filter_map(|c| attr(c, "data-id")).collect();
    let expected: Vec<&str> = app.data().projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert_eq!(attr(&cards[0], "data-tech"), Some("react"));

    let details = cards[0].find_class("details-btn");
    assert_eq!(details.len(), 1);
    let action = Action::decode(
        details[0].get_attr("data-action").unwrap(),
        details[0].get_attr("data-value").unwrap(),
    );
    assert_eq!(action, Some(Action::ProjectDetails(expected[0].to_string())));
}

#[test]
fn tech_counts_follow_first_appearance() {
    let app = fallback_app();
    let counts = gallery::tech_counts(&app.data().projects);
    let names: Vec<&str> = counts.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        ["React", "Node.js", "MongoDB", "Shopify", "JavaScript", "CSS"]
    );
    assert!(counts.iter().all(|(_, n)| *n == 1));

    let cards = gallery::tech_cards(&app.data().projects);
    assert_eq!(cards.len(), counts.len());
    assert_eq!(cards[0].text_content(), "React1 project");
}

#[test]
fn featured_takes_the_first_n() {
    let app = fallback_app();
    assert_eq!(gallery::featured_cards(&app.data().projects, 3).len(), 2);
    assert_eq!(gallery::featured_cards(&app.data().projects, 1).len(), 1);
    assert_eq!(app.gallery().featured.len(), 2);
}

#[test]
fn filter_buttons_mark_exactly_one_active() {
    let mut app = fallback_app();
    let active = |nodes: &[Node]| -> Vec<String> {
        nodes
            .iter()
            .filter_map(Node::as_element)
            .filter(|e| e.has_class("active"))
            .filter_map(|e| e.get_attr("data-filter").map(str::to_string))
            .collect()
    };
    assert_eq!(active(&app.filter_buttons()), ["all"]);
    assert!(matches!(
        app.dispatch(&Action::Filter("shopify".into())),
        Effect::Refilter
    ));
    assert_eq!(active(&app.filter_buttons()), ["shopify"]);
    let shown: Vec<&str> = app
        .visibility()
        .into_iter()
        .filter(|(_, v)| *v)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(shown, ["shopify-theme"]);
}

#[test]
fn unknown_project_renders_not_found() {
    let mut app = fallback_app();
    let view = app.open_project("does-not-exist");
    assert_eq!(view.kind, ModalKind::Project);
    assert_eq!(view.content.text_content(), NOT_FOUND);
    assert!(app.modals().is_visible(ModalKind::Project));
}

#[test]
fn project_modal_shows_case_study() {
    let mut app = fallback_app();
    let view = app.open_project("ecommerce-dashboard");
    let text = view.content.text_content();
    assert!(text.contains("E-commerce Dashboard"));
    assert!(text.contains("Challenge"));
    assert!(!text.contains(NOT_FOUND));
}

#[test]
fn tech_list_then_project_swaps_modals() {
    let mut app = fallback_app();
    let Effect::ShowModal(view) = app.dispatch(&Action::TechList("CSS".into())) else {
        panic!("expected a modal");
    };
    assert_eq!(view.kind, ModalKind::Tech);
    assert!(view.content.text_content().contains("Custom Shopify Theme"));
    assert!(app.modals().is_visible(ModalKind::Tech));

    app.dispatch(&Action::ProjectDetails("shopify-theme".into()));
    assert!(!app.modals().is_visible(ModalKind::Tech));
    assert!(app.modals().is_visible(ModalKind::Project));
}

#[test]
fn website_preview_and_click_intent() {
    let mut app = fallback_app();
    let view = app.open_website("bakery");
    assert_eq!(view.kind, ModalKind::Website);
    assert!(view.content.text_content().contains("Neighbourhood Bakery"));
    assert!(app.open_website("nope").content.text_content().contains("not found"));

    assert_eq!(ClickIntent::from_modifiers(false, false), ClickIntent::Preview);
    assert_eq!(ClickIntent::from_modifiers(true, false), ClickIntent::Navigate);
    assert_eq!(ClickIntent::from_modifiers(false, true), ClickIntent::Navigate);

    let cards = gallery::website_cards(&app.data().websites);
    assert_eq!(attr(&cards[0], "href"), Some(app.data().websites[0].url.as_str()));
}

#[test]
fn modal_dismissal() {
    let mut app = fallback_app();
    app.open_project("ecommerce-dashboard");
    app.open_website("studio");

    let modals = app.modals_mut();
    // A click inside the content box is not a backdrop click.
    assert!(!modals.backdrop_click(ModalKind::Website, false));
    assert!(modals.is_visible(ModalKind::Website));

    assert!(modals.close(ModalKind::Website));
    assert!(modals.is_visible(ModalKind::Project));
    assert!(!modals.close(ModalKind::Website));

    assert!(modals.backdrop_click(ModalKind::Project, true));
    assert!(!modals.any_visible());

    app.open_project("shopify-theme");
    app.open_tech("CSS");
    let closed = app.modals_mut().escape();
    assert_eq!(closed, [ModalKind::Project, ModalKind::Tech]);
    assert!(!app.modals().any_visible());
    assert!(app.modals_mut().escape().is_empty());
}

#[test]
fn modal_ids_round_trip() {
    for kind in ModalKind::ALL {
        assert_eq!(ModalKind::from_element_id(kind.element_id()), Some(kind));
    }
    assert_eq!(ModalKind::from_element_id("particle-canvas"), None);
}
