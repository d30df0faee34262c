use folio_wasm::filter::{Debounce, ProjectFilter};
use folio_wasm::model::Project;

fn project(id: &str, title: &str, tech: &[&str], tags: &[&str], description: &str) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        live: String::new(),
        repo: String::new(),
        images: Vec::new(),
        role: String::new(),
        case_study: None,
    }
}

fn sample() -> Vec<Project> {
    vec![
        project("a", "Sales Dashboard", &["React", "Node.js"], &["charts"], "Realtime KPIs."),
        project("b", "Blog Engine", &["Node.js", "React"], &["cms"], "Markdown blog."),
        project("c", "Store Front", &["Shopify"], &["dashboard"], "Theme work."),
        project("d", "Admin Panel", &["React"], &["admin"], "Internal DASHBOARD tooling."),
        project("e", "Landing Page", &["HTML"], &["marketing"], "Single page."),
    ]
}

fn visible(f: &ProjectFilter, projects: &[Project]) -> Vec<String> {
    f.visibility(projects)
        .into_iter()
        .filter(|(_, v)| *v)
        .map(|(id, _)| id.to_string())
        .collect()
}

#[test]
fn defaults_show_everything() {
    let projects = sample();
    let f = ProjectFilter::default();
    assert_eq!(f.tag(), "all");
    assert_eq!(f.query(), "");
    assert_eq!(visible(&f, &projects), ["a", "b", "c", "d", "e"]);
}

#[test]
fn tag_filter_uses_primary_technology() {
    let projects = sample();
    let mut f = ProjectFilter::default();
    f.set_tag("react");
    // "b" lists React second, so it is hidden.
    assert_eq!(visible(&f, &projects), ["a", "d"]);
    f.set_tag("React");
    assert_eq!(visible(&f, &projects), ["a", "d"]);
    f.set_tag("vue");
    assert!(visible(&f, &projects).is_empty());
}

#[test]
fn query_matches_title_tags_or_description() {
    let projects = sample();
    let mut f = ProjectFilter::default();
    f.set_query("dashboard");
    assert_eq!(visible(&f, &projects), ["a", "c", "d"]);
    f.set_query("  MARKDOWN ");
    assert_eq!(visible(&f, &projects), ["b"]);
    f.set_query("");
    assert_eq!(visible(&f, &projects).len(), 5);
}

#[test]
fn tag_and_query_combine() {
    let projects = sample();
    let mut f = ProjectFilter::default();
    f.set_tag("react");
    f.set_query("dashboard");
    assert_eq!(visible(&f, &projects), ["a", "d"]);
    f.set_tag("all");
    assert_eq!(visible(&f, &projects), ["a", "c", "d"]);
}

#[test]
fn filtering_never_reorders_or_mutates() {
    let projects = sample();
    let copy = projects.clone();
    let mut f = ProjectFilter::default();
    f.set_tag("shopify");
    let ids: Vec<&str> = f.visibility(&projects).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    assert_eq!(projects, copy);
}

#[test]
fn debounce_releases_only_the_latest_value() {
    let mut d = Debounce::default();
    let t1 = d.schedule("d".to_string());
    let t2 = d.schedule("da".to_string());
    let t3 = d.schedule("dash".to_string());
    assert_eq!(d.fire(t1), None);
    assert_eq!(d.fire(t2), None);
    assert_eq!(d.fire(t3).as_deref(), Some("dash"));
    // Fired once; a duplicate timer does nothing.
    assert_eq!(d.fire(t3), None);

    let t4 = d.schedule("board".to_string());
    assert_eq!(d.fire(t4).as_deref(), Some("board"));
}
