use headernav::web::NavBar;
use headernav::{header_nav_links, NavLinkRegistry};

fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|s| s.split('"').next())
        .collect()
}

#[test]
fn sample_header_renders_three_links_in_order() {
    let html = NavBar::new("Main navigation", header_nav_links())
        .render_html()
        .unwrap();
    assert_eq!(html.matches("<a ").count(), 3);
    assert_eq!(hrefs(&html), ["/", "/blog", "/projects"]);

    let positions = ["Getting Started", "API", "Guides"]
        .iter()
        .map(|title| html.find(&format!(">{title}<")).unwrap())
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn rendering_is_idempotent() {
    let first = NavBar::new("Main navigation", header_nav_links())
        .render_html()
        .unwrap();
    let second = NavBar::new("Main navigation", header_nav_links())
        .render_html()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn titles_are_escaped() {
    let registry = NavLinkRegistry::from_json(
        r#"[{"href": "/tom", "title": "Tom & Jerry <3", "icon": "home"}]"#,
    )
    .unwrap();
    let html = NavBar::new("Main navigation", &registry)
        .render_html()
        .unwrap();
    assert!(html.contains("Tom &amp; Jerry &lt;3"));
    assert!(!html.contains("<3"));
    assert_eq!(hrefs(&html), ["/tom"]);
}

#[test]
fn registry_is_shared_across_threads() {
    let handles = (0..4)
        .map(|_| std::thread::spawn(|| header_nav_links().len()))
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
