use askama::Template;

use crate::web::NavBar;

#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub build_ts: &'static str,
    pub build_branch: &'static str,
    pub build_hash: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    /// Values embedded by the build script
    pub fn current() -> Self {
        Self {
            build_ts: env!("BUILD_TS"),
            build_branch: env!("BUILD_BRANCH"),
            build_hash: env!("BUILD_HASH"),
            build_profile: env!("BUILD_PROFILE"),
        }
    }

    /// Footer rows, in display order
    pub fn rows(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Built", self.build_ts),
            ("Branch", self.build_branch),
            ("Commit", self.build_hash),
            ("Profile", self.build_profile),
        ]
    }
}

/// Standalone page with the navigation header and a build-info footer.
#[derive(Clone, askama::Template)]
#[template(path = "index.html")]
pub struct HeaderPage<'a> {
    title: &'a str,
    build_info: [(&'static str, &'static str); 4],
    navbar: NavBar<'a>,
}

impl<'a> HeaderPage<'a> {
    pub fn new(title: &'a str, build_info: &BuildInfo, navbar: NavBar<'a>) -> Self {
        Self {
            title,
            build_info: build_info.rows(),
            navbar,
        }
    }

    pub fn render_html(&self) -> anyhow::Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::header_nav_links;

    fn build_info() -> BuildInfo {
        BuildInfo {
            build_ts: "2024-01-01 00:00:00 UTC",
            build_branch: "main",
            build_hash: "abc1234",
            build_profile: "debug",
        }
    }

    #[test]
    fn page_embeds_navbar_unescaped() {
        let navbar = NavBar::new("Docs", header_nav_links());
        let html = HeaderPage::new("Docs", &build_info(), navbar)
            .render_html()
            .unwrap();
        assert!(html.contains("<nav class=\"navbar\""));
        assert!(!html.contains("&lt;nav"));
        assert_eq!(html.matches("class=\"nav-link\"").count(), 3);
        assert!(html.contains("<th>Commit</th><td>abc1234</td>"));
    }

    #[test]
    fn current_build_info_has_all_rows() {
        let rows = BuildInfo::current().rows();
        let labels = rows.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(labels, ["Built", "Branch", "Commit", "Profile"]);
        assert!(rows.iter().all(|(_, v)| !v.is_empty()));
    }
}
