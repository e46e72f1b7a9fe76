use askama::Template;

use crate::nav::{NavLink, NavLinkRegistry};

pub const DEFAULT_ICON_CLASS: &str = "m-4 inline text-gray-600";

/// Header navigation bar: one link element per registry entry, in order.
#[derive(Clone, Debug, askama::Template)]
#[template(path = "navbar.html")]
pub struct NavBar<'a> {
    pub title: &'a str,
    pub links: &'a [NavLink],
    pub icon_class: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(title: &'a str, registry: &'a NavLinkRegistry) -> Self {
        Self {
            title,
            links: registry.entries(),
            icon_class: DEFAULT_ICON_CLASS,
        }
    }

    pub fn with_icon_class(self, icon_class: &'a str) -> Self {
        Self { icon_class, ..self }
    }

    pub fn render_html(&self) -> anyhow::Result<String> {
        Ok(self.render()?)
    }
}
