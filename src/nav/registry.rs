use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::Icon;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub href: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub icon: Icon,
}

impl NavLink {
    pub const fn new(href: &'static str, title: &'static str, icon: Icon) -> Self {
        Self {
            href: Cow::Borrowed(href),
            title: Cow::Borrowed(title),
            icon,
        }
    }
}

/// Ordered header links, in display order (left to right).
///
/// The built-in registry is a `static` and is never mutated. Registries
/// loaded from JSON own their entries but are otherwise identical.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct NavLinkRegistry {
    entries: Cow<'static, [NavLink]>,
}

static ENTRIES: [NavLink; 3] = [
    NavLink::new("/", "Getting Started", Icon::Wind),
    NavLink::new("/blog", "API", Icon::PenTool),
    NavLink::new("/projects", "Guides", Icon::Code),
];

pub static HEADER_NAV_LINKS: NavLinkRegistry = NavLinkRegistry::from_static(&ENTRIES);

pub fn header_nav_links() -> &'static NavLinkRegistry {
    &HEADER_NAV_LINKS
}

impl NavLinkRegistry {
    pub const fn from_static(entries: &'static [NavLink]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn entries(&self) -> &[NavLink] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavLink> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Structural check: at least one entry and no blank `href`/`title`.
    /// Duplicate targets are only logged.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.is_empty(), "Navigation registry has no entries");
        let mut seen = HashSet::new();
        for (i, link) in self.iter().enumerate() {
            if link.href.trim().is_empty() {
                anyhow::bail!("Entry {i} ({:?}) has an empty href", link.title);
            }
            if link.title.trim().is_empty() {
                anyhow::bail!("Entry {i} ({}) has an empty title", link.href);
            }
            if !seen.insert(link.href.as_ref()) {
                log::warn!("Duplicate href at entry {i}: {}", link.href);
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let registry: NavLinkRegistry = serde_json::from_str(json)?;
        registry.check()?;
        log::info!("Loaded {} navigation links", registry.len());
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        NavLinkRegistry::from_json(&json)
            .with_context(|| format!("Invalid navigation links in {}", path.display()))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a NavLinkRegistry {
    type Item = &'a NavLink;
    type IntoIter = std::slice::Iter<'a, NavLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
