use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Glyph shown beside a navigation link.
///
/// Only the identifier lives in the registry. Mapping it to markup and
/// styling is left to the presentation layer (see [`Icon::svg_body`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Wind,
    PenTool,
    Code,
    Home,
    BookOpen,
    ExternalLink,
}

impl Icon {
    pub const ALL: [Icon; 6] = [
        Icon::Wind,
        Icon::PenTool,
        Icon::Code,
        Icon::Home,
        Icon::BookOpen,
        Icon::ExternalLink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Wind => "wind",
            Icon::PenTool => "pen-tool",
            Icon::Code => "code",
            Icon::Home => "home",
            Icon::BookOpen => "book-open",
            Icon::ExternalLink => "external-link",
        }
    }

    /// Inner markup of the Feather glyph (24x24 viewbox, stroked)
    pub fn svg_body(&self) -> &'static str {
        match self {
            Icon::Wind => {
                r#"<path d="M9.59 4.59A2 2 0 1 1 11 8H2m10.59 11.41A2 2 0 1 0 14 16H2m15.73-8.27A2.5 2.5 0 1 1 19.5 12H2"></path>"#
            }
            Icon::PenTool => concat!(
                r#"<path d="M12 19l7-7 3 3-7 7-3-3z"></path>"#,
                r#"<path d="M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5z"></path>"#,
                r#"<path d="M2 2l7.586 7.586"></path>"#,
                r#"<circle cx="11" cy="11" r="2"></circle>"#,
            ),
            Icon::Code => concat!(
                r#"<polyline points="16 18 22 12 16 6"></polyline>"#,
                r#"<polyline points="8 6 2 12 8 18"></polyline>"#,
            ),
            Icon::Home => concat!(
                r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path>"#,
                r#"<polyline points="9 22 9 12 15 12 15 22"></polyline>"#,
            ),
            Icon::BookOpen => concat!(
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path>"#,
                r#"<path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>"#,
                r#"<polyline points="15 3 21 3 21 9"></polyline>"#,
                r#"<line x1="10" y1="14" x2="21" y2="3"></line>"#,
            ),
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown icon: {s}"))
    }
}
