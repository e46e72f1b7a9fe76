mod icon;
mod registry;

// Exports
pub use icon::Icon;
pub use registry::{header_nav_links, NavLink, NavLinkRegistry, HEADER_NAV_LINKS};
