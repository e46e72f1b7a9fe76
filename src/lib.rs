pub mod nav;
pub mod web;

// Exports
pub use nav::{header_nav_links, Icon, NavLink, NavLinkRegistry, HEADER_NAV_LINKS};
