mod header_page;
mod navbar;

// Exports
pub use header_page::{BuildInfo, HeaderPage};
pub use navbar::{NavBar, DEFAULT_ICON_CLASS};
