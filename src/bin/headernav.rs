use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use headernav::web::{BuildInfo, HeaderPage, NavBar, DEFAULT_ICON_CLASS};
use headernav::{header_nav_links, NavLinkRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Navigation bar fragment
    Html,
    /// Standalone page with header and build info
    Page,
    /// Registry as JSON
    Json,
}

/// Print the site header navigation links.
#[derive(Parser, Debug)]
#[command(name = "headernav", version, about)]
struct Args {
    /// JSON file replacing the built-in links
    #[arg(long)]
    links: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Label for the navigation landmark and page title
    #[arg(long, default_value = "Main navigation")]
    title: String,

    #[arg(long, default_value = DEFAULT_ICON_CLASS)]
    icon_class: String,
}

fn load_registry(args: &Args) -> Result<NavLinkRegistry> {
    match &args.links {
        Some(path) => {
            log::info!("Loading links: {}", path.display());
            NavLinkRegistry::load(path)
        }
        None => Ok(header_nav_links().clone()),
    }
}

fn render(args: &Args, registry: &NavLinkRegistry, build_info: &BuildInfo) -> Result<String> {
    let navbar = NavBar::new(&args.title, registry)
        .with_icon_class(&args.icon_class);
    match args.format {
        Format::Html => navbar.render_html(),
        Format::Page => {
            let page = HeaderPage::new(&args.title, build_info, navbar);
            page.render_html()
        }
        Format::Json => registry.to_json(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let build_info = BuildInfo::current();
    log::info!(
        "headernav {} [{}@{}]",
        env!("CARGO_PKG_VERSION"),
        build_info.build_branch,
        build_info.build_hash
    );

    let registry = load_registry(&args)?;
    println!("{}", render(&args, &registry, &build_info)?);
    Ok(())
}
