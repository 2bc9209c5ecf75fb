//! Command-line front end for the product page view model.
//!
//! # Usage
//!
//! ```bash
//! # List products in a catalog
//! cargo run -- --catalog catalog.json list
//!
//! # Era product URLs and archive links
//! cargo run -- --catalog catalog.json links "Supermarine Shirt"
//!
//! # Price line
//! cargo run -- --catalog catalog.json price "Supermarine Shirt"
//!
//! # Full page view, second page of releases, as JSON
//! cargo run -- --catalog catalog.json show "Supermarine Shirt" --page 2 --json
//! ```
//!
//! # Environment Variables
//!
//! See [`product_page::config`]. `CATALOG_PATH` replaces `--catalog`.

use product_page::application::services::ProductPageService;
use product_page::config::{self, Config};
use product_page::dto::{PaginationParams, ProductPageView};
use product_page::error::map_config_error;
use product_page::infrastructure::catalog::JsonCatalog;
use product_page::AppError;

use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Product detail pages for a catalog export.
#[derive(Parser)]
#[command(name = "product-page")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file (falls back to CATALOG_PATH)
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List product names in the catalog
    List,

    /// Show era product URLs and Web Archive links
    Links {
        /// Exact product name
        name: String,
    },

    /// Show the price line
    Price {
        /// Exact product name
        name: String,
    },

    /// Show the full product page
    Show {
        /// Exact product name
        name: String,

        /// Releases table page (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Releases per page (defaults to RELEASES_PAGE_SIZE)
        #[arg(long)]
        page_size: Option<u32>,

        /// Include the release name column (overrides SHOW_RELEASE_NAMES)
        #[arg(long, overrides_with = "no_release_names")]
        release_names: bool,

        /// Omit the release name column (overrides SHOW_RELEASE_NAMES)
        #[arg(long, overrides_with = "release_names")]
        no_release_names: bool,

        /// Print the page view as JSON, including errors
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn wants_json(&self) -> bool {
        matches!(self, Commands::Show { json: true, .. })
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let json_output = cli.command.wants_json();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let rendered = render_error(e, json_output);
            if json_output {
                println!("{rendered}");
            } else {
                eprintln!("{rendered}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = config::load_from_env().map_err(map_config_error)?;
    init_tracing(&config);
    config.print_summary();

    let catalog_path = cli
        .catalog
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            AppError::bad_request(
                "No catalog given: pass --catalog or set CATALOG_PATH",
                json!({}),
            )
        })?;

    let catalog = JsonCatalog::open(&catalog_path)?;
    let service = ProductPageService::new(Arc::new(catalog), config.page_options());

    match cli.command {
        Commands::List => handle_list(&service),
        Commands::Links { name } => handle_links(&service, &name),
        Commands::Price { name } => handle_price(&service, &name),
        Commands::Show {
            name,
            page,
            page_size,
            release_names,
            no_release_names,
            json,
        } => handle_show(
            &service,
            &name,
            PaginationParams::new(page, page_size),
            release_names_override(release_names, no_release_names),
            json,
        ),
    }
}

/// Renders an error as the JSON error body or as a colored text line with details.
fn render_error(e: AppError, json_output: bool) -> String {
    if json_output {
        return serde_json::to_string_pretty(&e.into_body())
            .unwrap_or_else(|_| r#"{"error":{"code":"internal_error"}}"#.to_string());
    }

    let mut line = format!("{} {}", "error:".red().bold(), e);
    if e.details().as_object().is_some_and(|d| !d.is_empty()) {
        line.push_str(&format!(" {}", e.details()));
    }
    line
}

/// `None` leaves the configured default in place.
fn release_names_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Installs the global tracing subscriber. Logs go to stderr.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

type Service = ProductPageService<JsonCatalog>;

fn handle_list(service: &Service) -> Result<(), AppError> {
    let names = service.list_products()?;

    println!("{}", format!("Products ({})", names.len()).bright_blue().bold());
    for name in names {
        println!("  {}", name.cyan());
    }

    Ok(())
}

fn handle_links(service: &Service, name: &str) -> Result<(), AppError> {
    let urls = service.site_urls(name)?;

    println!("{}", name.bright_white().bold());
    if urls.is_empty() {
        println!("  {}", "No releases".yellow());
        return Ok(());
    }

    println!("  {}: {}", "outlier.cc".bright_cyan(), display_opt(urls.cc_url.as_deref()));
    println!("  {}: {}", "outlier.nyc".bright_cyan(), display_opt(urls.nyc_url.as_deref()));
    for link in urls.archive_links() {
        println!("  {}: {}", link.label.bright_cyan(), link.url);
    }

    Ok(())
}

fn handle_price(service: &Service, name: &str) -> Result<(), AppError> {
    match service.price_range(name)? {
        Some(range) => println!("{}", range.to_string().green()),
        None => println!("{}", "No releases".yellow()),
    }

    Ok(())
}

fn handle_show(
    service: &Service,
    name: &str,
    pagination: PaginationParams,
    show_release_names: Option<bool>,
    json: bool,
) -> Result<(), AppError> {
    let page = service.build_page(name, pagination, show_release_names)?;

    if json {
        let body = serde_json::to_string_pretty(&page).map_err(|e| {
            AppError::internal(
                "Failed to serialize page",
                serde_json::json!({ "reason": e.to_string() }),
            )
        })?;
        println!("{body}");
        return Ok(());
    }

    match page {
        Some(page) => print_page(&page),
        None => println!("{}", "No releases".yellow()),
    }

    Ok(())
}

fn print_page(page: &ProductPageView) {
    let header = &page.header;

    println!("{}", header.title.bright_blue().bold());
    if let Some(link) = &header.link_url {
        println!("  {}", link.underline());
    }
    println!("  {}: {}", "Google".bright_cyan(), header.google_url);
    println!("  {}: {}", "Reddit".bright_cyan(), header.reddit_url);
    for link in &header.archive_links {
        println!("  {}: {}", link.label.bright_cyan(), link.url);
    }
    println!("  {}", header.price_line.green());
    println!();

    let summary = &page.summary;
    println!("{}", "Season".bright_white().bold());
    for bin in &summary.season_histogram {
        println!("  {:<12} {}", bin.label, bin.count);
    }
    println!("{}", "Month".bright_white().bold());
    for bin in &summary.month_histogram {
        println!("  {:<12} {}", bin.label, bin.count);
    }
    if let Some(gaps) = &summary.release_gap {
        println!("{}", "Release Gap".bright_white().bold());
        for bin in gaps {
            println!("  {:<12} {}", bin.label, bin.count);
        }
    }
    println!();

    let table = &page.releases;
    println!("{}", table.title.bright_white().bold());
    if table.show_release_names {
        println!("  {:<10} {:<8} {:<20} {}", "Price", "Colors", "Release", "Release Name");
    } else {
        println!("  {:<10} {:<8} {}", "Price", "Colors", "Release");
    }
    for row in &table.rows {
        if table.show_release_names {
            println!(
                "  {:<10} {:<8} {:<20} {}",
                row.price,
                row.colors,
                row.release,
                row.name.as_deref().unwrap_or("")
            );
        } else {
            println!("  {:<10} {:<8} {}", row.price, row.colors, row.release);
        }
    }
    println!(
        "  {}",
        format!(
            "page {} of {} ({} per page)",
            table.pagination.page, table.pagination.total_pages, table.pagination.page_size
        )
        .dimmed()
    );
}

fn display_opt(value: Option<&str>) -> ColoredString {
    match value {
        Some(v) => v.normal(),
        None => "-".dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("product-page").chain(args.iter().copied())).unwrap()
    }

    fn show_override(cli: Cli) -> Option<bool> {
        match cli.command {
            Commands::Show {
                release_names,
                no_release_names,
                ..
            } => release_names_override(release_names, no_release_names),
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_release_names_flags() {
        assert_eq!(show_override(parse(&["show", "X"])), None);
        assert_eq!(show_override(parse(&["show", "X", "--release-names"])), Some(true));
        assert_eq!(
            show_override(parse(&["show", "X", "--no-release-names"])),
            Some(false)
        );
        assert_eq!(
            show_override(parse(&["show", "X", "--release-names", "--no-release-names"])),
            Some(false)
        );
    }

    #[test]
    fn test_wants_json() {
        assert!(parse(&["show", "X", "--json"]).command.wants_json());
        assert!(!parse(&["show", "X"]).command.wants_json());
        assert!(!parse(&["--catalog", "c.json", "list"]).command.wants_json());
    }

    #[test]
    fn test_missing_catalog_renders_json_body() {
        let err = JsonCatalog::open("/nonexistent/catalog.json").unwrap_err();

        let rendered = render_error(err, true);
        let body: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "Failed to read catalog");
        assert_eq!(body["error"]["details"]["path"], "/nonexistent/catalog.json");
    }

    #[test]
    fn test_invalid_catalog_renders_field_details() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"name": "Bad", "releases": [
                {"InSitu": "x", "releaseDate": "2015-01-01", "Price": -1, "Colors": 1, "Release": "a"}
            ]}]"#,
        )
        .unwrap();
        file.flush().unwrap();

        let err = JsonCatalog::open(file.path()).unwrap_err();
        let body: serde_json::Value = serde_json::from_str(&render_error(err, true)).unwrap();
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["details"]["release_index"], 0);
        assert_eq!(body["error"]["details"]["fields"][0], "price");

        let err = JsonCatalog::open(file.path()).unwrap_err();
        let text = render_error(err, false);
        assert!(text.contains("Invalid release record"));
        assert!(text.contains("\"fields\":[\"price\"]"));
    }

    #[test]
    fn test_config_error_renders_json_body() {
        let err = map_config_error(anyhow::anyhow!("LOG_FORMAT must be 'text' or 'json'"));

        let body: serde_json::Value = serde_json::from_str(&render_error(err, true)).unwrap();

        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["message"], "Invalid configuration");
        assert!(
            body["error"]["details"]["reason"]
                .as_str()
                .unwrap()
                .contains("LOG_FORMAT")
        );
    }
}
