//! GiftWise — gift recommendation server over profile-text analysis.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_kb_dir() -> PathBuf {
    std::env::var("GIFTWISE_KB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("kb"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--validate" | "validate" => {
                let kb_dir = if args.len() > 2 {
                    PathBuf::from(&args[2])
                } else {
                    resolve_kb_dir()
                };
                let ok = validate_kb(&kb_dir);
                std::process::exit(if ok { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("GiftWise — gift recommendation server");
                println!();
                println!("Usage: giftwise [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  validate [kb-dir]        Validate knowledge-base files");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'giftwise help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let kb_dir = resolve_kb_dir();
    info!("Knowledge-base directory: {}", kb_dir.display());

    let config = giftwise_core::GiftwiseConfig::from_env(&kb_dir);
    let port = config.port;

    let kb = giftwise_kb::load(&config.kb_paths)
        .map_err(|e| anyhow::anyhow!("Failed to load knowledge base: {}", e))?;

    let state = Arc::new(AppState::new(config, kb));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("GiftWise server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load and sanity-check the knowledge base, reporting table sizes and
/// catalog categories with no interest mapping.
fn validate_kb(kb_dir: &Path) -> bool {
    let paths = giftwise_core::KbPaths::new(kb_dir);
    match giftwise_kb::load(&paths) {
        Ok(kb) => {
            println!("Knowledge base at {} is valid", kb_dir.display());
            println!("  traits:        {}", kb.traits.len());
            println!("  interests:     {}", kb.interests.len());
            println!("  catalog items: {}", kb.catalog.len());
            let orphans = kb.orphan_categories();
            if orphans.is_empty() {
                println!("  all catalog categories map to interests");
            } else {
                println!("  categories without an interest mapping: {}", orphans.join(", "));
            }
            true
        }
        Err(e) => {
            eprintln!("Knowledge base at {} is invalid: {}", kb_dir.display(), e);
            false
        }
    }
}
