//! Knowledge-base loading: JSON files on disk with built-in fallbacks.
//!
//! Loading happens once at process start; the resulting `KnowledgeBase`
//! is shared read-only (no hot reload).

use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{info, warn};

use giftwise_core::{Error, KbPaths, Result};

use crate::types::{GiftItem, KnowledgeBase, SignalTable};

const DEFAULT_TRAITS: &str = include_str!("../data/traits.json");
const DEFAULT_INTERESTS: &str = include_str!("../data/interests.json");
const DEFAULT_CATALOG: &str = include_str!("../data/catalog.json");

/// The compiled-in knowledge base. The bundled data files are valid by
/// construction; a parse failure here is a build defect, caught by tests.
static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(|| KnowledgeBase {
    traits: serde_json::from_str(DEFAULT_TRAITS).unwrap(),
    interests: serde_json::from_str(DEFAULT_INTERESTS).unwrap(),
    catalog: serde_json::from_str(DEFAULT_CATALOG).unwrap(),
});

/// The knowledge base compiled into the binary.
pub fn builtin() -> &'static KnowledgeBase {
    &BUILTIN
}

/// Load the knowledge base from `paths`, falling back per file to the
/// built-in data when a file is absent. A file that exists but fails to
/// parse is an error: silently shipping half a vocabulary would make
/// classification results misleading.
pub fn load(paths: &KbPaths) -> Result<KnowledgeBase> {
    let traits = load_table(&paths.traits_file, DEFAULT_TRAITS, "traits")?;
    let interests = load_table(&paths.interests_file, DEFAULT_INTERESTS, "interests")?;
    let catalog = load_catalog(&paths.catalog_file)?;

    if traits.is_empty() || interests.is_empty() {
        return Err(Error::KnowledgeBase(
            "signal tables must not be empty".to_string(),
        ));
    }

    let kb = KnowledgeBase {
        traits,
        interests,
        catalog,
    };

    info!(
        "Knowledge base loaded: {} traits, {} interests, {} catalog items",
        kb.traits.len(),
        kb.interests.len(),
        kb.catalog.len()
    );
    for category in kb.orphan_categories() {
        warn!("Catalog category '{}' is not in the interest table", category);
    }

    Ok(kb)
}

fn load_table(path: &Path, default: &str, name: &str) -> Result<SignalTable> {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).map_err(|e| {
            Error::KnowledgeBase(format!("{}: invalid {} table: {}", path.display(), name, e))
        }),
        Err(_) => {
            info!("No {} table at {}, using built-in", name, path.display());
            Ok(serde_json::from_str(default)?)
        }
    }
}

fn load_catalog(path: &Path) -> Result<Vec<GiftItem>> {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).map_err(|e| {
            Error::KnowledgeBase(format!("{}: invalid catalog: {}", path.display(), e))
        }),
        Err(_) => {
            info!("No catalog at {}, using built-in", path.display());
            Ok(serde_json::from_str(DEFAULT_CATALOG)?)
        }
    }
}
