use crate::core::config::SeedConfig;
use crate::models::item::Category;
use crate::stores::table::TableStore;
use tracing::{info, warn};

/// Load configured category default images into the direct-mode table
/// store. Bad category names are skipped, never fatal; the submission path
/// falls back to the bundled asset for anything missing here.
pub fn seed_category_defaults(tables: &TableStore, seed: &SeedConfig) {
    for (name, image_url) in &seed.category_defaults {
        match name.parse::<Category>() {
            Ok(category) => {
                tables.insert_category_default(category, image_url.clone());
            }
            Err(e) => {
                warn!(category = %name, error = %e, "Skipping unknown category in seed config");
            }
        }
    }

    info!(
        defaults_loaded = tables.category_default_count(),
        "Category defaults seeded"
    );
}
