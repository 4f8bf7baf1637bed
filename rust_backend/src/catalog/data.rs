//! Built-in series tier tables.
//!
//! These mirror the published price sheets. Retail deployments can replace
//! them with a TOML catalog (see [`config`](super::config)); the built-ins
//! keep the crate usable with zero setup.

use once_cell::sync::Lazy;

use super::{Catalog, Series, SizeTier};

/// Series used when a caller opts into default-series fallback.
pub const DEFAULT_SERIES_ID: &str = "continental";

fn tier(min_width: f64, max_width: f64, min_height: f64, max_height: f64, base_price: f64) -> SizeTier {
    SizeTier {
        min_width,
        max_width,
        min_height,
        max_height,
        base_price,
    }
}

fn continental() -> Series {
    Series {
        name: "Continental".to_string(),
        tiers: vec![
            // Standard heights
            tier(48.0, 72.0, 78.0, 82.0, 449.0),
            tier(73.0, 96.0, 78.0, 82.0, 549.0),
            tier(97.0, 120.0, 78.0, 82.0, 649.0),
            // Tall
            tier(48.0, 72.0, 83.0, 96.0, 499.0),
            tier(73.0, 96.0, 83.0, 96.0, 599.0),
            tier(97.0, 120.0, 83.0, 96.0, 699.0),
            // Oversized
            tier(121.0, 144.0, 78.0, 96.0, 849.0),
            tier(145.0, 180.0, 78.0, 96.0, 1049.0),
        ],
    }
}

fn heritage() -> Series {
    Series {
        name: "Heritage".to_string(),
        tiers: vec![
            tier(48.0, 72.0, 78.0, 82.0, 529.0),
            tier(73.0, 96.0, 78.0, 82.0, 629.0),
            tier(97.0, 120.0, 78.0, 82.0, 729.0),
            tier(121.0, 144.0, 78.0, 96.0, 929.0),
        ],
    }
}

/// Catalog shipped with the crate: Continental and Heritage.
static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::new(DEFAULT_SERIES_ID);
    catalog.insert("continental", continental());
    catalog.insert("heritage", heritage());
    catalog
});

/// Shared read-only built-in catalog.
pub fn builtin() -> &'static Catalog {
    &BUILTIN_CATALOG
}
