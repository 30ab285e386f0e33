//! Process-wide catalog, loaded once.

use std::sync::OnceLock;

use crate::Catalog;

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// The process-wide catalog.
///
/// Falls back to [`Catalog::embedded`] on first use unless a catalog was
/// installed beforehand with [`install_global`].
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(Catalog::embedded)
}

/// Installs `catalog` as the process-wide catalog.
///
/// Must run during startup, before anything calls [`global`]. Hands the
/// catalog back if one is already in place.
pub fn install_global(catalog: Catalog) -> Result<(), Catalog> {
    GLOBAL.set(catalog)
}
