//! The catalog and its queries.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use keycat_core::{Category, Difficulty, Frequency, Shortcut};
use rand::Rng;
use tracing::debug;

use crate::loader::{self, CatalogSource, LinkReport};
use crate::sample;
use crate::sanitize::sanitize_input;
use crate::stats::Statistics;
use crate::{CatalogError, DiagnosticSink, Result, TracingSink};

/// A category together with the shortcuts filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithShortcuts<'a> {
    pub category: &'a Category,
    pub shortcuts: Vec<&'a Shortcut>,
}

struct Collections {
    shortcuts: Vec<Shortcut>,
    categories: Vec<Category>,
    links: LinkReport,
}

impl Collections {
    /// Shortcuts whose category equals the sanitized `category_id`.
    fn members(&self, category_id: &str) -> Vec<&Shortcut> {
        let id = sanitize_input(category_id);
        if id.is_empty() {
            return Vec::new();
        }
        self.shortcuts.iter().filter(|s| s.category == id).collect()
    }
}

#[derive(Clone)]
enum Store {
    Loaded(Arc<Collections>),
    Unavailable(Arc<str>),
}

/// Immutable shortcut catalog.
///
/// Cloning is cheap and shares the underlying collections. Every query is
/// infallible: if the catalog could not be read, the failure goes to the
/// [`DiagnosticSink`] and the query returns an empty value.
#[derive(Clone)]
pub struct Catalog {
    store: Store,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.store {
            Store::Loaded(c) => f
                .debug_struct("Catalog")
                .field("shortcuts", &c.shortcuts.len())
                .field("categories", &c.categories.len())
                .finish(),
            Store::Unavailable(reason) => f
                .debug_struct("Catalog")
                .field("unavailable", reason)
                .finish(),
        }
    }
}

impl Catalog {
    /// Builds a catalog from already typed collections.
    pub fn new(shortcuts: Vec<Shortcut>, categories: Vec<Category>) -> Self {
        let links = LinkReport::check(&shortcuts, &categories);
        links.log();
        Self {
            store: Store::Loaded(Arc::new(Collections {
                shortcuts,
                categories,
                links,
            })),
            sink: Arc::new(TracingSink),
        }
    }

    /// Reads `source`, failing on missing or malformed documents.
    pub fn load(source: &CatalogSource) -> Result<Self> {
        let loaded = loader::read_source(source)?;
        Ok(Self::new(loaded.shortcuts, loaded.categories))
    }

    /// Reads `source`, or reports the failure to `sink` and returns a
    /// catalog on which every query yields its empty value.
    pub fn load_or_unavailable(source: &CatalogSource, sink: Arc<dyn DiagnosticSink>) -> Self {
        match Self::load(source) {
            Ok(catalog) => catalog.with_sink(sink),
            Err(err) => {
                sink.record("load", &err);
                Self {
                    store: Store::Unavailable(err.to_string().into()),
                    sink,
                }
            }
        }
    }

    /// The catalog compiled into this crate.
    pub fn embedded() -> Self {
        Self::load_or_unavailable(&CatalogSource::Embedded, Arc::new(TracingSink))
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Whether the collections were loaded.
    pub fn is_available(&self) -> bool {
        matches!(self.store, Store::Loaded(_))
    }

    /// Runs `query` against the loaded collections, or records the failure
    /// and returns `T::default()`.
    fn query<'a, T: Default>(
        &'a self,
        operation: &str,
        query: impl FnOnce(&'a Collections) -> Result<T>,
    ) -> T {
        let result = match &self.store {
            Store::Loaded(collections) => query(collections.as_ref()),
            Store::Unavailable(reason) => Err(CatalogError::Unavailable(reason.to_string())),
        };
        result.unwrap_or_else(|err| {
            self.sink.record(operation, &err);
            T::default()
        })
    }

    /// Every shortcut in source order.
    pub fn all_shortcuts(&self) -> &[Shortcut] {
        self.query("all_shortcuts", |c| Ok(c.shortcuts.as_slice()))
    }

    /// Every category in source order.
    pub fn all_categories(&self) -> &[Category] {
        self.query("all_categories", |c| Ok(c.categories.as_slice()))
    }

    /// First shortcut whose id equals the sanitized `id`.
    pub fn shortcut_by_id(&self, id: &str) -> Option<&Shortcut> {
        self.query("shortcut_by_id", |c| {
            let id = sanitize_input(id);
            Ok(c.shortcuts.iter().find(|s| s.id == id))
        })
    }

    /// First category whose id equals the sanitized `id`.
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.query("category_by_id", |c| {
            let id = sanitize_input(id);
            Ok(c.categories.iter().find(|cat| cat.id == id))
        })
    }

    /// Shortcuts filed under `category_id`, in source order.
    pub fn shortcuts_by_category(&self, category_id: &str) -> Vec<&Shortcut> {
        self.query("shortcuts_by_category", |c| Ok(c.members(category_id)))
    }

    /// One entry per known category, in category order, each holding that
    /// category's shortcuts. Categories without shortcuts map to an empty
    /// list.
    pub fn shortcuts_grouped_by_category(&self) -> IndexMap<&str, Vec<&Shortcut>> {
        self.query("shortcuts_grouped_by_category", |c| {
            Ok(c.categories
                .iter()
                .map(|cat| (cat.id.as_str(), c.members(&cat.id)))
                .collect())
        })
    }

    pub fn category_with_shortcuts(&self, category_id: &str) -> Option<CategoryWithShortcuts<'_>> {
        self.query("category_with_shortcuts", |c| {
            let id = sanitize_input(category_id);
            Ok(c.categories
                .iter()
                .find(|cat| cat.id == id)
                .map(|category| CategoryWithShortcuts {
                    category,
                    shortcuts: c.members(category_id),
                }))
        })
    }

    pub fn filter_by_difficulty(&self, level: Difficulty) -> Vec<&Shortcut> {
        self.query("filter_by_difficulty", |c| {
            Ok(c.shortcuts.iter().filter(|s| s.difficulty == level).collect())
        })
    }

    pub fn filter_by_frequency(&self, level: Frequency) -> Vec<&Shortcut> {
        self.query("filter_by_frequency", |c| {
            Ok(c.shortcuts.iter().filter(|s| s.frequency == level).collect())
        })
    }

    /// Shortcuts whose name, description or any tag contains `query`,
    /// ignoring case. A query that sanitizes to nothing matches nothing.
    pub fn search_shortcuts(&self, query: &str) -> Vec<&Shortcut> {
        self.query("search_shortcuts", |c| {
            let needle = sanitize_input(query).to_lowercase();
            if needle.is_empty() {
                return Ok(Vec::new());
            }

            let results: Vec<&Shortcut> = c
                .shortcuts
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&needle)
                        || s.description.to_lowercase().contains(&needle)
                        || s.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                })
                .collect();
            debug!(query = %needle, matches = results.len(), "Searched shortcuts");
            Ok(results)
        })
    }

    /// Shortcuts carrying `tag` exactly, ignoring case.
    pub fn shortcuts_by_tag(&self, tag: &str) -> Vec<&Shortcut> {
        self.query("shortcuts_by_tag", |c| {
            let tag = sanitize_input(tag).to_lowercase();
            if tag.is_empty() {
                return Ok(Vec::new());
            }
            Ok(c.shortcuts.iter().filter(|s| s.has_tag(&tag)).collect())
        })
    }

    /// Every distinct tag, sorted.
    pub fn all_tags(&self) -> Vec<&str> {
        self.query("all_tags", |c| {
            let tags: BTreeSet<&str> = c
                .shortcuts
                .iter()
                .flat_map(|s| s.tags.iter().map(String::as_str))
                .collect();
            Ok(tags.into_iter().collect())
        })
    }

    /// Up to `count` distinct shortcuts in random order, drawn from
    /// `category_id` when given and non-empty, and from the whole catalog
    /// otherwise.
    pub fn random_shortcuts(&self, count: i64, category_id: Option<&str>) -> Vec<&Shortcut> {
        self.random_shortcuts_with(&mut rand::thread_rng(), count, category_id)
    }

    /// [`Catalog::random_shortcuts`] with a caller supplied generator.
    pub fn random_shortcuts_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: i64,
        category_id: Option<&str>,
    ) -> Vec<&Shortcut> {
        self.query("random_shortcuts", |c| {
            if count <= 0 {
                return Ok(Vec::new());
            }
            // An empty id means no category; a blank one matches nothing.
            let pool = match category_id.filter(|id| !id.is_empty()) {
                Some(id) => c.members(id),
                None => c.shortcuts.iter().collect(),
            };
            Ok(sample::draw(pool, count, rng))
        })
    }

    /// Totals and per-level, per-category breakdowns. All zero when the
    /// catalog is unavailable.
    pub fn statistics(&self) -> Statistics {
        self.query("statistics", |c| {
            let mut stats = Statistics {
                total_shortcuts: c.shortcuts.len(),
                total_categories: c.categories.len(),
                ..Default::default()
            };
            for shortcut in &c.shortcuts {
                stats.by_difficulty.add(shortcut.difficulty);
                stats.by_frequency.add(shortcut.frequency);
            }
            for category in &c.categories {
                stats
                    .by_category
                    .insert(category.id.clone(), c.members(&category.id).len());
            }
            Ok(stats)
        })
    }

    /// Categories sorted by `order`, ties kept in source order. Orders may be
    /// negative or fractional.
    pub fn categories_in_display_order(&self) -> Vec<&Category> {
        self.query("categories_in_display_order", |c| {
            let mut categories: Vec<&Category> = c.categories.iter().collect();
            categories.sort_by(|a, b| a.order.total_cmp(&b.order));
            Ok(categories)
        })
    }

    /// Shortcuts for one application, or the system-wide ones for `None`.
    ///
    /// Application names compare case-insensitively after sanitizing.
    pub fn filter_by_application(&self, application: Option<&str>) -> Vec<&Shortcut> {
        self.query("filter_by_application", |c| {
            let Some(application) = application else {
                return Ok(c.shortcuts.iter().filter(|s| s.application.is_none()).collect());
            };
            let wanted = sanitize_input(application).to_lowercase();
            if wanted.is_empty() {
                return Ok(Vec::new());
            }
            Ok(c.shortcuts
                .iter()
                .filter(|s| {
                    s.application
                        .as_deref()
                        .is_some_and(|app| app.to_lowercase() == wanted)
                })
                .collect())
        })
    }

    /// Reference problems found when the catalog was built.
    pub fn link_report(&self) -> Option<&LinkReport> {
        self.query("link_report", |c| Ok(Some(&c.links)))
    }
}
