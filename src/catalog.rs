//! In-memory catalog snapshots.
//!
//! Two independent tables feed the engine:
//!
//! - the primary [`Catalog`] of movies, matched on raw titles;
//! - the [`PosterCatalog`], keyed by [`NormalizedTitle`] and spelled
//!   independently of the primary table.
//!
//! Both are immutable once built. A changed catalog means a new engine.

pub mod entry;
pub mod poster;
pub mod title;

pub use entry::{Attribute, Catalog, CatalogEntry};
pub use poster::{PosterCatalog, PosterCatalogEntry};
pub use title::NormalizedTitle;
