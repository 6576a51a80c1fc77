// crates/geonames-core/src/lib.rs

//! Client for the [geonames.org](https://www.geonames.org/) web service.
//!
//! The service answers plain HTTP GET requests with small XML documents; this
//! crate maps those documents onto [`Place`] records and lets callers walk the
//! place hierarchy (parent / children) lazily, with each relation fetched on
//! first access and memoized on the record.
//!
//! ```no_run
//! use geonames_core::{GeoNames, Result};
//!
//! fn main() -> Result<()> {
//!     let svc = GeoNames::new();
//!
//!     for place in svc.search("Copenhagen")?.iter().take(3) {
//!         println!("{} ({})", place.name, place.country_name);
//!     }
//!
//!     let denmark = svc.get(2623032)?;
//!     for child in denmark.children(&svc)? {
//!         println!("- {}", child.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
// Raw response structure (shared by the client and by test fixtures)
#[doc(hidden)]
pub mod xml;

// Re-exports
pub use crate::client::{GeoNames, Transport, DEFAULT_BASE_URL, DEFAULT_SEARCH_ROWS};
pub use crate::error::{GeoNamesError, Result};
pub use crate::model::{Place, PlaceRef, Places, Timezone};
