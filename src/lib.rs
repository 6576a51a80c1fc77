// src/lib.rs
//
// Thin facade over geonames-core so demos and downstream users can depend on
// a single crate name.

pub use geonames_core::*;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use geonames_core::{GeoNames, GeoNamesError, Place, PlaceRef, Places, Result, Timezone};
}
