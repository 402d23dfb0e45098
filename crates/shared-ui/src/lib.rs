//! Dashboard component library. Each component ships its own stylesheet and
//! layers its classes over caller attributes with `merge_attributes`.

pub mod components;

pub use components::*;
