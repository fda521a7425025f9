//! Value types shared by the Pano board crates.
//!
//! [`Frequency`] converts between clock rates and the periods timing
//! constraints are written in. [`InternalError`] marks a gap in the static
//! board tables, as distinct from a bad revision or toolchain name.

#![warn(missing_docs)]

mod frequency;
mod result;

pub use frequency::Frequency;
pub use result::{InternalError, PanoResult};
