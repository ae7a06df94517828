//! Tagged parameter variants for the per-channel transforms.
//!
//! Each transform kind is an enum variant carrying its own payload,
//! with a pure function per variant in `mmm-transforms`. No class
//! hierarchy, no dynamic dispatch.

mod adstock;
mod saturation;

pub use adstock::Adstock;
pub use saturation::Saturation;
