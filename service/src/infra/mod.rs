//! Infrastructure layer.

pub mod view;

pub use self::view::{View, Views};
#[cfg(any(test, feature = "memory"))]
pub use self::view::Memory;
