mod change;
mod core;
mod normalize;
mod ops;
mod query;

pub use crate::change::*;
pub use crate::core::*;
pub use crate::normalize::NormalizePass;
pub use crate::ops::*;
pub use crate::query::*;
