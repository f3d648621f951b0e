pub mod layout_resolver;
pub mod system;

pub use layout_resolver::{LayoutPlan, LayoutResolver};
pub use system::{RealSystem, SystemContext};
