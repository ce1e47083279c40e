mod expense;
mod money;
mod totals;

pub use expense::*;
pub use money::*;
pub use totals::*;
