pub mod contracts;
pub mod executor;
pub mod report;
pub mod svg;

pub use contracts::*;
pub use executor::*;
