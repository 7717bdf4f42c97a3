//! Numerical utilities: scalar root finding and sample grids

pub mod grid;
pub mod roots;

pub use grid::{linspace, stepped_positions};
pub use roots::{central_difference, RootFinder, RootSearch};
