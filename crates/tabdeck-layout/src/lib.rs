//! Placement of the active surface inside the host window chrome.

pub mod bounds;

pub use bounds::BoundsCalculator;
