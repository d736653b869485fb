//! Synthetic dataset generation for attrsim.
//!
//! Box-Muller normal sampling, weighted categorical choice, and Bernoulli
//! draws feed a record generator that labels each interaction with
//! add-to-cart and conversion outcomes; segment cohorts layer behavioral
//! overrides on top.

pub mod distributions;
pub mod generator;
pub mod segments;

pub use distributions::{bernoulli, clamped_normal, normal, weighted_choice};
pub use generator::DataGenerator;
pub use segments::SegmentDatasets;
