//! Pricing rate domain entity

pub mod model;

pub use model::PricingRate;
