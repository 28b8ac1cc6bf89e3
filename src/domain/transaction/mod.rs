//! Transaction domain entity

pub mod model;

pub use model::Transaction;
