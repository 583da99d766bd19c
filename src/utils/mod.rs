//! Shared utilities for layer implementations
//!
//! Currently the scalar activation functions used by the activation layers.

pub mod activations;
