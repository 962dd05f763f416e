//! typedep library — weighted data-type dependency graph construction.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
