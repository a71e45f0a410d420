// Core infrastructure modules
pub mod config;
pub mod core;

// Data access layer
pub mod store;

// Interactive shell
pub mod menu;
pub mod results_grid;
pub mod shell;

#[cfg(test)]
mod test_utils;
