//! Command-line surface: argument definitions, resolution and dispatch.

pub mod dispatcher;
pub mod main_types;
pub mod resolver;
