//! Reusable view components.

pub mod site_map;
