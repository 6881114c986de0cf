//! Site architecture map: tree, layout, resize coordination, and the canvas view.

mod component;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod layout;
mod render;
pub mod state;
pub mod tree;
pub mod types;

pub use component::SiteMapCanvas;
pub use config::LayoutConfig;
pub use coordinator::{CoordinatorState, LayoutCoordinator};
pub use error::SiteMapError;
pub use layout::{compute_layout, compute_responsive_layout};
pub use tree::{DEFAULT_SECTION_ORDER, build_site_tree, flatten_tree};
pub use types::{EdgeData, LayoutMode, LayoutPosition, NodeType, Point, SiteLayout, TreeNode};
