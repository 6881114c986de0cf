//! Interactive view state: layout coordinator plus hover tracking.

use std::collections::HashSet;

use super::coordinator::LayoutCoordinator;
use super::tree::flatten_tree;
use super::types::{Point, TreeNode};

/// Pointer hover over the map.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	/// Hovered node id.
	pub node: Option<String>,
	/// Ids joined to the hovered node by an edge.
	pub neighbors: HashSet<String>,
}

/// Everything the canvas view reads when painting.
pub struct SiteMapState {
	/// Layout source.
	pub coordinator: LayoutCoordinator,
	/// Pointer hover.
	pub hover: HoverState,
}

impl SiteMapState {
	/// State with nothing hovered.
	pub fn new(coordinator: LayoutCoordinator) -> Self {
		Self {
			coordinator,
			hover: HoverState::default(),
		}
	}

	/// Canvas backing size for the current layout, or `None` when there is
	/// nothing to draw and the canvas should be cleared.
	pub fn canvas_size(&self) -> Option<(u32, u32)> {
		let layout = self.coordinator.layout();
		if layout.is_empty() {
			return None;
		}
		Some((
			self.coordinator.width() as u32,
			layout.total_height.ceil() as u32,
		))
	}

	/// Topmost node under a canvas-space point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&TreeNode> {
		let positions = &self.coordinator.layout().positions;
		let point = Point::new(x, y);
		flatten_tree(self.coordinator.tree())
			.into_iter()
			.rev()
			.find(|node| positions.get(&node.id).is_some_and(|p| p.contains(point)))
	}

	/// Returns true when the hovered node changed.
	pub fn set_hover(&mut self, node: Option<String>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.neighbors.clear();
		if let Some(id) = &node {
			for edge in &self.coordinator.layout().edges {
				if edge.from == *id {
					self.hover.neighbors.insert(edge.to.clone());
				} else if edge.to == *id {
					self.hover.neighbors.insert(edge.from.clone());
				}
			}
		}
		self.hover.node = node;
		true
	}

	/// Whether anything is hovered.
	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	/// Whether `id` is the hovered node.
	pub fn is_hovered(&self, id: &str) -> bool {
		self.hover.node.as_deref() == Some(id)
	}

	/// Whether `id` is hovered or adjacent to the hovered node.
	pub fn is_highlighted(&self, id: &str) -> bool {
		self.is_hovered(id) || self.hover.neighbors.contains(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::site_map::config::LayoutConfig;
	use crate::components::site_map::tree::build_site_tree;

	fn mounted(order: &[&str], width: f64) -> SiteMapState {
		let mut coordinator = LayoutCoordinator::new(build_site_tree(order), LayoutConfig::default());
		coordinator.mount(width);
		SiteMapState::new(coordinator)
	}

	#[test]
	fn hit_test_finds_node_under_point() {
		let state = mounted(&["hero", "projects"], 1200.0);
		let hero = state.coordinator.layout().positions["hero"];
		let hit = state.node_at_position(hero.x, hero.y).map(|n| n.id.as_str());
		assert_eq!(hit, Some("hero"));
		assert!(state.node_at_position(-10.0, -10.0).is_none());
	}

	#[test]
	fn canvas_size_tracks_layout_and_clears_on_zero_width() {
		let mut state = mounted(&["hero"], 900.0);
		let height = state.coordinator.layout().total_height.ceil() as u32;
		assert_eq!(state.canvas_size(), Some((900, height)));

		assert!(state.coordinator.on_resize(0.0));
		assert_eq!(state.canvas_size(), None);
		assert!(state.node_at_position(450.0, 76.0).is_none());
	}

	#[test]
	fn hovering_collects_incident_nodes() {
		let mut state = mounted(&["hero", "projects"], 1200.0);
		assert!(state.set_hover(Some("projects".into())));
		assert!(!state.set_hover(Some("projects".into())));
		assert!(state.is_hovered("projects"));
		for id in ["home", "projects-gallery", "architecture"] {
			assert!(state.is_highlighted(id), "{id} should be highlighted");
		}
		assert!(!state.is_highlighted("hero"));

		assert!(state.set_hover(None));
		assert!(!state.has_active_highlight());
		assert!(state.hover.neighbors.is_empty());
	}
}
