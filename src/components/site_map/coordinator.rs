//! Re-runs the layout when the observed container width or the tree changes.
//!
//! The coordinator is host-independent; the component feeds it measurements
//! from a `ResizeObserver` and repaints whenever a call returns `true`.

use log::{debug, info};

use super::config::LayoutConfig;
use super::layout::compute_responsive_layout;
use super::types::{LayoutMode, SiteLayout, TreeNode};

/// Whether the container is being observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinatorState {
	/// Not mounted, or unmounted; measurements are ignored.
	Idle,
	/// Mounted; width changes trigger layout passes.
	Observing,
}

/// Owns the tree, the last measured width, and the current layout.
pub struct LayoutCoordinator {
	state: CoordinatorState,
	tree: TreeNode,
	config: LayoutConfig,
	width: f64,
	mode: LayoutMode,
	layout: SiteLayout,
}

impl LayoutCoordinator {
	/// Idle coordinator with no layout yet.
	pub fn new(tree: TreeNode, config: LayoutConfig) -> Self {
		Self {
			state: CoordinatorState::Idle,
			tree,
			config,
			width: 0.0,
			mode: LayoutMode::Narrow,
			layout: SiteLayout::default(),
		}
	}

	/// Current observation state.
	pub fn state(&self) -> CoordinatorState {
		self.state
	}

	/// Tree the current layout was computed for.
	pub fn tree(&self) -> &TreeNode {
		&self.tree
	}

	/// Latest layout; empty until a positive width arrives.
	pub fn layout(&self) -> &SiteLayout {
		&self.layout
	}

	/// Last measured container width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Mode of the current layout.
	pub fn mode(&self) -> LayoutMode {
		self.mode
	}

	/// Take the first measurement and start observing.
	pub fn mount(&mut self, width: f64) -> bool {
		info!("site map mounted at width {width}");
		self.state = CoordinatorState::Observing;
		self.width = width;
		self.recompute()
	}

	/// Handle a width reported by the resize observer.
	pub fn on_resize(&mut self, width: f64) -> bool {
		if self.state != CoordinatorState::Observing || width == self.width {
			return false;
		}
		self.width = width;
		self.recompute()
	}

	/// Swap in a rebuilt tree; recomputes immediately when the width is known.
	pub fn set_tree(&mut self, tree: TreeNode) -> bool {
		if tree == self.tree {
			return false;
		}
		self.tree = tree;
		if self.state == CoordinatorState::Observing && self.width > 0.0 {
			self.recompute()
		} else {
			false
		}
	}

	/// Stop observing; later resize callbacks are no-ops.
	pub fn unmount(&mut self) {
		if self.state == CoordinatorState::Observing {
			info!("site map unmounted");
		}
		self.state = CoordinatorState::Idle;
	}

	fn recompute(&mut self) -> bool {
		match compute_responsive_layout(&self.tree, self.width, &self.config) {
			Some((mode, layout)) => {
				debug!(
					"layout pass: width={} mode={:?} nodes={} edges={} height={}",
					self.width,
					mode,
					layout.positions.len(),
					layout.edges.len(),
					layout.total_height
				);
				self.mode = mode;
				self.layout = layout;
				true
			}
			None => {
				debug!("deferring layout until the container has a width (got {})", self.width);
				let had_layout = !self.layout.is_empty();
				self.layout.positions.clear();
				self.layout.edges.clear();
				had_layout
			}
		}
	}
}
