//! Tree nodes and layout output types.

use std::collections::HashMap;

use serde::Serialize;

/// Kind of navigable location a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
	/// The landing page; exactly one per tree.
	Root,
	/// An anchored section of the landing page.
	Section,
	/// A separate route, either under a section or directly under the root.
	Subpage,
}

/// One entry in the site hierarchy. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeNode {
	/// Unique within the tree; keys positions and edge ids.
	pub id: String,
	/// Display title.
	pub label: String,
	/// Display subtitle.
	pub description: String,
	/// Root, section, or sub-page.
	pub node_type: NodeType,
	/// Route path, or `#anchor` for sections.
	pub href: String,
	/// Whether `href` goes through the router rather than the location hash.
	pub is_route: bool,
	/// Icon name for the renderer.
	pub icon: &'static str,
	/// CSS color; also used for the edge leading into this node.
	pub color: &'static str,
	/// Depth assigned at construction: root 0, top-level cards 1, sub-pages 2.
	pub level: u8,
	/// Ordered, owned children.
	pub children: Vec<TreeNode>,
}

/// Canvas-space coordinate in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	/// Horizontal pixels from the left edge.
	pub x: f64,
	/// Vertical pixels from the top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Center-anchored pixel rectangle for one laid-out node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LayoutPosition {
	/// Center x.
	pub x: f64,
	/// Center y.
	pub y: f64,
	/// Box width, always positive.
	pub width: f64,
	/// Box height, always positive.
	pub height: f64,
}

impl LayoutPosition {
	/// Left edge.
	pub fn left(&self) -> f64 {
		self.x - self.width / 2.0
	}

	/// Right edge.
	pub fn right(&self) -> f64 {
		self.x + self.width / 2.0
	}

	/// Top edge.
	pub fn top(&self) -> f64 {
		self.y - self.height / 2.0
	}

	/// Bottom edge.
	pub fn bottom(&self) -> f64 {
		self.y + self.height / 2.0
	}

	/// Anchor where an incoming wide-mode edge ends.
	pub fn top_center(&self) -> Point {
		Point::new(self.x, self.top())
	}

	/// Anchor where outgoing wide-mode edges start.
	pub fn bottom_center(&self) -> Point {
		Point::new(self.x, self.bottom())
	}

	/// Inclusive hit test.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
	}
}

/// Connector between a parent and one of its children.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeData {
	/// `"{from}-{to}"`.
	pub id: String,
	/// Parent node id.
	pub from: String,
	/// Child node id.
	pub to: String,
	/// Anchor on the parent box.
	pub from_point: Point,
	/// Anchor on the child box.
	pub to_point: Point,
	/// Stroke color, taken from the child node.
	pub color: &'static str,
}

impl EdgeData {
	/// Connector from `parent` to `child`, colored like the child.
	pub fn new(
		parent: &TreeNode,
		child: &TreeNode,
		from_point: Point,
		to_point: Point,
	) -> Self {
		Self {
			id: format!("{}-{}", parent.id, child.id),
			from: parent.id.clone(),
			to: child.id.clone(),
			from_point,
			to_point,
			color: child.color,
		}
	}
}

/// Output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SiteLayout {
	/// Box per node id.
	pub positions: HashMap<String, LayoutPosition>,
	/// Parent-to-child connectors in emission order.
	pub edges: Vec<EdgeData>,
	/// Canvas height needed to show every box plus the bottom margin.
	pub total_height: f64,
}

impl SiteLayout {
	/// No positions and no edges; `total_height` is not considered.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty() && self.edges.is_empty()
	}
}

/// Responsive layout algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LayoutMode {
	/// Root on top, sections in a row, sub-pages in a row below their parent.
	Wide,
	/// Single indented column.
	Narrow,
}

impl LayoutMode {
	/// Narrow below `breakpoint`, wide otherwise.
	pub fn for_width(width: f64, breakpoint: f64) -> Self {
		if width < breakpoint {
			Self::Narrow
		} else {
			Self::Wide
		}
	}
}
