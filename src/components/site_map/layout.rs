//! Positions and connector anchors for the site tree.
//!
//! Both algorithms are pure: the tree is only read and the result is a fresh
//! [`SiteLayout`] every call.

use std::collections::HashMap;

use super::config::LayoutConfig;
use super::types::{EdgeData, LayoutMode, LayoutPosition, Point, SiteLayout, TreeNode};

/// Lay out `tree` for a container of `container_width` pixels.
///
/// Returns `None` when the width is not a positive finite number; the caller
/// keeps whatever it showed before and waits for a usable measurement.
pub fn compute_layout(
	tree: &TreeNode,
	container_width: f64,
	mode: LayoutMode,
	config: &LayoutConfig,
) -> Option<SiteLayout> {
	if !(container_width.is_finite() && container_width > 0.0) {
		return None;
	}
	Some(match mode {
		LayoutMode::Wide => layout_wide(tree, container_width, config),
		LayoutMode::Narrow => layout_narrow(tree, container_width, config),
	})
}

/// Pick the layout mode for a container and lay out in it.
///
/// Wide is used only at or above the mobile breakpoint and only when every
/// wide box stays inside `[0, container_width]`; otherwise the narrow column
/// is used.
pub fn compute_responsive_layout(
	tree: &TreeNode,
	container_width: f64,
	config: &LayoutConfig,
) -> Option<(LayoutMode, SiteLayout)> {
	if LayoutMode::for_width(container_width, config.mobile_breakpoint) == LayoutMode::Wide {
		let wide = compute_layout(tree, container_width, LayoutMode::Wide, config)?;
		if fits_horizontally(&wide, container_width) {
			return Some((LayoutMode::Wide, wide));
		}
	}
	compute_layout(tree, container_width, LayoutMode::Narrow, config)
		.map(|layout| (LayoutMode::Narrow, layout))
}

fn fits_horizontally(layout: &SiteLayout, width: f64) -> bool {
	layout
		.positions
		.values()
		.all(|p| p.left() >= 0.0 && p.right() <= width)
}

fn layout_wide(tree: &TreeNode, width: f64, config: &LayoutConfig) -> SiteLayout {
	let mut positions = HashMap::new();
	let mut edges = Vec::new();

	let (root_w, root_h) = config.wide_size(tree.node_type);
	let root = LayoutPosition {
		x: width / 2.0,
		y: config.top_padding + root_h / 2.0,
		width: root_w,
		height: root_h,
	};
	positions.insert(tree.id.clone(), root);

	let sizes: Vec<(f64, f64)> = tree
		.children
		.iter()
		.map(|c| config.wide_size(c.node_type))
		.collect();
	let count = sizes.len();
	let nodes_width: f64 = sizes.iter().map(|&(w, _)| w).sum();
	let row_height = sizes.iter().map(|&(_, h)| h).fold(0.0, f64::max);

	let available = width - 2.0 * config.side_margin;
	let divisor = if count > 1 { (count - 1) as f64 } else { 1.0 };
	let spacing = ((available - nodes_width) / divisor).max(config.min_horizontal_spacing);
	let row_width = nodes_width + spacing * count.saturating_sub(1) as f64;
	let row_y = root.bottom() + config.level_gap + row_height / 2.0;

	let mut placed = Vec::with_capacity(count);
	let mut cursor = width / 2.0 - row_width / 2.0;
	for (child, &(w, h)) in tree.children.iter().zip(&sizes) {
		let pos = LayoutPosition {
			x: cursor + w / 2.0,
			y: row_y,
			width: w,
			height: h,
		};
		cursor += w + spacing;
		positions.insert(child.id.clone(), pos);
		edges.push(EdgeData::new(tree, child, root.bottom_center(), pos.top_center()));
		placed.push((child, pos));
	}

	for (parent, parent_pos) in placed {
		if parent.children.is_empty() {
			continue;
		}
		let sub_sizes: Vec<(f64, f64)> = parent
			.children
			.iter()
			.map(|c| config.wide_size(c.node_type))
			.collect();
		let sub_width = sub_sizes.iter().map(|&(w, _)| w).sum::<f64>()
			+ config.min_horizontal_spacing * (sub_sizes.len() - 1) as f64;
		let sub_height = sub_sizes.iter().map(|&(_, h)| h).fold(0.0, f64::max);
		let sub_y = parent_pos.bottom() + config.level_gap + sub_height / 2.0;

		let mut cursor = parent_pos.x - sub_width / 2.0;
		for (child, &(w, h)) in parent.children.iter().zip(&sub_sizes) {
			let pos = LayoutPosition {
				x: cursor + w / 2.0,
				y: sub_y,
				width: w,
				height: h,
			};
			cursor += w + config.min_horizontal_spacing;
			positions.insert(child.id.clone(), pos);
			edges.push(EdgeData::new(
				parent,
				child,
				parent_pos.bottom_center(),
				pos.top_center(),
			));
		}
	}

	let max_bottom = positions
		.values()
		.map(LayoutPosition::bottom)
		.fold(f64::MIN, f64::max);

	SiteLayout {
		positions,
		edges,
		total_height: max_bottom + config.bottom_margin,
	}
}

struct NarrowPass<'a> {
	config: &'a LayoutConfig,
	width: f64,
	cursor: f64,
	layout: SiteLayout,
}

impl NarrowPass<'_> {
	fn place(&mut self, node: &TreeNode) -> LayoutPosition {
		let config = self.config;
		let indent = f64::from(node.level) * config.narrow_indent;
		let width = (self.width - indent - 2.0 * config.narrow_padding).max(config.min_node_width);
		let height = config.narrow_height(node.node_type);
		let pos = LayoutPosition {
			x: config.narrow_padding + indent + width / 2.0,
			y: self.cursor + height / 2.0,
			width,
			height,
		};
		self.cursor += height + config.narrow_gap;
		self.layout.positions.insert(node.id.clone(), pos);

		for child in &node.children {
			let child_pos = self.place(child);
			self.layout.edges.push(EdgeData::new(
				node,
				child,
				Point::new(pos.left() + config.narrow_anchor_offset, pos.bottom()),
				Point::new(child_pos.left() + config.narrow_anchor_offset, child_pos.top()),
			));
		}
		pos
	}
}

fn layout_narrow(tree: &TreeNode, width: f64, config: &LayoutConfig) -> SiteLayout {
	let mut pass = NarrowPass {
		config,
		width,
		cursor: config.narrow_padding,
		layout: SiteLayout::default(),
	};
	pass.place(tree);
	pass.layout.total_height = pass.cursor + config.narrow_bottom_margin;
	pass.layout
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::site_map::tree::{
		CARD_ID, DEFAULT_SECTION_ORDER, build_site_tree, flatten_tree,
	};

	fn wide(order: &[&str], width: f64) -> SiteLayout {
		let tree = build_site_tree(order);
		compute_layout(&tree, width, LayoutMode::Wide, &LayoutConfig::default()).unwrap()
	}

	#[test]
	fn non_positive_width_has_no_layout() {
		let tree = build_site_tree(&["hero"]);
		let config = LayoutConfig::default();
		for width in [0.0, -10.0, f64::NAN] {
			assert!(compute_layout(&tree, width, LayoutMode::Wide, &config).is_none());
			assert!(compute_layout(&tree, width, LayoutMode::Narrow, &config).is_none());
		}
	}

	#[test]
	fn wide_scenario_three_sections() {
		let layout = wide(&["hero", "about", "projects"], 1200.0);
		let row: Vec<LayoutPosition> = ["hero", "about", "projects", CARD_ID]
			.iter()
			.map(|id| layout.positions[*id])
			.collect();

		assert!(row.iter().all(|p| p.y == row[0].y));
		assert!((row[0].left() - 40.0).abs() < 1e-9);
		assert!((row[3].right() - 1160.0).abs() < 1e-9);

		let gaps: Vec<f64> = row.windows(2).map(|w| w[1].left() - w[0].right()).collect();
		assert!(gaps.iter().all(|g| (g - gaps[0]).abs() < 1e-9));

		let gallery = layout.positions["projects-gallery"];
		let arch = layout.positions["architecture"];
		assert_eq!(gallery.y, arch.y);
		assert!(gallery.y > row[2].y);
		assert_eq!(layout.total_height, gallery.bottom() + 60.0);

		assert_eq!(layout.positions.len(), 7);
		assert_eq!(layout.edges.len(), 6);
	}

	#[test]
	fn wide_subpages_centered_under_parent() {
		let layout = wide(&["projects"], 1000.0);
		let parent = layout.positions["projects"];
		let gallery = layout.positions["projects-gallery"];
		let arch = layout.positions["architecture"];
		let mid = (gallery.left() + arch.right()) / 2.0;
		assert!((mid - parent.x).abs() < 1e-9);
		let gap = arch.left() - gallery.right();
		assert!((gap - LayoutConfig::default().min_horizontal_spacing).abs() < 1e-9);
	}

	#[test]
	fn wide_edges_anchor_bottom_to_top() {
		let layout = wide(&["hero"], 900.0);
		let root = layout.positions["home"];
		let hero = layout.positions["hero"];
		let edge = layout.edges.iter().find(|e| e.id == "home-hero").unwrap();
		assert_eq!(edge.from_point, root.bottom_center());
		assert_eq!(edge.to_point, hero.top_center());
		assert_eq!(edge.color, "#f59e0b");
	}

	#[test]
	fn single_level_one_node_is_centered() {
		let layout = wide(&[], 600.0);
		let card = layout.positions[CARD_ID];
		assert_eq!(card.x, 300.0);
		assert_eq!(layout.edges.len(), 1);
		assert_eq!(layout.edges[0].id, "home-card");
	}

	#[test]
	fn crowded_row_clamps_to_min_spacing() {
		let layout = wide(
			&["hero", "about", "career", "achievements", "education", "projects", "contact"],
			400.0,
		);
		let tree = build_site_tree(&[
			"hero",
			"about",
			"career",
			"achievements",
			"education",
			"projects",
			"contact",
		]);
		let row: Vec<LayoutPosition> = tree
			.children
			.iter()
			.map(|c| layout.positions[&c.id])
			.collect();
		for pair in row.windows(2) {
			let gap = pair[1].left() - pair[0].right();
			assert!((gap - LayoutConfig::default().min_horizontal_spacing).abs() < 1e-9);
		}
	}

	#[test]
	fn narrow_column_indents_by_level() {
		let tree = build_site_tree(&["hero", "projects"]);
		let config = LayoutConfig::default();
		let layout = compute_layout(&tree, 360.0, LayoutMode::Narrow, &config).unwrap();

		let flat = flatten_tree(&tree);
		let ys: Vec<f64> = flat.iter().map(|n| layout.positions[&n.id].y).collect();
		assert!(ys.windows(2).all(|w| w[1] > w[0]));

		let root = layout.positions["home"];
		let hero = layout.positions["hero"];
		let gallery = layout.positions["projects-gallery"];
		assert_eq!(root.left(), config.narrow_padding);
		assert_eq!(hero.left(), config.narrow_padding + config.narrow_indent);
		assert_eq!(gallery.left(), config.narrow_padding + 2.0 * config.narrow_indent);
		assert_eq!(hero.width, 360.0 - config.narrow_indent - 2.0 * config.narrow_padding);
	}

	#[test]
	fn narrow_edges_use_left_anchor() {
		let tree = build_site_tree(&["projects"]);
		let config = LayoutConfig::default();
		let layout = compute_layout(&tree, 320.0, LayoutMode::Narrow, &config).unwrap();
		let parent = layout.positions["projects"];
		let child = layout.positions["architecture"];
		let edge = layout.edges.iter().find(|e| e.id == "projects-architecture").unwrap();
		assert_eq!(edge.from_point, Point::new(parent.left() + 12.0, parent.bottom()));
		assert_eq!(edge.to_point, Point::new(child.left() + 12.0, child.top()));
	}

	#[test]
	fn narrow_total_height_follows_cursor() {
		let tree = build_site_tree::<&str>(&[]);
		let config = LayoutConfig::default();
		let layout = compute_layout(&tree, 320.0, LayoutMode::Narrow, &config).unwrap();
		let expected = config.narrow_padding
			+ config.narrow_root_height
			+ config.narrow_gap
			+ config.narrow_subpage_height
			+ config.narrow_gap
			+ config.narrow_bottom_margin;
		assert_eq!(layout.total_height, expected);
	}

	#[test]
	fn layout_serializes_for_inspection() {
		let layout = wide(&["hero"], 800.0);
		let json = serde_json::to_value(&layout).unwrap();
		assert_eq!(json["edges"][0]["id"], "home-hero");
		assert_eq!(json["positions"]["hero"]["width"], 180.0);

		let tree = serde_json::to_value(build_site_tree(&["hero"])).unwrap();
		assert_eq!(tree["node_type"], "root");
		assert_eq!(tree["children"][1]["node_type"], "subpage");
	}

	#[test]
	fn responsive_layout_keeps_wide_when_row_fits() {
		let tree = build_site_tree(&["hero", "about", "projects"]);
		let (mode, layout) =
			compute_responsive_layout(&tree, 1200.0, &LayoutConfig::default()).unwrap();
		assert_eq!(mode, LayoutMode::Wide);
		assert_eq!(layout, wide(&["hero", "about", "projects"], 1200.0));
	}

	#[test]
	fn responsive_layout_falls_back_to_narrow_when_row_overflows() {
		let tree = build_site_tree(DEFAULT_SECTION_ORDER);
		let config = LayoutConfig::default();
		let (mode, layout) = compute_responsive_layout(&tree, 1024.0, &config).unwrap();
		assert_eq!(mode, LayoutMode::Narrow);
		assert!(layout.positions.values().all(|p| p.left() >= 0.0 && p.right() <= 1024.0));

		let (mode, _) = compute_responsive_layout(&tree, 1920.0, &config).unwrap();
		assert_eq!(mode, LayoutMode::Wide);
	}

	#[test]
	fn responsive_layout_uses_narrow_below_breakpoint() {
		let tree = build_site_tree(&["hero"]);
		let (mode, _) =
			compute_responsive_layout(&tree, 600.0, &LayoutConfig::default()).unwrap();
		assert_eq!(mode, LayoutMode::Narrow);
		assert!(compute_responsive_layout(&tree, 0.0, &LayoutConfig::default()).is_none());
	}

	#[test]
	fn tiny_width_never_produces_degenerate_boxes() {
		let tree = build_site_tree(&["projects"]);
		let config = LayoutConfig::default();
		let layout = compute_layout(&tree, 20.0, LayoutMode::Narrow, &config).unwrap();
		assert!(layout.positions.values().all(|p| p.width >= config.min_node_width));
	}
}
