use web_sys::CanvasRenderingContext2d;

use super::state::SiteMapState;
use super::tree::flatten_tree;
use super::types::{EdgeData, LayoutMode, LayoutPosition, NodeType};

const BACKGROUND: &str = "#0f172a";
const CORNER_RADIUS: f64 = 10.0;

pub fn render(state: &SiteMapState, ctx: &CanvasRenderingContext2d, width: f64) {
	let layout = state.coordinator.layout();
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, layout.total_height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &SiteMapState, ctx: &CanvasRenderingContext2d) {
	let mode = state.coordinator.mode();
	for edge in &state.coordinator.layout().edges {
		let alpha = if !state.has_active_highlight() {
			0.7
		} else if state.is_hovered(&edge.from) || state.is_hovered(&edge.to) {
			1.0
		} else {
			0.2
		};
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(edge.color);
		ctx.set_line_width(if alpha == 1.0 { 2.5 } else { 1.5 });
		trace_edge(ctx, edge, mode);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn trace_edge(ctx: &CanvasRenderingContext2d, edge: &EdgeData, mode: LayoutMode) {
	let (from, to) = (edge.from_point, edge.to_point);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	match mode {
		LayoutMode::Wide => {
			let mid_y = (from.y + to.y) / 2.0;
			ctx.bezier_curve_to(from.x, mid_y, to.x, mid_y, to.x, to.y);
		}
		// Elbow: down the parent's anchor line, across, then into the child.
		LayoutMode::Narrow => {
			let bend_y = to.y - (to.y - from.y).min(16.0) / 2.0;
			ctx.line_to(from.x, bend_y);
			ctx.line_to(to.x, bend_y);
			ctx.line_to(to.x, to.y);
		}
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, pos: &LayoutPosition, radius: f64) {
	let (l, t, r, b) = (pos.left(), pos.top(), pos.right(), pos.bottom());
	let radius = radius.min(pos.width / 2.0).min(pos.height / 2.0);
	ctx.begin_path();
	ctx.move_to(l + radius, t);
	let _ = ctx.arc_to(r, t, r, b, radius);
	let _ = ctx.arc_to(r, b, l, b, radius);
	let _ = ctx.arc_to(l, b, l, t, radius);
	let _ = ctx.arc_to(l, t, r, t, radius);
	ctx.close_path();
}

fn draw_nodes(state: &SiteMapState, ctx: &CanvasRenderingContext2d) {
	let positions = &state.coordinator.layout().positions;
	let has_highlight = state.has_active_highlight();

	for node in flatten_tree(state.coordinator.tree()) {
		let Some(pos) = positions.get(&node.id) else {
			continue;
		};
		let dimmed = has_highlight && !state.is_highlighted(&node.id);
		ctx.set_global_alpha(if dimmed { 0.35 } else { 1.0 });

		rounded_rect(ctx, pos, CORNER_RADIUS);
		ctx.set_fill_style_str("#1e293b");
		ctx.fill();
		ctx.set_stroke_style_str(node.color);
		ctx.set_line_width(if state.is_hovered(&node.id) { 3.0 } else { 1.5 });
		ctx.stroke();

		let font_size = match node.node_type {
			NodeType::Root => 16.0,
			NodeType::Section => 14.0,
			NodeType::Subpage => 12.0,
		};
		ctx.set_fill_style_str("white");
		ctx.set_font(&format!("600 {font_size}px sans-serif"));
		ctx.set_text_baseline("middle");
		ctx.set_text_align("center");
		let _ = ctx.fill_text_with_max_width(
			&node.label,
			pos.x,
			pos.y - font_size * 0.4,
			pos.width - 16.0,
		);

		ctx.set_fill_style_str("rgba(203, 213, 225, 0.8)");
		ctx.set_font("11px sans-serif");
		let _ = ctx.fill_text_with_max_width(
			&node.description,
			pos.x,
			pos.y + font_size * 0.7,
			pos.width - 16.0,
		);
	}
	ctx.set_global_alpha(1.0);
}
