//! Layout design constants and their JSON override.

use serde::{Deserialize, Serialize};

use super::error::{Result, SiteMapError};
use super::types::NodeType;

/// Design constants for both layout algorithms.
///
/// The same `min_horizontal_spacing` separates level-1 boxes and the
/// sub-page row under a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Wide-mode root box width.
	pub root_width: f64,
	/// Wide-mode root box height.
	pub root_height: f64,
	/// Wide-mode section box width.
	pub section_width: f64,
	/// Wide-mode section box height.
	pub section_height: f64,
	/// Wide-mode sub-page box width.
	pub subpage_width: f64,
	/// Wide-mode sub-page box height.
	pub subpage_height: f64,
	/// Space above the root box.
	pub top_padding: f64,
	/// Vertical gap between a row's bottom edge and the next row's top edge.
	pub level_gap: f64,
	/// Smallest gap between neighbouring boxes in a row.
	pub min_horizontal_spacing: f64,
	/// Reserved on each side of the level-1 row.
	pub side_margin: f64,
	/// Space below the lowest wide-mode box.
	pub bottom_margin: f64,

	/// Narrow-mode indent per tree level.
	pub narrow_indent: f64,
	/// Narrow-mode padding around the column.
	pub narrow_padding: f64,
	/// Narrow-mode gap between consecutive boxes.
	pub narrow_gap: f64,
	/// Narrow-mode root box height.
	pub narrow_root_height: f64,
	/// Narrow-mode section box height.
	pub narrow_section_height: f64,
	/// Narrow-mode sub-page box height.
	pub narrow_subpage_height: f64,
	/// Distance from a box's left edge to the connector anchor.
	pub narrow_anchor_offset: f64,
	/// Space below the last narrow-mode box.
	pub narrow_bottom_margin: f64,

	/// Floor for every box width in either mode.
	pub min_node_width: f64,
	/// Widths below this use the narrow layout.
	pub mobile_breakpoint: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			root_width: 200.0,
			root_height: 72.0,
			section_width: 180.0,
			section_height: 64.0,
			subpage_width: 150.0,
			subpage_height: 56.0,
			top_padding: 40.0,
			level_gap: 80.0,
			min_horizontal_spacing: 40.0,
			side_margin: 40.0,
			bottom_margin: 60.0,

			narrow_indent: 24.0,
			narrow_padding: 16.0,
			narrow_gap: 16.0,
			narrow_root_height: 64.0,
			narrow_section_height: 56.0,
			narrow_subpage_height: 48.0,
			narrow_anchor_offset: 12.0,
			narrow_bottom_margin: 40.0,

			min_node_width: 48.0,
			mobile_breakpoint: 768.0,
		}
	}
}

impl LayoutConfig {
	/// Parse a JSON override; fields left out keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Reject non-finite values, non-positive sizes, and negative spacings.
	pub fn validate(&self) -> Result<()> {
		let fields = [
			("root_width", self.root_width),
			("root_height", self.root_height),
			("section_width", self.section_width),
			("section_height", self.section_height),
			("subpage_width", self.subpage_width),
			("subpage_height", self.subpage_height),
			("narrow_root_height", self.narrow_root_height),
			("narrow_section_height", self.narrow_section_height),
			("narrow_subpage_height", self.narrow_subpage_height),
			("min_node_width", self.min_node_width),
			("mobile_breakpoint", self.mobile_breakpoint),
		];
		for (field, value) in fields {
			if !(value.is_finite() && value > 0.0) {
				return Err(SiteMapError::InvalidConfig { field, value });
			}
		}

		let spacings = [
			("top_padding", self.top_padding),
			("level_gap", self.level_gap),
			("min_horizontal_spacing", self.min_horizontal_spacing),
			("side_margin", self.side_margin),
			("bottom_margin", self.bottom_margin),
			("narrow_indent", self.narrow_indent),
			("narrow_padding", self.narrow_padding),
			("narrow_gap", self.narrow_gap),
			("narrow_anchor_offset", self.narrow_anchor_offset),
			("narrow_bottom_margin", self.narrow_bottom_margin),
		];
		for (field, value) in spacings {
			if !(value.is_finite() && value >= 0.0) {
				return Err(SiteMapError::InvalidConfig { field, value });
			}
		}
		Ok(())
	}

	/// Box size used by the wide layout.
	pub fn wide_size(&self, node_type: NodeType) -> (f64, f64) {
		let (w, h) = match node_type {
			NodeType::Root => (self.root_width, self.root_height),
			NodeType::Section => (self.section_width, self.section_height),
			NodeType::Subpage => (self.subpage_width, self.subpage_height),
		};
		(w.max(self.min_node_width), h.max(1.0))
	}

	/// Box height used by the narrow layout.
	pub fn narrow_height(&self, node_type: NodeType) -> f64 {
		match node_type {
			NodeType::Root => self.narrow_root_height,
			NodeType::Section => self.narrow_section_height,
			NodeType::Subpage => self.narrow_subpage_height,
		}
		.max(1.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(LayoutConfig::default().validate().is_ok());
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = LayoutConfig::from_json(r#"{ "min_horizontal_spacing": 64 }"#).unwrap();
		assert_eq!(config.min_horizontal_spacing, 64.0);
		assert_eq!(config.section_width, LayoutConfig::default().section_width);
	}

	#[test]
	fn malformed_json_is_a_config_error() {
		let err = LayoutConfig::from_json("{ not json").unwrap_err();
		assert!(matches!(err, SiteMapError::Config(_)));
	}

	#[test]
	fn non_positive_sizes_are_rejected() {
		let err = LayoutConfig::from_json(r#"{ "section_width": 0 }"#).unwrap_err();
		assert!(matches!(
			err,
			SiteMapError::InvalidConfig {
				field: "section_width",
				..
			}
		));

		let err = LayoutConfig::from_json(r#"{ "level_gap": -4 }"#).unwrap_err();
		assert!(matches!(err, SiteMapError::InvalidConfig { field: "level_gap", .. }));
	}

	#[test]
	fn subpages_are_smaller_than_sections() {
		let config = LayoutConfig::default();
		let (sw, sh) = config.wide_size(NodeType::Section);
		let (pw, ph) = config.wide_size(NodeType::Subpage);
		assert!(pw < sw && ph < sh);
	}
}
