//! Error type for config loading and browser calls.

use wasm_bindgen::JsValue;

/// Failures outside the pure layout path: config loading and DOM calls.
#[derive(Debug, thiserror::Error)]
pub enum SiteMapError {
	/// The layout config JSON did not parse.
	#[error("failed to parse layout config: {0}")]
	Config(#[from] serde_json::Error),
	/// A config value is out of range.
	#[error("invalid layout config: {field} must be positive and finite, got {value}")]
	InvalidConfig {
		/// Offending field name.
		field: &'static str,
		/// Rejected value.
		value: f64,
	},
	/// A browser API call failed or returned something unexpected.
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl SiteMapError {
	/// Wrap a JS exception with the call that raised it.
	pub fn dom(context: &str, err: JsValue) -> Self {
		Self::Dom(format!("{context}: {err:?}"))
	}
}

/// Result alias for site map operations.
pub type Result<T, E = SiteMapError> = std::result::Result<T, E>;
