//! Site hierarchy construction: root, ordered sections, sub-pages, and the
//! trailing card node.

use super::types::{NodeType, TreeNode};

/// Fallback color for nodes without a table entry.
pub const PRIMARY_COLOR: &str = "#6366f1";

/// Id of the root node.
pub const ROOT_ID: &str = "home";
/// Id of the trailing card node.
pub const CARD_ID: &str = "card";
/// The only section key that carries sub-pages.
pub const PROJECTS_KEY: &str = "projects";

struct SectionInfo {
	key: &'static str,
	label: &'static str,
	description: &'static str,
	icon: &'static str,
	color: &'static str,
}

const SECTIONS: &[SectionInfo] = &[
	SectionInfo {
		key: "hero",
		label: "Hero",
		description: "Introduction and headline",
		icon: "sparkles",
		color: "#f59e0b",
	},
	SectionInfo {
		key: "about",
		label: "About",
		description: "Background and interests",
		icon: "user",
		color: "#10b981",
	},
	SectionInfo {
		key: "career",
		label: "Career",
		description: "Professional timeline",
		icon: "briefcase",
		color: "#3b82f6",
	},
	SectionInfo {
		key: "achievements",
		label: "Achievements",
		description: "Awards and milestones",
		icon: "trophy",
		color: "#eab308",
	},
	SectionInfo {
		key: "education",
		label: "Education",
		description: "Degrees and coursework",
		icon: "graduation-cap",
		color: "#8b5cf6",
	},
	SectionInfo {
		key: PROJECTS_KEY,
		label: "Projects",
		description: "Selected work",
		icon: "folder",
		color: "#ec4899",
	},
	SectionInfo {
		key: "contact",
		label: "Contact",
		description: "Ways to get in touch",
		icon: "mail",
		color: "#14b8a6",
	},
];

/// Sub-pages attached under the projects section, in display order.
const PROJECT_PAGES: &[(&str, &str, &str, &str)] = &[
	("projects-gallery", "All Projects", "Full project gallery", "/projects"),
	("architecture", "Site Architecture", "Interactive map of this site", "/architecture"),
];

/// Section keys in the order the home page renders them.
pub const DEFAULT_SECTION_ORDER: &[&str] = &[
	"hero",
	"about",
	"career",
	"achievements",
	"education",
	PROJECTS_KEY,
	"contact",
];

fn section_info(key: &str) -> Option<&'static SectionInfo> {
	SECTIONS.iter().find(|s| s.key == key)
}

/// Color assigned to a node key, falling back to the primary color.
pub fn color_for(key: &str) -> &'static str {
	section_info(key).map_or(PRIMARY_COLOR, |s| s.color)
}

fn subpage(id: &str, label: &str, description: &str, href: &str, level: u8) -> TreeNode {
	TreeNode {
		id: id.into(),
		label: label.into(),
		description: description.into(),
		node_type: NodeType::Subpage,
		href: href.into(),
		is_route: true,
		icon: "file",
		color: color_for(id),
		level,
		children: Vec::new(),
	}
}

fn section(info: &SectionInfo) -> TreeNode {
	let children = if info.key == PROJECTS_KEY {
		PROJECT_PAGES
			.iter()
			.map(|&(id, label, description, href)| subpage(id, label, description, href, 2))
			.collect()
	} else {
		Vec::new()
	};

	TreeNode {
		id: info.key.into(),
		label: info.label.into(),
		description: info.description.into(),
		node_type: NodeType::Section,
		href: format!("#{}", info.key),
		is_route: false,
		icon: info.icon,
		color: info.color,
		level: 1,
		children,
	}
}

/// Build the site tree for the given section order.
///
/// Unknown keys are dropped and repeated keys keep their first position, so
/// node ids stay unique. The card node is always the last child of the root.
pub fn build_site_tree<S: AsRef<str>>(section_order: &[S]) -> TreeNode {
	let mut children: Vec<TreeNode> = Vec::with_capacity(section_order.len() + 1);
	for key in section_order {
		let Some(info) = section_info(key.as_ref()) else {
			continue;
		};
		if children.iter().any(|c| c.id == info.key) {
			continue;
		}
		children.push(section(info));
	}
	children.push(subpage(CARD_ID, "Lanyard Card", "Interactive 3D badge", "/card", 1));

	TreeNode {
		id: ROOT_ID.into(),
		label: "Home".into(),
		description: "Portfolio landing page".into(),
		node_type: NodeType::Root,
		href: "/".into(),
		is_route: true,
		icon: "home",
		color: PRIMARY_COLOR,
		level: 0,
		children,
	}
}

/// Linearize the tree depth-first: root, then each level-1 node followed
/// immediately by its own children.
pub fn flatten_tree(root: &TreeNode) -> Vec<&TreeNode> {
	let mut out = vec![root];
	for child in &root.children {
		out.push(child);
		out.extend(child.children.iter());
	}
	out
}
