use crate::element::{Component, Element, Kind, Node};
use crate::props::Props;

/// The canonical virtual node, generic over the backend handle type `H`.
///
/// Exactly one of three things carries a node's liveness: text and host nodes
/// own a `dom` handle, fragments delegate to `children`, components delegate to
/// `content`. Handles and content are set by [`crate::diff::insert`] at mount
/// time, never by normalization.
#[derive(Debug)]
pub enum VNode<H> {
	Text {
		text: String,
		dom: Option<H>,
	},
	Fragment {
		key: Option<String>,
		children: Vec<VNode<H>>,
	},
	Host {
		tag: String,
		key: Option<String>,
		props: Props,
		children: Vec<VNode<H>>,
		dom: Option<H>,
	},
	Component {
		component: Component,
		key: Option<String>,
		props: Props,
		content: Option<Box<VNode<H>>>,
	},
}

impl<H> VNode<H> {
	#[must_use]
	pub fn text(&self) -> Option<&str> {
		if let VNode::Text { text, .. } = self {
			Some(text)
		} else {
			None
		}
	}

	#[must_use]
	pub fn key(&self) -> Option<&str> {
		match self {
			VNode::Text { .. } => None,
			VNode::Fragment { key, .. } | VNode::Host { key, .. } | VNode::Component { key, .. } => key.as_deref(),
		}
	}

	#[must_use]
	pub fn children(&self) -> &[VNode<H>] {
		match self {
			VNode::Fragment { children, .. } | VNode::Host { children, .. } => children,
			VNode::Text { .. } | VNode::Component { .. } => &[],
		}
	}

	/// Whether any part of this subtree currently holds a live handle.
	#[must_use]
	pub fn is_mounted(&self) -> bool {
		match self {
			VNode::Text { dom, .. } | VNode::Host { dom, .. } => dom.is_some(),
			VNode::Fragment { children, .. } => children.iter().any(VNode::is_mounted),
			VNode::Component { content, .. } => content.as_deref().map_or(false, VNode::is_mounted),
		}
	}
}

/// Normalizes a descriptor into its canonical virtual node.
///
/// Total and pure: never fails, never touches a document, and every call builds
/// the tree fresh. Nested descriptor lists are flattened to arbitrary depth; a
/// host element whose props carry `innerHTML` gets no normalized children.
#[must_use]
pub fn to_vnode<H>(node: &Node) -> VNode<H> {
	match node {
		Node::Null | Node::Bool(_) => VNode::Text { text: String::new(), dom: None },
		Node::Str(text) => VNode::Text { text: text.clone(), dom: None },
		Node::Int(value) => VNode::Text { text: value.to_string(), dom: None },
		Node::BigInt(value) => VNode::Text { text: value.to_string(), dom: None },
		Node::Float(value) => VNode::Text { text: float_text(*value), dom: None },
		Node::List(items) => {
			let mut flat = Vec::new();
			flatten_into(items, &mut flat);
			VNode::Fragment {
				key: None,
				children: flat.into_iter().map(to_vnode).collect(),
			}
		}
		Node::Element(element) => element_vnode(element),
	}
}

fn element_vnode<H>(element: &Element) -> VNode<H> {
	match &element.kind {
		Kind::Fragment => VNode::Fragment {
			key: element.key.clone(),
			children: child_vnodes(&element.props),
		},
		Kind::Host(tag) => VNode::Host {
			tag: tag.clone(),
			key: element.key.clone(),
			props: element.props.clone(),
			children: child_vnodes(&element.props),
			dom: None,
		},
		Kind::Component(component) => VNode::Component {
			component: component.clone(),
			key: element.key.clone(),
			props: element.props.clone(),
			content: None,
		},
	}
}

fn child_vnodes<H>(props: &Props) -> Vec<VNode<H>> {
	if props.has_inner_html() {
		// Raw content; the children prop is deliberately left unnormalized.
		return Vec::new();
	}
	match props.children() {
		None => Vec::new(),
		Some(value) => match value.to_node() {
			Node::List(items) => {
				let mut flat = Vec::new();
				flatten_into(&items, &mut flat);
				flat.into_iter().map(to_vnode).collect()
			}
			single => vec![to_vnode(&single)],
		},
	}
}

fn flatten_into<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
	for node in nodes {
		match node {
			Node::List(inner) => flatten_into(inner, out),
			other => out.push(other),
		}
	}
}

/// Canonical string form matching the authoring language's number-to-string rule:
/// finite floats with no fractional part print integrally.
#[allow(clippy::cast_possible_truncation)]
fn float_text(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 {
		// Casting is only exact below 2^53; larger magnitudes would saturate.
		if value.abs() < 9_007_199_254_740_992.0 {
			(value as i64).to_string()
		} else {
			format!("{:.0}", value)
		}
	} else {
		value.to_string()
	}
}
