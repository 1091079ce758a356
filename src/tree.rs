use crate::dom::Dom;
use core::fmt::Write as _;
use core::mem;

pub type NodeId = u32;

/// Handle into a [`TreeDom`] arena. Copyable and stable: a handle never
/// dangles, even after its node is detached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

#[derive(Debug)]
enum NodeData {
	Element {
		tag: String,
		inner_html: Option<String>,
		children: Vec<Id>,
	},
	Text {
		text: String,
	},
}

/// A recorded backend mutation, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomOp {
	CreateElement { node: Id, tag: String },
	CreateText { node: Id, text: String },
	SetInnerHtml { node: Id, html: String },
	Append { parent: Id, child: Id },
	Remove { parent: Id, child: Id },
}

/// In-memory [`Dom`] backend.
///
/// Nodes live in an id-addressed arena; detached nodes stay allocated so that
/// outstanding handles stay valid. Every mutation is also appended to an
/// operation log, which order-sensitive tests drain via [`TreeDom::take_ops`].
#[derive(Debug, Default)]
pub struct TreeDom {
	nodes: Vec<NodeData>,
	ops: Vec<DomOp>,
}

impl TreeDom {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn push(&mut self, data: NodeData) -> Id {
		#[allow(clippy::cast_possible_truncation)]
		let id = Id(self.nodes.len() as NodeId);
		self.nodes.push(data);
		id
	}

	#[must_use]
	pub fn tag(&self, node: Id) -> Option<&str> {
		if let NodeData::Element { tag, .. } = &self.nodes[node.0 as usize] {
			Some(tag)
		} else {
			None
		}
	}

	#[must_use]
	pub fn text(&self, node: Id) -> Option<&str> {
		if let NodeData::Text { text } = &self.nodes[node.0 as usize] {
			Some(text)
		} else {
			None
		}
	}

	#[must_use]
	pub fn inner_html(&self, node: Id) -> Option<&str> {
		if let NodeData::Element { inner_html, .. } = &self.nodes[node.0 as usize] {
			inner_html.as_deref()
		} else {
			None
		}
	}

	/// The attached children of `node`, in document order. Empty for text nodes.
	#[must_use]
	pub fn children(&self, node: Id) -> &[Id] {
		if let NodeData::Element { children, .. } = &self.nodes[node.0 as usize] {
			children
		} else {
			&[]
		}
	}

	/// Drains the operation log.
	pub fn take_ops(&mut self) -> Vec<DomOp> {
		mem::take(&mut self.ops)
	}

	/// Markup-style serialization of the subtree under `node`.
	///
	/// Deterministic and test-oriented; not a conforming HTML serializer.
	#[must_use]
	pub fn snapshot(&self, node: Id) -> String {
		let mut out = String::new();
		self.write_node(node, &mut out);
		out
	}

	/// Concatenated snapshots of `node`'s children: the container view.
	#[must_use]
	pub fn inner_snapshot(&self, node: Id) -> String {
		let mut out = String::new();
		for child in self.children(node) {
			self.write_node(*child, &mut out);
		}
		out
	}

	fn write_node(&self, node: Id, out: &mut String) {
		match &self.nodes[node.0 as usize] {
			NodeData::Text { text } => out.push_str(text),
			NodeData::Element { tag, inner_html, children } => {
				let _ = write!(out, "<{}>", tag);
				if let Some(html) = inner_html {
					out.push_str(html);
				}
				for child in children {
					self.write_node(*child, out);
				}
				let _ = write!(out, "</{}>", tag);
			}
		}
	}
}

impl Dom for TreeDom {
	type Node = Id;

	fn create_element(&mut self, tag: &str) -> Id {
		let node = self.push(NodeData::Element {
			tag: tag.to_owned(),
			inner_html: None,
			children: Vec::new(),
		});
		self.ops.push(DomOp::CreateElement { node, tag: tag.to_owned() });
		node
	}

	fn create_text(&mut self, text: &str) -> Id {
		let node = self.push(NodeData::Text { text: text.to_owned() });
		self.ops.push(DomOp::CreateText { node, text: text.to_owned() });
		node
	}

	fn set_inner_html(&mut self, node: &Id, html: &str) {
		if let NodeData::Element { inner_html, .. } = &mut self.nodes[node.0 as usize] {
			*inner_html = Some(html.to_owned());
		}
		self.ops.push(DomOp::SetInnerHtml {
			node: *node,
			html: html.to_owned(),
		});
	}

	fn append_child(&mut self, parent: &Id, child: &Id) {
		if let NodeData::Element { children, .. } = &mut self.nodes[parent.0 as usize] {
			children.push(*child);
		}
		self.ops.push(DomOp::Append {
			parent: *parent,
			child: *child,
		});
	}

	fn remove_child(&mut self, parent: &Id, child: &Id) {
		if let NodeData::Element { children, .. } = &mut self.nodes[parent.0 as usize] {
			children.retain(|c| c != child);
		}
		self.ops.push(DomOp::Remove {
			parent: *parent,
			child: *child,
		});
	}
}
