use crate::dom::Dom;
use crate::element::{Node, Scope};
use crate::vnode::{to_vnode, VNode};
use tracing::{trace, trace_span};

/// Mounts `node`'s representation under `parent`, recursively.
///
/// Host children are inserted into the newly created element before that
/// element is appended to `parent`, so a subtree becomes visible in one
/// append. Components are invoked here: `setup` is split out of the props, the
/// component yields a render function, and whatever that produces is
/// normalized into the node's `content` and mounted in its place.
pub fn insert<D: Dom>(dom: &mut D, node: &mut VNode<D::Node>, parent: &D::Node) {
	match node {
		VNode::Text { text, dom: handle } => {
			let span = trace_span!("Mounting text node", text = text.as_str());
			let _enter = span.enter();
			debug_assert!(handle.is_none(), "text node mounted twice");
			let created = dom.create_text(text);
			*handle = Some(created.clone());
			dom.append_child(parent, &created);
		}
		VNode::Fragment { children, .. } => {
			let span = trace_span!("Mounting fragment", "children.len()" = children.len());
			let _enter = span.enter();
			for child in children.iter_mut() {
				insert(dom, child, parent);
			}
		}
		VNode::Host {
			tag,
			props,
			children,
			dom: handle,
			..
		} => {
			let span = trace_span!("Mounting element", tag = tag.as_str());
			let _enter = span.enter();
			debug_assert!(handle.is_none(), "element mounted twice");
			let created = dom.create_element(tag);
			if let Some(html) = props.inner_html() {
				dom.set_inner_html(&created, html);
			}
			for child in children.iter_mut() {
				insert(dom, child, &created);
			}
			*handle = Some(created.clone());
			dom.append_child(parent, &created);
		}
		VNode::Component { component, props, content, .. } => {
			let span = trace_span!("Mounting component");
			let _enter = span.enter();
			let (setup, rest) = props.split_setup();
			let render = component.invoke(Scope, setup);
			let produced = render(&rest);
			*content = Some(Box::new(to_vnode(&produced)));
			if let Some(content) = content.as_deref_mut() {
				insert(dom, content, parent);
			}
		}
	}
}

/// Detaches `node`'s representation from `parent`.
///
/// A live handle takes its whole subtree with it, so recursion stops at the
/// first handle found. Fragments detach each child individually; components
/// forward to their mounted content.
pub fn remove<D: Dom>(dom: &mut D, node: &VNode<D::Node>, parent: &D::Node) {
	match node {
		VNode::Text { dom: Some(handle), text } => {
			let span = trace_span!("Removing text node", text = text.as_str());
			let _enter = span.enter();
			dom.remove_child(parent, handle);
		}
		VNode::Host { dom: Some(handle), tag, .. } => {
			let span = trace_span!("Removing element", tag = tag.as_str());
			let _enter = span.enter();
			dom.remove_child(parent, handle);
		}
		VNode::Fragment { children, .. } => {
			let span = trace_span!("Removing fragment", "children.len()" = children.len());
			let _enter = span.enter();
			for child in children {
				remove(dom, child, parent);
			}
		}
		VNode::Component { content: Some(content), .. } => {
			let span = trace_span!("Removing component content");
			let _enter = span.enter();
			remove(dom, content, parent);
		}
		VNode::Text { dom: None, .. } | VNode::Host { dom: None, .. } | VNode::Component { content: None, .. } => {
			trace!("Nothing to remove for unmounted node.");
		}
	}
}

/// The entire reconciliation policy: tear down, then rebuild.
///
/// No attribute patching, no subtree reuse, no keyed matching. The ordering is
/// part of the contract; components whose effects are tied to attach/detach
/// order see `curr` leave the document before anything of `next` arrives.
pub fn replace<D: Dom>(dom: &mut D, curr: &VNode<D::Node>, next: &mut VNode<D::Node>, parent: &D::Node) {
	remove(dom, curr, parent);
	insert(dom, next, parent);
}

/// Attached to a container node at construction, a `Root` renders descriptors
/// into it and keeps the single previous-tree slot between calls.
///
/// `render` takes `&mut self`, which makes the no-reentrant-render contract a
/// compile-time fact rather than a convention: nothing running inside a
/// component body can reach this root again during its own mount.
pub struct Root<D: Dom> {
	dom: D,
	container: D::Node,
	tree: Option<VNode<D::Node>>,
}

impl<D: Dom> Root<D> {
	#[must_use]
	pub fn new_for_element(dom: D, container: D::Node) -> Self {
		Self { dom, container, tree: None }
	}

	/// Normalizes `node` and mounts it, replacing whatever the previous call
	/// rendered.
	///
	/// The previous-tree slot only advances once the whole render has run, so
	/// a panicking component leaves the old tree in place; the next call
	/// replaces against it.
	pub fn render(&mut self, node: &Node) {
		let span = trace_span!("render", first = self.tree.is_none());
		let _enter = span.enter();
		let mut next = to_vnode(node);
		match &self.tree {
			None => insert(&mut self.dom, &mut next, &self.container),
			Some(curr) => replace(&mut self.dom, curr, &mut next, &self.container),
		}
		self.tree = Some(next);
	}

	#[must_use]
	pub fn dom(&self) -> &D {
		&self.dom
	}

	pub fn dom_mut(&mut self) -> &mut D {
		&mut self.dom
	}

	#[must_use]
	pub fn container(&self) -> &D::Node {
		&self.container
	}

	/// The currently mounted tree, if any render has happened yet.
	#[must_use]
	pub fn tree(&self) -> Option<&VNode<D::Node>> {
		self.tree.as_ref()
	}
}
