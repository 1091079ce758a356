use crate::props::{Props, Value};
use core::fmt;
use std::rc::Rc;

/// An element descriptor as produced by a JSX-like authoring layer.
///
/// This is the author-facing input shape. It is never mounted directly;
/// [`crate::vnode::to_vnode`] normalizes it into a [`crate::vnode::VNode`] first.
#[derive(Clone, Debug)]
pub enum Node {
	/// Renders as an empty text node.
	Null,
	/// Renders as an empty text node, whichever the value.
	Bool(bool),
	Str(String),
	Int(i64),
	/// Large-integer scalar, kept separate from [`Node::Int`] like the authoring layer keeps `bigint` separate from `number`.
	BigInt(i128),
	Float(f64),
	/// A sequence of descriptors. May contain nested lists to any depth; normalization flattens them.
	List(Vec<Node>),
	Element(Element),
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Str(text.to_owned())
	}
}
impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Str(text)
	}
}
impl From<bool> for Node {
	fn from(value: bool) -> Self {
		Node::Bool(value)
	}
}
impl From<i64> for Node {
	fn from(value: i64) -> Self {
		Node::Int(value)
	}
}
impl From<f64> for Node {
	fn from(value: f64) -> Self {
		Node::Float(value)
	}
}
impl From<Vec<Node>> for Node {
	fn from(nodes: Vec<Node>) -> Self {
		Node::List(nodes)
	}
}
impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

/// A tagged descriptor: a kind, an optional identity hint and a prop map.
///
/// The `key` is carried through normalization but never consulted while mounting.
#[derive(Clone, Debug)]
pub struct Element {
	pub kind: Kind,
	pub key: Option<String>,
	pub props: Props,
}

impl Element {
	#[must_use]
	pub fn new(kind: Kind, props: Props) -> Self {
		Self { kind, key: None, props }
	}

	#[must_use]
	pub fn fragment() -> Self {
		Self::new(Kind::Fragment, Props::new())
	}

	#[must_use]
	pub fn host(tag: impl Into<String>) -> Self {
		Self::new(Kind::Host(tag.into()), Props::new())
	}

	#[must_use]
	pub fn component(component: Component) -> Self {
		Self::new(Kind::Component(component), Props::new())
	}

	#[must_use]
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	#[must_use]
	pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.props.insert(name, value);
		self
	}

	/// Sets the reserved `children` prop.
	#[must_use]
	pub fn children(self, children: impl Into<Node>) -> Self {
		self.prop("children", children.into())
	}
}

/// What an [`Element`] names: the fragment marker, a host tag or a callable component.
#[derive(Clone, Debug)]
pub enum Kind {
	Fragment,
	Host(String),
	Component(Component),
}

/// The render function a [`Component`] yields; called with the props minus `setup`.
pub type Render = Box<dyn Fn(&Props) -> Node>;

/// Empty context placeholder passed to every component invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scope;

/// A callable element kind.
///
/// Invoked once per mount with a [`Scope`] and the `setup` prop split out of the
/// prop map; the returned [`Render`] function is then called with the remaining
/// props to produce the descriptor that actually mounts. A component contributes
/// no live node of its own.
#[derive(Clone)]
pub struct Component(Rc<dyn Fn(Scope, Option<Value>) -> Render>);

impl Component {
	pub fn new(body: impl Fn(Scope, Option<Value>) -> Render + 'static) -> Self {
		Self(Rc::new(body))
	}

	/// Shorthand for components that ignore [`Scope`] and `setup`.
	pub fn from_render(render: impl Fn(&Props) -> Node + Clone + 'static) -> Self {
		Self::new(move |_scope, _setup| Box::new(render.clone()))
	}

	#[must_use]
	pub fn invoke(&self, scope: Scope, setup: Option<Value>) -> Render {
		(self.0)(scope, setup)
	}
}

impl fmt::Debug for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Component")
	}
}
