use crate::element::Node;
use hashbrown::HashMap;

/// A prop value. `children` holds a descriptor; `innerHTML` a raw markup string;
/// `setup` whatever the component expects.
#[derive(Clone, Debug)]
pub enum Value {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
	Node(Box<Node>),
}

impl Value {
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		if let Value::Str(text) = self {
			Some(text)
		} else {
			None
		}
	}

	#[must_use]
	pub fn as_int(&self) -> Option<i64> {
		if let Value::Int(value) = self {
			Some(*value)
		} else {
			None
		}
	}

	/// The value viewed as a renderable descriptor; scalar props render as text.
	#[must_use]
	pub fn to_node(&self) -> Node {
		match self {
			Value::Str(text) => Node::Str(text.clone()),
			Value::Int(value) => Node::Int(*value),
			Value::Float(value) => Node::Float(*value),
			Value::Bool(value) => Node::Bool(*value),
			Value::Node(node) => (**node).clone(),
		}
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::Str(text.to_owned())
	}
}
impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::Str(text)
	}
}
impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}
impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}
impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}
impl From<Node> for Value {
	fn from(node: Node) -> Self {
		Value::Node(Box::new(node))
	}
}

/// The prop map of an element descriptor.
///
/// `children`, `innerHTML` and `setup` are reserved names with normalization and
/// mount semantics; everything else rides along untouched.
#[derive(Clone, Debug, Default)]
pub struct Props(HashMap<String, Value>);

impl Props {
	#[must_use]
	pub fn new() -> Self {
		Self(HashMap::new())
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(name.into(), value.into());
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	#[must_use]
	pub fn children(&self) -> Option<&Value> {
		self.get("children")
	}

	/// Whether `innerHTML` is present and non-null; a null descriptor value
	/// counts as absent, so children normalize as usual.
	#[must_use]
	pub fn has_inner_html(&self) -> bool {
		match self.get("innerHTML") {
			None => false,
			Some(Value::Node(node)) => !matches!(**node, Node::Null),
			Some(_) => true,
		}
	}

	#[must_use]
	pub fn inner_html(&self) -> Option<&str> {
		self.get("innerHTML").and_then(Value::as_str)
	}

	/// Splits the `setup` entry from a copy of the remaining props.
	///
	/// The remainder is what a component's render function receives.
	#[must_use]
	pub fn split_setup(&self) -> (Option<Value>, Props) {
		let mut rest = self.clone();
		let setup = rest.0.remove("setup");
		(setup, rest)
	}
}
