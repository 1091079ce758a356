use crate::dom::Dom;
use tracing::error;
use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// [`Dom`] backend over a live [`web_sys::Document`].
///
/// Failures from the host document (appending to a detached node, invalid tag
/// names aside) are logged and skipped rather than propagated; a render never
/// partially rolls back.
#[derive(Debug)]
pub struct WebDom {
	document: web_sys::Document,
}

impl WebDom {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Attaches to the window's document.
	#[must_use]
	pub fn from_window() -> Self {
		Self::new(
			web_sys::window()
				.expect_throw("remount: no window")
				.document()
				.expect_throw("remount: no document"),
		)
	}
}

impl Dom for WebDom {
	type Node = web_sys::Node;

	fn create_element(&mut self, tag: &str) -> Self::Node {
		self.document.create_element(tag).expect_throw("remount: failed to create element").into()
	}

	fn create_text(&mut self, text: &str) -> Self::Node {
		self.document.create_text_node(text).into()
	}

	fn set_inner_html(&mut self, node: &Self::Node, html: &str) {
		match node.dyn_ref::<web_sys::Element>() {
			Some(element) => element.set_inner_html(html),
			None => error!("Expected `web_sys::Element` for raw content but found {:?}; ignoring.", node),
		}
	}

	fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) {
		if let Err(error) = parent.append_child(child) {
			error!("Failed to append child: {:?}", error);
		}
	}

	fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node) {
		if let Err(error) = parent.remove_child(child) {
			error!("Failed to remove child: {:?}", error);
		}
	}
}
