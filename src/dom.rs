/// The live-document seam.
///
/// The mount engine drives a `Dom` through exactly five primitives: create an
/// element by tag name, create a text node, set raw markup, append and remove.
/// Handles are opaque and non-owning; the virtual node tree alone decides when
/// a handle's node is created or detached.
///
/// Implementations are expected to be infallible from the engine's point of
/// view: a backend that can fail (see [`crate::web`]) logs and skips rather
/// than surfacing errors, so a render never partially rolls back.
pub trait Dom {
	/// Opaque handle to a node this backend created.
	type Node: Clone;

	fn create_element(&mut self, tag: &str) -> Self::Node;

	fn create_text(&mut self, text: &str) -> Self::Node;

	/// Replaces `node`'s content with raw markup. The engine treats the result
	/// as opaque; it never mounts or unmounts below such a node.
	fn set_inner_html(&mut self, node: &Self::Node, html: &str);

	fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

	/// Detaches `child` (and with it, `child`'s entire subtree) from `parent`.
	fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node);
}
