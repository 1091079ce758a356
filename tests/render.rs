use remount::diff::{insert, remove, Root};
use remount::dom::Dom as _;
use remount::element::{Component, Element, Node};
use remount::props::{Props, Value};
use remount::tree::{DomOp, Id, TreeDom};
use remount::vnode::{to_vnode, VNode};
use std::cell::Cell;
use std::rc::Rc;

fn new_root() -> (Root<TreeDom>, Id) {
	let mut dom = TreeDom::new();
	let container = dom.create_element("root");
	(Root::new_for_element(dom, container), container)
}

#[test]
fn mounts_a_div_with_text() {
	let (mut root, container) = new_root();
	root.render(&Element::host("div").children("hi").into());

	let dom = root.dom();
	assert_eq!(dom.children(container).len(), 1);
	let div = dom.children(container)[0];
	assert_eq!(dom.tag(div), Some("div"));
	assert_eq!(dom.children(div).len(), 1);
	assert_eq!(dom.text(dom.children(div)[0]), Some("hi"));
}

#[test]
fn null_render_then_span_leaves_exactly_one_span() {
	let (mut root, container) = new_root();

	root.render(&Node::Null);
	// The first render mounts a single empty text node.
	assert_eq!(root.dom().children(container).len(), 1);
	assert_eq!(root.dom().text(root.dom().children(container)[0]), Some(""));

	root.render(&Element::host("span").into());
	assert_eq!(root.dom().children(container).len(), 1);
	assert_eq!(root.dom().tag(root.dom().children(container)[0]), Some("span"));
}

#[test]
fn component_props_exclude_setup_and_produced_descriptor_mounts() {
	let (mut root, container) = new_root();

	let invocations = Rc::new(Cell::new(0));
	let component = {
		let invocations = Rc::clone(&invocations);
		Component::new(move |_scope, setup| {
			invocations.set(invocations.get() + 1);
			assert_eq!(setup.as_ref().and_then(Value::as_int), Some(7));
			Box::new(|props: &Props| {
				assert!(props.get("setup").is_none(), "render props must not include `setup`");
				assert_eq!(props.len(), 1);
				let label = props.get("label").and_then(Value::as_str).expect("label prop");
				Node::from(label.to_owned())
			})
		})
	};

	root.render(&Element::component(component).prop("setup", 7_i64).prop("label", "x").into());
	assert_eq!(invocations.get(), 1);
	assert_eq!(root.dom().inner_snapshot(container), "x");
	// The component itself holds no live handle; its content does.
	match root.tree().expect("rendered") {
		VNode::Component { content, .. } => assert!(content.as_deref().map_or(false, VNode::is_mounted)),
		other => panic!("expected a component at the root, got {:?}", other),
	}
}

#[test]
fn component_rerender_detaches_old_text_before_inserting_new() {
	let (mut root, container) = new_root();

	root.render(&Element::component(Component::from_render(|_props: &Props| Node::from("x"))).into());
	assert_eq!(root.dom().inner_snapshot(container), "x");

	root.dom_mut().take_ops();
	root.render(&Element::component(Component::from_render(|_props: &Props| Node::from("y"))).into());

	let ops = root.dom_mut().take_ops();
	assert!(matches!(ops[0], DomOp::Remove { .. }), "old content must detach first, got {:?}", ops);
	assert!(matches!(ops[1], DomOp::CreateText { .. }));
	assert!(matches!(ops[2], DomOp::Append { .. }));
	assert_eq!(root.dom().inner_snapshot(container), "y");
}

#[test]
fn inner_html_elements_mount_with_no_normalized_children() {
	let (mut root, container) = new_root();
	root.render(
		&Element::host("div")
			.prop("innerHTML", "<b>x</b>")
			.children("ignored")
			.into(),
	);

	let dom = root.dom();
	let div = dom.children(container)[0];
	assert_eq!(dom.children(div).len(), 0);
	assert_eq!(dom.inner_html(div), Some("<b>x</b>"));
	assert_eq!(dom.snapshot(div), "<div><b>x</b></div>");
}

#[test]
fn mount_then_remove_returns_container_to_empty() {
	let mut dom = TreeDom::new();
	let container = dom.create_element("root");

	let descriptor: Node = Element::host("ul")
		.children(vec![
			Node::from(Element::host("li").children("one")),
			Node::from(Element::host("li").children("two")),
		])
		.into();
	let mut vnode: VNode<Id> = to_vnode(&descriptor);

	insert(&mut dom, &mut vnode, &container);
	assert!(vnode.is_mounted());
	assert_eq!(dom.inner_snapshot(container), "<ul><li>one</li><li>two</li></ul>");

	remove(&mut dom, &vnode, &container);
	assert!(dom.children(container).is_empty());
}

#[test]
fn replace_removes_the_old_subtree_before_appending_the_new() {
	let (mut root, container) = new_root();
	root.render(&Element::host("div").children("A").into());

	root.dom_mut().take_ops();
	root.render(&Element::host("span").children("B").into());

	let ops = root.dom_mut().take_ops();
	let remove_pos = ops
		.iter()
		.position(|op| matches!(op, DomOp::Remove { parent, .. } if *parent == container))
		.expect("a removal against the container");
	let append_pos = ops
		.iter()
		.position(|op| matches!(op, DomOp::Append { parent, .. } if *parent == container))
		.expect("an append against the container");
	assert!(remove_pos < append_pos, "remove-before-insert ordering violated: {:?}", ops);
	assert_eq!(root.dom().inner_snapshot(container), "<span>B</span>");
}

#[test]
fn fragments_mount_in_order_and_detach_each_child() {
	let mut dom = TreeDom::new();
	let container = dom.create_element("root");

	let fragment: Node = vec![Node::from("a"), Node::from("b"), Node::from("c")].into();
	let mut vnode: VNode<Id> = to_vnode(&fragment);

	insert(&mut dom, &mut vnode, &container);
	assert_eq!(dom.inner_snapshot(container), "abc");

	dom.take_ops();
	remove(&mut dom, &vnode, &container);
	assert!(dom.children(container).is_empty());

	// A fragment has no live node of its own; each child detaches individually.
	let removals = dom.take_ops().iter().filter(|op| matches!(op, DomOp::Remove { .. })).count();
	assert_eq!(removals, 3);
}

#[test]
fn nested_lists_render_in_flattened_order() {
	let (mut root, container) = new_root();
	root.render(&Node::List(vec![
		Node::from("a"),
		Node::List(vec![Node::from("b"), Node::List(vec![Node::from("c")])]),
		Node::from("d"),
	]));
	assert_eq!(root.dom().inner_snapshot(container), "abcd");
}

#[test]
fn scalar_renders_use_canonical_text() {
	let (mut root, container) = new_root();
	root.render(&Node::Float(5.0));
	assert_eq!(root.dom().inner_snapshot(container), "5");

	root.render(&Node::Int(42));
	assert_eq!(root.dom().inner_snapshot(container), "42");
}

#[test]
fn rerender_rebuilds_even_identical_descriptors() {
	let (mut root, container) = new_root();
	let descriptor: Node = Element::host("div").children("same").into();

	root.render(&descriptor);
	let first = root.dom().children(container)[0];

	root.render(&descriptor);
	let second = root.dom().children(container)[0];
	assert_ne!(first, second, "no subtree reuse: an identical re-render still rebuilds");
	assert_eq!(root.dom().inner_snapshot(container), "<div>same</div>");
}

#[test]
fn components_returning_elements_mount_their_subtree() {
	let (mut root, container) = new_root();
	let component = Component::from_render(|props: &Props| {
		let name = props.get("name").and_then(Value::as_str).unwrap_or("world").to_owned();
		Element::host("p").children(vec![Node::from("hello "), Node::from(name)]).into()
	});

	root.render(&Element::component(component).prop("name", "remount").into());
	assert_eq!(root.dom().inner_snapshot(container), "<p>hello remount</p>");
}
