use std::{cell::RefCell, rc::Rc};
use vdom_patch::{builder::SVG_NAMESPACE, comment, h, init, text, Hooks, Module, PatchTarget, VNode, VNodeData};

use memory_dom_::{init_logging, MemoryDom, Node, Op};

type Log = Rc<RefCell<Vec<String>>>;

fn name(vnode: &VNode<Node>) -> String {
	vnode.sel.clone().unwrap_or_else(|| "#text".to_owned())
}

#[test]
fn selector_becomes_tag_id_and_class() {
	init_logging();
	let patcher = init(Vec::new(), MemoryDom::default());
	let (body, container) = patcher.api().mount_point();

	let vnode = patcher.patch(PatchTarget::Element(container), h("section#main.wide.dark", VNodeData::default(), "Hello"));

	assert_eq!(body.children(), vec![vnode.host_node().clone()]);
	assert_eq!(vnode.host_node().to_html(), r#"<section id="main" class="wide dark">Hello</section>"#);
	assert_eq!(
		patcher.api().ops()[..4],
		[
			Op::CreateElement("section".to_owned()),
			Op::SetAttribute {
				node: vnode.host_node().id(),
				name: "id".to_owned(),
				value: "main".to_owned()
			},
			Op::SetAttribute {
				node: vnode.host_node().id(),
				name: "class".to_owned(),
				value: "wide dark".to_owned()
			},
			Op::CreateText("Hello".to_owned()),
		]
	);
}

#[test]
fn comments_and_text() {
	init_logging();
	let patcher = init(Vec::new(), MemoryDom::default());
	let (_body, container) = patcher.api().mount_point();

	let mut bare_comment: VNode<Node> = comment("x");
	bare_comment.text = None;

	let vnode = patcher.patch(
		PatchTarget::Element(container),
		h("div", VNodeData::default(), vec![text("a"), comment("note"), bare_comment, text("b")]),
	);

	assert_eq!(vnode.host_node().to_html(), "<div>a<!--note--><!---->b</div>");
	let children = vnode.children.as_ref().unwrap();
	assert_eq!(children[2].text.as_deref(), Some(""));
	for child in children {
		assert_eq!(child.host_node().parent().as_ref(), Some(vnode.host_node()));
	}
}

#[test]
fn children_win_over_text() {
	init_logging();
	let patcher = init(Vec::new(), MemoryDom::default());
	let (_body, container) = patcher.api().mount_point();

	let mut vnode = h("p", VNodeData::default(), vec![text("child")]);
	vnode.text = Some("ignored".to_owned());
	let vnode = patcher.patch(PatchTarget::Element(container), vnode);

	assert_eq!(vnode.host_node().to_html(), "<p>child</p>");
}

#[test]
fn svg_subtree_is_namespaced() {
	init_logging();
	let patcher = init(Vec::new(), MemoryDom::default());
	let (_body, container) = patcher.api().mount_point();

	let vnode = patcher.patch(
		PatchTarget::Element(container),
		h(
			"div",
			VNodeData::default(),
			h(
				"svg.icon",
				VNodeData::default(),
				vec![
					h("circle", VNodeData::default(), ()),
					h("foreignObject", VNodeData::default(), h("span", VNodeData::default(), "html")),
				],
			),
		),
	);

	let div = vnode.host_node();
	assert_eq!(div.namespace(), None);
	let svg = &div.children()[0];
	assert_eq!(svg.namespace().as_deref(), Some(SVG_NAMESPACE));
	assert_eq!(svg.name(), "svg");
	let circle = &svg.children()[0];
	let foreign_object = &svg.children()[1];
	assert_eq!(circle.namespace().as_deref(), Some(SVG_NAMESPACE));
	assert_eq!(foreign_object.namespace().as_deref(), Some(SVG_NAMESPACE));
	assert_eq!(foreign_object.children()[0].namespace(), None);
}

#[test]
fn init_hook_rewrites_the_descriptor_first() {
	init_logging();
	let log: Log = Rc::default();
	let module = {
		let log = Rc::clone(&log);
		Module::<Node>::default().on_create(move |_, vnode| log.borrow_mut().push(format!("module create {}", name(vnode))))
	};
	let patcher = init(vec![module], MemoryDom::default());
	let (_body, container) = patcher.api().mount_point();

	let hooks = {
		let log = Rc::clone(&log);
		Hooks::default().on_init(move |vnode: &mut VNode<Node>| {
			log.borrow_mut().push(format!("init {}", name(vnode)));
			assert!(vnode.elm.is_none());
			vnode.data = Some(VNodeData::default().with_ns("urn:example"));
			vnode.children = Some(vec![text("rewritten")]);
		})
	};
	let vnode = patcher.patch(PatchTarget::Element(container), h("x-widget", VNodeData::default().with_hooks(hooks), "original"));

	assert_eq!(*log.borrow(), ["init x-widget", "module create x-widget"]);
	assert_eq!(vnode.host_node().namespace().as_deref(), Some("urn:example"));
	assert_eq!(vnode.host_node().to_html(), "<x-widget>rewritten</x-widget>");
	assert!(vnode.hooks().is_none());
}

#[test]
fn create_hooks_run_parent_first_and_own_hook_last() {
	init_logging();
	let log: Log = Rc::default();
	let module = {
		let log = Rc::clone(&log);
		Module::<Node>::default().on_create(move |empty, vnode| {
			assert_eq!(empty.sel.as_deref(), Some(""));
			assert!(empty.elm.is_none());
			assert!(vnode.elm.is_some());
			log.borrow_mut().push(format!("module create {}", name(vnode)))
		})
	};
	let patcher = init(vec![module], MemoryDom::default());
	let (_body, container) = patcher.api().mount_point();

	let own = |log: &Log| {
		let log = Rc::clone(log);
		Hooks::default().on_create(move |_, vnode: &VNode<Node>| {
			let attached = vnode.children.iter().flatten().all(|child| child.host_node().parent().as_ref() == vnode.elm.as_ref());
			log.borrow_mut().push(format!("own create {} attached={}", name(vnode), attached))
		})
	};
	patcher.patch(
		PatchTarget::Element(container),
		h(
			"a",
			VNodeData::default().with_hooks(own(&log)),
			vec![h("b", VNodeData::default().with_hooks(own(&log)), vec![text("t")]), h("c", VNodeData::default(), ())],
		),
	);

	assert_eq!(
		*log.borrow(),
		[
			"module create a",
			"module create b",
			"own create b attached=true",
			"module create c",
			"own create a attached=true",
		]
	);
}

#[test]
fn insert_hooks_run_after_everything_is_attached_in_creation_order() {
	init_logging();
	let log: Log = Rc::default();
	let patcher = init(Vec::new(), MemoryDom::default());
	let (body, container) = patcher.api().mount_point();

	let insert = |log: &Log, body: &Node| {
		let log = Rc::clone(log);
		let body = body.clone();
		Hooks::default().on_insert(move |vnode: &VNode<Node>| {
			let mut root = vnode.host_node().clone();
			while let Some(parent) = root.parent() {
				root = parent;
			}
			log.borrow_mut().push(format!("insert {} in_body={}", name(vnode), root == body))
		})
	};
	let vnode = patcher.patch(
		PatchTarget::Element(container),
		h(
			"a",
			VNodeData::default().with_hooks(insert(&log, &body)),
			vec![
				h("b", VNodeData::default().with_hooks(insert(&log, &body)), h("c", VNodeData::default().with_hooks(insert(&log, &body)), ())),
				h("d", VNodeData::default().with_hooks(insert(&log, &body)), ()),
			],
		),
	);

	assert_eq!(*log.borrow(), ["insert c in_body=true", "insert b in_body=true", "insert d in_body=true", "insert a in_body=true"]);

	// Nodes created while patching children are queued too:
	log.borrow_mut().clear();
	patcher.patch(
		vnode,
		h(
			"a",
			VNodeData::default(),
			vec![
				h("b", VNodeData::default(), ()),
				h("e", VNodeData::default().with_hooks(insert(&log, &body)), h("f", VNodeData::default().with_hooks(insert(&log, &body)), ())),
				h("d", VNodeData::default(), ()),
			],
		),
	);
	assert_eq!(*log.borrow(), ["insert f in_body=true", "insert e in_body=true"]);
}
