//! The browser host, through [`web_sys`].

use crate::dom_api::{DomApi, NodeKind};
use tracing::{error, trace};
use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// [`DomApi`] over a [`web_sys::Document`].
///
/// Failing DOM operations throw into JavaScript (or panic, outside of wasm32).
#[derive(Debug, Clone)]
pub struct WebDomApi {
	document: web_sys::Document,
}

impl WebDomApi {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

fn element(node: &web_sys::Node) -> &web_sys::Element {
	node.dyn_ref::<web_sys::Element>().expect_throw("vdom-patch: Expected `web_sys::Element`.")
}

impl DomApi for WebDomApi {
	type Node = web_sys::Node;

	fn create_element(&self, tag_name: &str) -> Self::Node {
		self.document.create_element(tag_name).expect_throw("vdom-patch: Failed to create element.").into()
	}

	fn create_element_ns(&self, namespace_uri: &str, qualified_name: &str) -> Self::Node {
		self.document
			.create_element_ns(Some(namespace_uri), qualified_name)
			.expect_throw("vdom-patch: Failed to create namespaced element.")
			.into()
	}

	fn create_text_node(&self, text: &str) -> Self::Node {
		self.document.create_text_node(text).into()
	}

	fn create_comment(&self, text: &str) -> Self::Node {
		self.document.create_comment(text).into()
	}

	fn insert_before(&self, parent: &Self::Node, new_node: &Self::Node, reference_node: Option<&Self::Node>) {
		if let Err(error) = parent.insert_before(new_node, reference_node) {
			error!("Failed to insert node: {:?}", error);
			wasm_bindgen::throw_val(error)
		}
	}

	fn remove_child(&self, parent: &Self::Node, child: &Self::Node) {
		if let Err(error) = parent.remove_child(child) {
			error!("Failed to remove node: {:?}", error);
			wasm_bindgen::throw_val(error)
		}
	}

	fn append_child(&self, parent: &Self::Node, child: &Self::Node) {
		if let Err(error) = parent.append_child(child) {
			error!("Failed to append node: {:?}", error);
			wasm_bindgen::throw_val(error)
		}
	}

	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node> {
		node.parent_node()
	}

	fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node> {
		node.next_sibling()
	}

	fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node> {
		let child_nodes = node.child_nodes();
		(0..child_nodes.length()).filter_map(|i| child_nodes.item(i)).collect()
	}

	fn node_kind(&self, node: &Self::Node) -> NodeKind {
		match node.node_type() {
			web_sys::Node::ELEMENT_NODE => NodeKind::Element,
			web_sys::Node::TEXT_NODE => NodeKind::Text,
			web_sys::Node::COMMENT_NODE => NodeKind::Comment,
			other => {
				trace!("Node type {} is neither element, text nor comment.", other);
				NodeKind::Other
			}
		}
	}

	fn tag_name(&self, element_node: &Self::Node) -> String {
		element(element_node).tag_name()
	}

	fn set_text_content(&self, node: &Self::Node, text: &str) {
		node.set_text_content(Some(text))
	}

	fn get_text_content(&self, node: &Self::Node) -> Option<String> {
		node.text_content()
	}

	fn set_attribute(&self, element_node: &Self::Node, name: &str, value: &str) {
		if let Err(error) = element(element_node).set_attribute(name, value) {
			error!("Could not set attribute {:?}={:?}: {:?}", name, value, error);
			wasm_bindgen::throw_val(error)
		}
	}

	fn get_attribute(&self, element_node: &Self::Node, name: &str) -> Option<String> {
		element(element_node).get_attribute(name)
	}

	fn attributes(&self, element_node: &Self::Node) -> Vec<(String, String)> {
		let attributes = element(element_node).attributes();
		(0..attributes.length())
			.filter_map(|i| attributes.item(i))
			.map(|attribute| (attribute.local_name(), attribute.value()))
			.collect()
	}
}
