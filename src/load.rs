//! Reads existing host content back into descriptors.
//!
//! Patching against a loaded tree keeps the host nodes that match, which is useful for taking over server-rendered markup.

use crate::{
	dom_api::{DomApi, NodeKind},
	vnode::{VNode, VNodeData, COMMENT},
};
use tracing::{instrument, warn};

/// Loads `node` and its subtree as a realized descriptor tree.
///
/// Elements get a `tag#id.class` selector. Their remaining attributes are stored in [`VNodeData::attrs`].
pub fn to_vnode<A: DomApi>(api: &A, node: &A::Node) -> VNode<A::Node> {
	match api.node_kind(node) {
		NodeKind::Element => load_element(api, node),
		NodeKind::Text => VNode {
			sel: None,
			data: None,
			children: None,
			text: api.get_text_content(node),
			elm: Some(node.clone()),
		},
		NodeKind::Comment => VNode {
			sel: Some(COMMENT.to_owned()),
			data: Some(VNodeData::default()),
			children: None,
			text: api.get_text_content(node),
			elm: Some(node.clone()),
		},
		NodeKind::Other => {
			warn!("Unrecognised host node {:?}. Loading it as empty text.", node);
			VNode {
				sel: None,
				data: None,
				children: None,
				text: None,
				elm: Some(node.clone()),
			}
		}
	}
}

#[instrument(skip(api))]
pub fn load_element<A: DomApi>(api: &A, element: &A::Node) -> VNode<A::Node> {
	let mut id = String::new();
	let mut classes = String::new();
	let mut data = VNodeData::default();
	for (name, value) in api.attributes(element) {
		match name.as_str() {
			"id" if !value.is_empty() => id = format!("#{}", value),
			"class" => {
				for class in value.split_whitespace() {
					classes.push('.');
					classes.push_str(class);
				}
			}
			_ => {
				data.attrs.insert(name, value);
			}
		}
	}
	// The id has to come first, see `Selector::parse`.
	let sel = format!("{}{}{}", api.tag_name(element).to_lowercase(), id, classes);

	VNode {
		sel: Some(sel),
		data: Some(data),
		children: Some(load_child_nodes(api, element)),
		text: None,
		elm: Some(element.clone()),
	}
}

pub fn load_child_nodes<A: DomApi>(api: &A, node: &A::Node) -> Vec<VNode<A::Node>> {
	api.child_nodes(node).iter().map(|child| to_vnode(api, child)).collect()
}
