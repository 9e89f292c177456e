use core::fmt::Debug;

/// What kind of host node something is, as far as the patcher cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Element,
	Text,
	Comment,
	Other,
}

/// The host tree the [`Patcher`](`crate::Patcher`) writes to.
///
/// All mutations of the host go through this trait. Implementations are expected to be infallible:
/// A failing host operation should panic (or throw, on wasm32), since the patch can't continue on an inconsistent host.
///
/// See [`WebDomApi`](`crate::web::WebDomApi`) for the browser implementation.
pub trait DomApi: 'static {
	/// A handle to a host node. Cloning it must not clone the node itself.
	type Node: Clone + Debug + 'static;

	fn create_element(&self, tag_name: &str) -> Self::Node;
	fn create_element_ns(&self, namespace_uri: &str, qualified_name: &str) -> Self::Node;
	fn create_text_node(&self, text: &str) -> Self::Node;
	fn create_comment(&self, text: &str) -> Self::Node;

	/// Inserts (or moves) `new_node` into `parent` before `reference_node`, or at the end if that's [`None`].
	fn insert_before(&self, parent: &Self::Node, new_node: &Self::Node, reference_node: Option<&Self::Node>);
	fn remove_child(&self, parent: &Self::Node, child: &Self::Node);
	fn append_child(&self, parent: &Self::Node, child: &Self::Node);

	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;
	fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;
	fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node>;
	fn node_kind(&self, node: &Self::Node) -> NodeKind;

	/// The element's tag name as reported by the host. May be upper case.
	fn tag_name(&self, element: &Self::Node) -> String;

	/// Replaces all content of `node` with `text`. An empty `text` leaves an element without children.
	fn set_text_content(&self, node: &Self::Node, text: &str);
	fn get_text_content(&self, node: &Self::Node) -> Option<String>;

	fn set_attribute(&self, element: &Self::Node, name: &str, value: &str);
	fn get_attribute(&self, element: &Self::Node, name: &str) -> Option<String>;
	/// All attributes of `element` as name/value pairs, in host order.
	fn attributes(&self, element: &Self::Node) -> Vec<(String, String)>;
}
