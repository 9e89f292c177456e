//! Terse construction of descriptor trees.

use crate::vnode::{VNode, VNodeData, COMMENT};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// What goes inside an element built with [`h`].
#[derive(Debug, Clone)]
pub enum Content<N> {
	Empty,
	Text(String),
	Children(Vec<VNode<N>>),
}

impl<N> From<()> for Content<N> {
	fn from((): ()) -> Self {
		Content::Empty
	}
}

impl<N> From<&str> for Content<N> {
	fn from(text: &str) -> Self {
		Content::Text(text.to_owned())
	}
}

impl<N> From<String> for Content<N> {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

macro_rules! numeric_content {
	($($number:ty),*$(,)?) => {$(
		impl<N> From<$number> for Content<N> {
			fn from(number: $number) -> Self {
				Content::Text(number.to_string())
			}
		}
	)*};
}
numeric_content!(i32, i64, u32, u64, usize, f64);

impl<N> From<Vec<VNode<N>>> for Content<N> {
	fn from(children: Vec<VNode<N>>) -> Self {
		Content::Children(children)
	}
}

impl<N> From<VNode<N>> for Content<N> {
	fn from(child: VNode<N>) -> Self {
		Content::Children(vec![child])
	}
}

/// Builds an element descriptor.
///
/// Selectors of the form `svg`, `svg.…` or `svg#…` put the whole subtree into the SVG namespace, see [`add_ns`].
#[must_use]
pub fn h<N>(sel: &str, data: VNodeData<N>, content: impl Into<Content<N>>) -> VNode<N> {
	let (children, text) = match content.into() {
		Content::Empty => (None, None),
		Content::Text(text) => (None, Some(text)),
		Content::Children(children) => (Some(children), None),
	};

	let mut vnode = VNode {
		sel: Some(sel.to_owned()),
		data: Some(data),
		children,
		text,
		elm: None,
	};
	if is_svg_selector(sel) {
		add_ns(&mut vnode);
	}
	vnode
}

/// Builds a text descriptor.
#[must_use]
pub fn text<N>(text: impl Into<String>) -> VNode<N> {
	VNode {
		sel: None,
		data: None,
		children: None,
		text: Some(text.into()),
		elm: None,
	}
}

/// Builds a comment descriptor.
#[must_use]
pub fn comment<N>(text: impl Into<String>) -> VNode<N> {
	VNode {
		sel: Some(COMMENT.to_owned()),
		data: Some(VNodeData::default()),
		children: None,
		text: Some(text.into()),
		elm: None,
	}
}

/// Whether `sel` is the root of an SVG subtree: `svg` followed by nothing, `.` or `#`.
#[must_use]
pub fn is_svg_selector(sel: &str) -> bool {
	sel.strip_prefix("svg").map_or(false, |rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('#'))
}

/// Puts `vnode` and all of its descendants that carry data into the SVG namespace.
///
/// The children of a `foreignObject` are left alone.
pub fn add_ns<N>(vnode: &mut VNode<N>) {
	vnode.data.get_or_insert_with(VNodeData::default).ns = Some(SVG_NAMESPACE.to_owned());
	if vnode.sel.as_deref() == Some("foreignObject") {
		return;
	}
	if let Some(children) = &mut vnode.children {
		for child in children.iter_mut().filter(|child| child.data.is_some()) {
			add_ns(child)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{comment, h, is_svg_selector, text, SVG_NAMESPACE};
	use crate::vnode::{VNode, VNodeData};

	fn ns(vnode: &VNode<()>) -> Option<&str> {
		vnode.data.as_ref()?.ns.as_deref()
	}

	#[test]
	fn svg_root_detection() {
		assert!(is_svg_selector("svg"));
		assert!(is_svg_selector("svg.icon"));
		assert!(is_svg_selector("svg#logo"));
		assert!(!is_svg_selector("svgx"));
		assert!(!is_svg_selector("div"));
		assert!(!is_svg_selector("sv"));
	}

	#[test]
	fn namespace_stops_below_foreign_object() {
		let vnode: VNode<()> = h(
			"svg",
			VNodeData::default(),
			vec![
				h("circle", VNodeData::default(), ()),
				h("foreignObject", VNodeData::default(), vec![h("div", VNodeData::default(), "html")]),
				text("bare"),
			],
		);

		assert_eq!(ns(&vnode), Some(SVG_NAMESPACE));
		let children = vnode.children.as_ref().unwrap();
		assert_eq!(ns(&children[0]), Some(SVG_NAMESPACE));
		assert_eq!(ns(&children[1]), Some(SVG_NAMESPACE));
		assert_eq!(ns(&children[1].children.as_ref().unwrap()[0]), None);
		assert!(children[2].data.is_none());
	}

	#[test]
	fn content_kinds() {
		let vnode: VNode<()> = h("p", VNodeData::default(), 42);
		assert_eq!(vnode.text.as_deref(), Some("42"));
		assert!(vnode.children.is_none());

		let vnode: VNode<()> = h("p", VNodeData::default(), comment("note"));
		assert_eq!(vnode.children.as_ref().unwrap()[0].sel.as_deref(), Some("!"));

		let vnode: VNode<()> = h("p", VNodeData::default(), ());
		assert!(vnode.children.is_none() && vnode.text.is_none());
	}
}
