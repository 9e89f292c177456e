use crate::{
	dom_api::{DomApi, NodeKind},
	hooks::{Module, ModuleHooks},
	load,
	vnode::{same_vnode, VNode, VNodeData},
};
use core::{
	fmt::{self, Debug, Formatter},
	iter,
};
use std::rc::Rc;
use tracing::{error, field, instrument, trace, trace_span};
use wasm_bindgen::UnwrapThrowExt;

/// The previous side of a [`Patcher::patch`] call.
#[derive(Debug, Clone)]
pub enum PatchTarget<N> {
	/// The descriptor tree returned by the previous patch.
	VNode(VNode<N>),
	/// A bare host node, for the first patch.
	///
	/// An element is treated like an empty descriptor with its tag, id and classes,
	/// so an element that matches the new root's selector is kept and filled in.
	/// Text and comment nodes are [loaded](`crate::load::to_vnode`) with their content instead.
	Element(N),
}

impl<N> From<VNode<N>> for PatchTarget<N> {
	fn from(vnode: VNode<N>) -> Self {
		PatchTarget::VNode(vnode)
	}
}

/// Descriptors with a pending `insert` hook, as child index paths from the patch root.
#[derive(Debug, Default)]
pub(crate) struct InsertedVNodeQueue(Vec<Vec<usize>>);

impl InsertedVNodeQueue {
	pub fn push(&mut self, path: Vec<usize>) {
		self.0.push(path)
	}

	/// Calls the `insert` hooks in the order they were queued.
	fn flush<N>(self, root: &VNode<N>) {
		for path in self.0 {
			let vnode = path.iter().try_fold(root, |vnode, &i| vnode.children.as_ref()?.get(i));
			let vnode = match vnode {
				Some(vnode) => vnode,
				None => {
					error!("Queued descriptor at {:?} is gone. Was the tree restructured by a hook? Skipping its insert hook.", path);
					continue;
				}
			};
			if let Some(insert) = vnode.hooks().and_then(|hooks| hooks.insert.as_ref()) {
				let span = trace_span!("insert hook", sel = ?vnode.sel, key = ?vnode.key());
				let _enter = span.enter();
				insert(vnode)
			}
		}
	}
}

/// Reconciles descriptor trees against a host through a [`DomApi`].
///
/// Create one with [`init`].
pub struct Patcher<A: DomApi> {
	pub(crate) api: Rc<A>,
	pub(crate) cbs: ModuleHooks<A::Node>,
	/// The previous side passed to `create` hooks. Never modified.
	pub(crate) empty_node: VNode<A::Node>,
}

impl<A: DomApi> Debug for Patcher<A> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Patcher").field("cbs", &self.cbs).finish_non_exhaustive()
	}
}

/// Creates a [`Patcher`] that runs the hooks of `modules` (in this order) and writes through `api`.
#[must_use]
pub fn init<A: DomApi>(modules: Vec<Module<A::Node>>, api: A) -> Patcher<A> {
	Patcher::new(&modules, api)
}

impl<A: DomApi> Patcher<A> {
	#[must_use]
	pub fn new(modules: &[Module<A::Node>], api: A) -> Self {
		Self {
			api: Rc::new(api),
			cbs: ModuleHooks::new(modules),
			empty_node: VNode {
				sel: Some(String::new()),
				data: Some(VNodeData::default()),
				children: Some(Vec::new()),
				text: None,
				elm: None,
			},
		}
	}

	#[must_use]
	pub fn api(&self) -> &A {
		&self.api
	}

	/// Makes the host reflect `vnode`, given that it currently reflects `old_vnode`.
	///
	/// Returns `vnode` with all host references filled in. Pass it as `old_vnode` next time.
	///
	/// If the roots aren't the [same node](`same_vnode`), the new host subtree is placed right after the old one,
	/// which is then removed. This only happens if the old host node has a parent.
	#[instrument(skip(old_vnode, vnode))]
	pub fn patch(&self, old_vnode: impl Into<PatchTarget<A::Node>>, mut vnode: VNode<A::Node>) -> VNode<A::Node> {
		let mut inserted_vnode_queue = InsertedVNodeQueue::default();
		let mut path = Vec::new();

		for pre in &self.cbs.pre {
			pre()
		}

		let old_vnode = match old_vnode.into() {
			PatchTarget::VNode(old_vnode) => old_vnode,
			PatchTarget::Element(elm) => match self.api.node_kind(&elm) {
				NodeKind::Element => self.empty_node_at(elm),
				kind => {
					trace!(?kind, "Patch target is not an element. Loading it.");
					load::to_vnode(&*self.api, &elm)
				}
			},
		};

		if same_vnode(&old_vnode, &vnode) {
			self.patch_vnode(&old_vnode, &mut vnode, &mut inserted_vnode_queue, &mut path);
		} else {
			let span = trace_span!("Replacing root", old = ?old_vnode.sel, new = ?vnode.sel);
			let _enter = span.enter();

			let elm = old_vnode.host_node();
			let parent = self.api.parent_node(elm);

			let new_elm = self.create_elm(&mut vnode, &mut inserted_vnode_queue, &mut path);

			match parent {
				Some(parent) => {
					self.api.insert_before(&parent, &new_elm, self.api.next_sibling(elm).as_ref());
					self.remove_vnodes(&parent, iter::once(&old_vnode));
				}
				None => trace!("Old root is detached. Leaving the new root detached too."),
			}
		}

		inserted_vnode_queue.flush(&vnode);

		for post in &self.cbs.post {
			post()
		}

		vnode
	}

	/// A descriptor for a bare host element, with the element's tag, id and classes and no content.
	fn empty_node_at(&self, elm: A::Node) -> VNode<A::Node> {
		let id = self.api.get_attribute(&elm, "id").filter(|id| !id.is_empty()).map(|id| format!("#{}", id));
		let class = self
			.api
			.get_attribute(&elm, "class")
			.filter(|class| !class.is_empty())
			.map(|class| format!(".{}", class.split(' ').collect::<Vec<_>>().join(".")));

		VNode {
			sel: Some(format!("{}{}{}", self.api.tag_name(&elm).to_lowercase(), id.unwrap_or_default(), class.unwrap_or_default())),
			data: Some(VNodeData::default()),
			children: Some(Vec::new()),
			text: None,
			elm: Some(elm),
		}
	}

	/// Reconciles two descriptors of the [same node](`same_vnode`).
	pub(crate) fn patch_vnode(&self, old_vnode: &VNode<A::Node>, vnode: &mut VNode<A::Node>, inserted_vnode_queue: &mut InsertedVNodeQueue, path: &mut Vec<usize>) {
		let span = trace_span!("Patching", sel = ?vnode.sel, key = ?vnode.key(), old_text = field::Empty, text = field::Empty);
		if cfg!(feature = "dangerous-logging") {
			span.record("old_text", &field::debug(&old_vnode.text));
			span.record("text", &field::debug(&vnode.text));
		}
		let _enter = span.enter();

		if let Some(prepatch) = vnode.hooks().and_then(|hooks| hooks.prepatch.clone()) {
			prepatch(old_vnode, vnode)
		}

		let elm = old_vnode.host_node().clone();
		vnode.elm = Some(elm.clone());

		if vnode.data.is_some() {
			for update in &self.cbs.update {
				update(old_vnode, vnode)
			}
			if let Some(update) = vnode.hooks().and_then(|hooks| hooks.update.as_ref()) {
				update(old_vnode, vnode)
			}
		}

		if vnode.text.is_none() {
			match (&old_vnode.children, &mut vnode.children) {
				(Some(old_ch), Some(ch)) => self.update_children(&elm, old_ch, ch, inserted_vnode_queue, path),
				(None, Some(ch)) => {
					if old_vnode.text.is_some() {
						self.api.set_text_content(&elm, "")
					}
					let end = ch.len();
					self.add_vnodes(&elm, None, ch, 0, end, inserted_vnode_queue, path)
				}
				(Some(old_ch), None) => self.remove_vnodes(&elm, old_ch),
				(None, None) => {
					if old_vnode.text.is_some() {
						self.api.set_text_content(&elm, "")
					}
				}
			}
		} else if old_vnode.text != vnode.text {
			if let Some(old_ch) = &old_vnode.children {
				self.remove_vnodes(&elm, old_ch)
			}
			self.api.set_text_content(&elm, vnode.text.as_deref().unwrap_or_default())
		}

		if let Some(postpatch) = vnode.hooks().and_then(|hooks| hooks.postpatch.as_ref()) {
			postpatch(old_vnode, vnode)
		}
	}
}
