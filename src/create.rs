use crate::{
	dom_api::DomApi,
	patch::{InsertedVNodeQueue, Patcher},
	selector::Selector,
	vnode::VNode,
};
use tracing::{field, trace, trace_span};

impl<A: DomApi> Patcher<A> {
	/// Creates the host subtree for `vnode` and records it on each descriptor.
	///
	/// The result is not attached to anything yet.
	/// `path` is `vnode`'s position below the patch root and must be restored before returning.
	pub(crate) fn create_elm(&self, vnode: &mut VNode<A::Node>, inserted_vnode_queue: &mut InsertedVNodeQueue, path: &mut Vec<usize>) -> A::Node {
		if let Some(init) = vnode.hooks().and_then(|hooks| hooks.init.clone()) {
			let span = trace_span!("init hook");
			let _enter = span.enter();
			init(vnode);
		}

		let span = trace_span!("Creating", sel = ?vnode.sel, key = ?vnode.key(), text = field::Empty, path = field::Empty);
		if cfg!(feature = "dangerous-logging") {
			span.record("text", &field::debug(&vnode.text));
		}
		if cfg!(feature = "log-paths") {
			span.record("path", &field::debug(&path));
		}
		let _enter = span.enter();

		if vnode.is_comment() {
			let comment = self.api.create_comment(vnode.text.get_or_insert_with(String::new));
			vnode.elm = Some(comment.clone());
			return comment;
		}

		let elm = match &vnode.sel {
			None => {
				let text = self.api.create_text_node(vnode.text.as_deref().unwrap_or_default());
				vnode.elm = Some(text.clone());
				return text;
			}
			Some(sel) => {
				let Selector { tag, id, class } = Selector::parse(sel);
				let elm = match vnode.data.as_ref().and_then(|data| data.ns.as_deref()) {
					Some(ns) => self.api.create_element_ns(ns, tag),
					None => self.api.create_element(tag),
				};
				if let Some(id) = id {
					self.api.set_attribute(&elm, "id", id)
				}
				if let Some(class) = class {
					self.api.set_attribute(&elm, "class", &class)
				}
				elm
			}
		};
		vnode.elm = Some(elm.clone());

		for create in &self.cbs.create {
			create(&self.empty_node, vnode)
		}

		if let Some(children) = &mut vnode.children {
			for (i, child) in children.iter_mut().enumerate() {
				path.push(i);
				let child_elm = self.create_elm(child, inserted_vnode_queue, path);
				path.pop();
				self.api.append_child(&elm, &child_elm);
			}
		} else if let Some(text) = &vnode.text {
			self.api.append_child(&elm, &self.api.create_text_node(text));
		}

		if let Some(hooks) = vnode.hooks() {
			if let Some(create) = &hooks.create {
				create(&self.empty_node, vnode)
			}
			if hooks.insert.is_some() {
				trace!("Queueing insert hook.");
				inserted_vnode_queue.push(path.clone());
			}
		}

		elm
	}

	/// Creates `vnodes[start..end]` and inserts each before `before` (or appends them).
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn add_vnodes(
		&self,
		parent_elm: &A::Node,
		before: Option<&A::Node>,
		vnodes: &mut [VNode<A::Node>],
		start: usize,
		end: usize,
		inserted_vnode_queue: &mut InsertedVNodeQueue,
		path: &mut Vec<usize>,
	) {
		for (i, vnode) in vnodes.iter_mut().enumerate().take(end).skip(start) {
			path.push(i);
			let elm = self.create_elm(vnode, inserted_vnode_queue, path);
			path.pop();
			self.api.insert_before(parent_elm, &elm, before);
		}
	}
}
