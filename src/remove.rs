use crate::{dom_api::DomApi, patch::Patcher, vnode::VNode};
use core::{
	cell::Cell,
	fmt::{self, Debug, Formatter},
};
use std::rc::Rc;
use tracing::{instrument, trace, trace_span, warn};

/// A requested removal of one host node.
///
/// The node is detached from its parent once every participant has called [`acknowledge`](`Removal::acknowledge`):
/// each module `remove` hook and either the descriptor's own `remove` hook or the patcher itself.
/// This lets exit animations hold on to the handle for as long as they need.
pub struct Removal<N> {
	remaining: Cell<usize>,
	node: N,
	commit: Cell<Option<Box<dyn FnOnce()>>>,
}

impl<N> Removal<N> {
	pub(crate) fn new(listeners: usize, node: N, commit: impl FnOnce() + 'static) -> Self {
		Self {
			remaining: Cell::new(listeners),
			node,
			commit: Cell::new(Some(Box::new(commit))),
		}
	}

	/// The host node that will be removed.
	pub fn node(&self) -> &N {
		&self.node
	}

	/// How many acknowledgements are still outstanding.
	pub fn remaining(&self) -> usize {
		self.remaining.get()
	}

	/// Whether the host node has been detached already.
	pub fn is_committed(&self) -> bool {
		self.remaining.get() == 0
	}

	/// Counts down once. The host node is detached when the count reaches zero.
	///
	/// Calls after that are ignored.
	pub fn acknowledge(&self) {
		match self.remaining.get() {
			0 => warn!("Removal acknowledged more often than there were listeners. Ignoring."),
			1 => {
				self.remaining.set(0);
				if let Some(commit) = self.commit.take() {
					trace!("Last acknowledgement received. Detaching host node.");
					commit()
				}
			}
			remaining => self.remaining.set(remaining - 1),
		}
	}
}

impl<N: Debug> Debug for Removal<N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Removal")
			.field("remaining", &self.remaining.get())
			.field("node", &self.node)
			.finish_non_exhaustive()
	}
}

impl<A: DomApi> Patcher<A> {
	/// Runs the destroy hooks of `vnode`'s subtree, parents first.
	pub(crate) fn invoke_destroy_hook(&self, vnode: &VNode<A::Node>) {
		let data = match &vnode.data {
			Some(data) => data,
			None => return,
		};

		if let Some(destroy) = data.hook.as_ref().and_then(|hooks| hooks.destroy.as_ref()) {
			destroy(vnode)
		}
		for destroy in &self.cbs.destroy {
			destroy(vnode)
		}
		if let Some(children) = &vnode.children {
			for child in children {
				self.invoke_destroy_hook(child)
			}
		}
	}

	/// Removes the host nodes of `vnodes` from `parent`, running destroy and remove hooks for all but text descriptors.
	#[instrument(skip(vnodes))]
	pub(crate) fn remove_vnodes<'v>(&self, parent: &A::Node, vnodes: impl IntoIterator<Item = &'v VNode<A::Node>>) {
		for vnode in vnodes {
			let elm = vnode.host_node();
			if vnode.sel.is_none() {
				let span = trace_span!("Removing text node");
				let _enter = span.enter();
				self.api.remove_child(parent, elm);
				continue;
			}

			let span = trace_span!("Removing", sel = ?vnode.sel, key = ?vnode.key());
			let _enter = span.enter();

			self.invoke_destroy_hook(vnode);

			let listeners = self.cbs.remove.len() + 1;
			let removal = {
				let api = Rc::clone(&self.api);
				let parent = parent.clone();
				let child = elm.clone();
				Rc::new(Removal::new(listeners, elm.clone(), move || api.remove_child(&parent, &child)))
			};
			for remove in &self.cbs.remove {
				remove(vnode, Rc::clone(&removal))
			}
			match vnode.hooks().and_then(|hooks| hooks.remove.as_ref()) {
				Some(remove) => remove(vnode, removal),
				None => removal.acknowledge(),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Removal;
	use std::{cell::Cell, rc::Rc};

	#[test]
	fn commits_once_at_zero() {
		let commits = Rc::new(Cell::new(0));
		let removal = {
			let commits = Rc::clone(&commits);
			Removal::new(3, (), move || commits.set(commits.get() + 1))
		};

		removal.acknowledge();
		removal.acknowledge();
		assert_eq!(commits.get(), 0);
		assert_eq!(removal.remaining(), 1);

		removal.acknowledge();
		assert_eq!(commits.get(), 1);
		assert!(removal.is_committed());

		removal.acknowledge();
		assert_eq!(commits.get(), 1);
	}
}
