use crate::{
	dom_api::DomApi,
	patch::{InsertedVNodeQueue, Patcher},
	vnode::{same_vnode, Key, VNode},
};
use hashbrown::HashMap;
use tracing::{instrument, trace};

/// Maps the keys of `slots[start..end]` to their index. A duplicated key maps to its last occurrence.
fn create_key_to_old_idx<'a, N>(slots: &[Option<&'a VNode<N>>], start: usize, end: usize) -> HashMap<&'a Key, usize> {
	slots[start..end]
		.iter()
		.enumerate()
		.filter_map(|(i, slot)| Some(((*slot)?.key()?, start + i)))
		.collect()
}

impl<A: DomApi> Patcher<A> {
	/// Reconciles the children of `parent_elm` from `old_ch` to `new_ch`.
	///
	/// Both sides are walked inward from their ends at once. Matching ends are patched in place
	/// and crosswise matches are patched and moved. Whatever remains is looked up by key
	/// in the rest of `old_ch`, or created. There is no search for a minimal edit script.
	#[allow(clippy::too_many_lines)]
	#[instrument(skip(old_ch, new_ch, inserted_vnode_queue, path), fields(old_len = old_ch.len(), new_len = new_ch.len()))]
	pub(crate) fn update_children(
		&self,
		parent_elm: &A::Node,
		old_ch: &[VNode<A::Node>],
		new_ch: &mut [VNode<A::Node>],
		inserted_vnode_queue: &mut InsertedVNodeQueue,
		path: &mut Vec<usize>,
	) {
		// `None` marks descriptors that were moved out of order already.
		let mut old_slots: Vec<Option<&VNode<A::Node>>> = old_ch.iter().map(Some).collect();
		let (mut old_start, mut old_end) = (0, old_slots.len());
		let (mut new_start, mut new_end) = (0, new_ch.len());
		let mut old_key_to_idx = None;

		while old_start < old_end && new_start < new_end {
			let old_start_vnode = match old_slots[old_start] {
				Some(vnode) => vnode,
				None => {
					old_start += 1;
					continue;
				}
			};
			let old_end_vnode = match old_slots[old_end - 1] {
				Some(vnode) => vnode,
				None => {
					old_end -= 1;
					continue;
				}
			};

			if same_vnode(old_start_vnode, &new_ch[new_start]) {
				trace!(old = old_start, new = new_start, "Start matches start.");
				self.patch_child(old_start_vnode, new_ch, new_start, inserted_vnode_queue, path);
				old_start += 1;
				new_start += 1;
			} else if same_vnode(old_end_vnode, &new_ch[new_end - 1]) {
				trace!(old = old_end - 1, new = new_end - 1, "End matches end.");
				self.patch_child(old_end_vnode, new_ch, new_end - 1, inserted_vnode_queue, path);
				old_end -= 1;
				new_end -= 1;
			} else if same_vnode(old_start_vnode, &new_ch[new_end - 1]) {
				trace!(old = old_start, new = new_end - 1, "Start moved right.");
				self.patch_child(old_start_vnode, new_ch, new_end - 1, inserted_vnode_queue, path);
				let reference = self.api.next_sibling(old_end_vnode.host_node());
				self.api.insert_before(parent_elm, new_ch[new_end - 1].host_node(), reference.as_ref());
				old_start += 1;
				new_end -= 1;
			} else if same_vnode(old_end_vnode, &new_ch[new_start]) {
				trace!(old = old_end - 1, new = new_start, "End moved left.");
				self.patch_child(old_end_vnode, new_ch, new_start, inserted_vnode_queue, path);
				self.api.insert_before(parent_elm, new_ch[new_start].host_node(), Some(old_start_vnode.host_node()));
				old_end -= 1;
				new_start += 1;
			} else {
				let old_key_to_idx = old_key_to_idx.get_or_insert_with(|| create_key_to_old_idx(&old_slots, old_start, old_end));
				let elm_to_move = new_ch[new_start]
					.key()
					.and_then(|key| old_key_to_idx.get(key).copied())
					.and_then(|idx_in_old| old_slots[idx_in_old].map(|vnode| (idx_in_old, vnode)));

				match elm_to_move {
					Some((idx_in_old, elm_to_move)) if elm_to_move.sel == new_ch[new_start].sel => {
						trace!(old = idx_in_old, new = new_start, "Found by key. Moving left.");
						self.patch_child(elm_to_move, new_ch, new_start, inserted_vnode_queue, path);
						old_slots[idx_in_old] = None;
						self.api.insert_before(parent_elm, new_ch[new_start].host_node(), Some(old_start_vnode.host_node()));
					}
					elm_to_move => {
						if elm_to_move.is_some() {
							trace!(new = new_start, "Key found with different selector. Creating anew.");
						} else {
							trace!(new = new_start, "Not found by key. Creating.");
						}
						path.push(new_start);
						let elm = self.create_elm(&mut new_ch[new_start], inserted_vnode_queue, path);
						path.pop();
						self.api.insert_before(parent_elm, &elm, Some(old_start_vnode.host_node()));
					}
				}
				new_start += 1;
			}
		}

		if old_start >= old_end {
			let before = new_ch.get(new_end).and_then(|vnode| vnode.elm.clone());
			self.add_vnodes(parent_elm, before.as_ref(), new_ch, new_start, new_end, inserted_vnode_queue, path);
		} else {
			self.remove_vnodes(parent_elm, old_slots[old_start..old_end].iter().flatten().copied());
		}
	}

	fn patch_child(&self, old_vnode: &VNode<A::Node>, new_ch: &mut [VNode<A::Node>], index: usize, inserted_vnode_queue: &mut InsertedVNodeQueue, path: &mut Vec<usize>) {
		path.push(index);
		self.patch_vnode(old_vnode, &mut new_ch[index], inserted_vnode_queue, path);
		path.pop();
	}
}
