//! Extension points.
//!
//! There are two sources of hooks:
//!
//! - [`Module`]s are registered once through [`init`](`crate::init`) and see every descriptor.
//! - [`Hooks`] are declared on an individual descriptor's [`VNodeData`](`crate::VNodeData`).
//!
//! Module hooks of one kind run in registration order, before or after the per-node hook as documented on each field.

use crate::{remove::Removal, vnode::VNode};
use core::fmt::{self, Debug, Formatter};
use std::rc::Rc;

pub type PreHook = Rc<dyn Fn()>;
pub type PostHook = Rc<dyn Fn()>;
pub type InitHook<N> = Rc<dyn Fn(&mut VNode<N>)>;
/// Called with an empty placeholder and the new descriptor.
pub type CreateHook<N> = Rc<dyn Fn(&VNode<N>, &VNode<N>)>;
pub type InsertHook<N> = Rc<dyn Fn(&VNode<N>)>;
pub type PrePatchHook<N> = Rc<dyn Fn(&VNode<N>, &mut VNode<N>)>;
pub type UpdateHook<N> = Rc<dyn Fn(&VNode<N>, &VNode<N>)>;
pub type PostPatchHook<N> = Rc<dyn Fn(&VNode<N>, &VNode<N>)>;
/// Must eventually call [`Removal::acknowledge`] on the handle it receives.
pub type RemoveHook<N> = Rc<dyn Fn(&VNode<N>, Rc<Removal<N>>)>;
pub type DestroyHook<N> = Rc<dyn Fn(&VNode<N>)>;

/// Hooks declared on a single descriptor.
pub struct Hooks<N> {
	/// Runs before anything else when the descriptor is created. May rewrite the descriptor.
	pub init: Option<InitHook<N>>,
	/// Runs after the module `create` hooks and after all children were created and attached.
	pub create: Option<CreateHook<N>>,
	/// Runs once the whole patch has placed this descriptor's host node, in creation order.
	pub insert: Option<InsertHook<N>>,
	pub prepatch: Option<PrePatchHook<N>>,
	/// Runs after the module `update` hooks.
	pub update: Option<UpdateHook<N>>,
	pub postpatch: Option<PostPatchHook<N>>,
	/// Replaces the default acknowledgement of the removal.
	pub remove: Option<RemoveHook<N>>,
	/// Runs before the module `destroy` hooks and before the children's.
	pub destroy: Option<DestroyHook<N>>,
}

impl<N> Default for Hooks<N> {
	fn default() -> Self {
		Self {
			init: None,
			create: None,
			insert: None,
			prepatch: None,
			update: None,
			postpatch: None,
			remove: None,
			destroy: None,
		}
	}
}

impl<N> Clone for Hooks<N> {
	fn clone(&self) -> Self {
		Self {
			init: self.init.clone(),
			create: self.create.clone(),
			insert: self.insert.clone(),
			prepatch: self.prepatch.clone(),
			update: self.update.clone(),
			postpatch: self.postpatch.clone(),
			remove: self.remove.clone(),
			destroy: self.destroy.clone(),
		}
	}
}

impl<N> Debug for Hooks<N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let declared = [
			("init", self.init.is_some()),
			("create", self.create.is_some()),
			("insert", self.insert.is_some()),
			("prepatch", self.prepatch.is_some()),
			("update", self.update.is_some()),
			("postpatch", self.postpatch.is_some()),
			("remove", self.remove.is_some()),
			("destroy", self.destroy.is_some()),
		];
		f.debug_set()
			.entries(declared.iter().filter(|(_, declared)| *declared).map(|(name, _)| name))
			.finish()
	}
}

impl<N> Hooks<N> {
	#[must_use]
	pub fn on_init(mut self, hook: impl Fn(&mut VNode<N>) + 'static) -> Self {
		self.init = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_create(mut self, hook: impl Fn(&VNode<N>, &VNode<N>) + 'static) -> Self {
		self.create = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_insert(mut self, hook: impl Fn(&VNode<N>) + 'static) -> Self {
		self.insert = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_prepatch(mut self, hook: impl Fn(&VNode<N>, &mut VNode<N>) + 'static) -> Self {
		self.prepatch = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_update(mut self, hook: impl Fn(&VNode<N>, &VNode<N>) + 'static) -> Self {
		self.update = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_postpatch(mut self, hook: impl Fn(&VNode<N>, &VNode<N>) + 'static) -> Self {
		self.postpatch = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_remove(mut self, hook: impl Fn(&VNode<N>, Rc<Removal<N>>) + 'static) -> Self {
		self.remove = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_destroy(mut self, hook: impl Fn(&VNode<N>) + 'static) -> Self {
		self.destroy = Some(Rc::new(hook));
		self
	}
}

/// A set of hooks that applies to every descriptor a [`Patcher`](`crate::Patcher`) touches.
///
/// Attribute, class, style and event listener appliers are typically written as modules.
pub struct Module<N> {
	/// Runs at the start of each patch.
	pub pre: Option<PreHook>,
	/// Runs at the end of each patch, after all `insert` hooks.
	pub post: Option<PostHook>,
	/// Runs for each created element, before its children are created.
	pub create: Option<CreateHook<N>>,
	/// Runs for each patched descriptor that has data.
	pub update: Option<UpdateHook<N>>,
	/// Delays physical removal until acknowledged.
	pub remove: Option<RemoveHook<N>>,
	pub destroy: Option<DestroyHook<N>>,
}

impl<N> Default for Module<N> {
	fn default() -> Self {
		Self {
			pre: None,
			post: None,
			create: None,
			update: None,
			remove: None,
			destroy: None,
		}
	}
}

impl<N> Debug for Module<N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Module")
			.field("pre", &self.pre.is_some())
			.field("post", &self.post.is_some())
			.field("create", &self.create.is_some())
			.field("update", &self.update.is_some())
			.field("remove", &self.remove.is_some())
			.field("destroy", &self.destroy.is_some())
			.finish()
	}
}

impl<N> Module<N> {
	#[must_use]
	pub fn on_pre(mut self, hook: impl Fn() + 'static) -> Self {
		self.pre = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_post(mut self, hook: impl Fn() + 'static) -> Self {
		self.post = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_create(mut self, hook: impl Fn(&VNode<N>, &VNode<N>) + 'static) -> Self {
		self.create = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_update(mut self, hook: impl Fn(&VNode<N>, &VNode<N>) + 'static) -> Self {
		self.update = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_remove(mut self, hook: impl Fn(&VNode<N>, Rc<Removal<N>>) + 'static) -> Self {
		self.remove = Some(Rc::new(hook));
		self
	}

	#[must_use]
	pub fn on_destroy(mut self, hook: impl Fn(&VNode<N>) + 'static) -> Self {
		self.destroy = Some(Rc::new(hook));
		self
	}
}

/// Module hooks collected per kind, in registration order.
pub(crate) struct ModuleHooks<N> {
	pub pre: Vec<PreHook>,
	pub post: Vec<PostHook>,
	pub create: Vec<CreateHook<N>>,
	pub update: Vec<UpdateHook<N>>,
	pub remove: Vec<RemoveHook<N>>,
	pub destroy: Vec<DestroyHook<N>>,
}

impl<N> ModuleHooks<N> {
	pub fn new(modules: &[Module<N>]) -> Self {
		fn collect<H: Clone, N>(modules: &[Module<N>], hook: impl Fn(&Module<N>) -> &Option<H>) -> Vec<H> {
			modules.iter().filter_map(|module| hook(module).clone()).collect()
		}

		Self {
			pre: collect(modules, |module| &module.pre),
			post: collect(modules, |module| &module.post),
			create: collect(modules, |module| &module.create),
			update: collect(modules, |module| &module.update),
			remove: collect(modules, |module| &module.remove),
			destroy: collect(modules, |module| &module.destroy),
		}
	}
}

impl<N> Debug for ModuleHooks<N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ModuleHooks")
			.field("pre", &self.pre.len())
			.field("post", &self.post.len())
			.field("create", &self.create.len())
			.field("update", &self.update.len())
			.field("remove", &self.remove.len())
			.field("destroy", &self.destroy.len())
			.finish()
	}
}
