//! The descriptor tree the [`Patcher`](`crate::Patcher`) reconciles.

use crate::hooks::Hooks;
use core::fmt::{self, Display, Formatter};
use hashbrown::HashMap;
use wasm_bindgen::UnwrapThrowExt;

/// The selector of comment descriptors.
pub const COMMENT: &str = "!";

/// Identifies a descriptor among its siblings across patches.
///
/// Numeric keys compare by value, whatever integer type they were made from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
	Str(String),
	Num(i128),
}

impl Display for Key {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Key::Str(str) => f.write_str(str),
			Key::Num(num) => Display::fmt(num, f),
		}
	}
}

impl From<&str> for Key {
	fn from(str: &str) -> Self {
		Key::Str(str.to_owned())
	}
}

impl From<String> for Key {
	fn from(str: String) -> Self {
		Key::Str(str)
	}
}

macro_rules! numeric_key {
	($($number:ty),*$(,)?) => {$(
		impl From<$number> for Key {
			fn from(num: $number) -> Self {
				Key::Num(num.into())
			}
		}
	)*};
}
numeric_key!(i32, i64, u32, u64);

impl From<usize> for Key {
	fn from(num: usize) -> Self {
		// `usize` is at most 64 bits wide on every supported target.
		Key::Num(num as i128)
	}
}

/// Everything about a descriptor that isn't structure.
///
/// `attrs` is opaque to the patcher. It's filled by [`to_vnode`](`crate::load::to_vnode`) and meant for extension [`Module`](`crate::Module`)s.
#[derive(Debug, Clone)]
pub struct VNodeData<N> {
	pub key: Option<Key>,
	/// Namespace URI for elements created from this descriptor.
	pub ns: Option<String>,
	pub hook: Option<Hooks<N>>,
	pub attrs: HashMap<String, String>,
}

impl<N> Default for VNodeData<N> {
	fn default() -> Self {
		Self {
			key: None,
			ns: None,
			hook: None,
			attrs: HashMap::new(),
		}
	}
}

impl<N> VNodeData<N> {
	#[must_use]
	pub fn keyed(key: impl Into<Key>) -> Self {
		Self::default().with_key(key)
	}

	#[must_use]
	pub fn with_key(mut self, key: impl Into<Key>) -> Self {
		self.key = Some(key.into());
		self
	}

	#[must_use]
	pub fn with_ns(mut self, ns: impl Into<String>) -> Self {
		self.ns = Some(ns.into());
		self
	}

	#[must_use]
	pub fn with_hooks(mut self, hooks: Hooks<N>) -> Self {
		self.hook = Some(hooks);
		self
	}

	#[must_use]
	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}
}

/// A lightweight description of one host node.
///
/// `N` is the host node type of the [`DomApi`](`crate::DomApi`) in use.
/// `elm` stays [`None`] until the descriptor is realized by a patch.
#[derive(Debug, Clone)]
pub struct VNode<N> {
	pub sel: Option<String>,
	pub data: Option<VNodeData<N>>,
	pub children: Option<Vec<VNode<N>>>,
	pub text: Option<String>,
	pub elm: Option<N>,
}

impl<N> VNode<N> {
	#[must_use]
	pub fn key(&self) -> Option<&Key> {
		self.data.as_ref()?.key.as_ref()
	}

	#[must_use]
	pub fn hooks(&self) -> Option<&Hooks<N>> {
		self.data.as_ref()?.hook.as_ref()
	}

	#[must_use]
	pub fn is_comment(&self) -> bool {
		self.sel.as_deref() == Some(COMMENT)
	}

	/// The host node of a realized descriptor.
	///
	/// # Panics
	///
	/// Iff this descriptor was never realized. (Throws on wasm32.)
	#[must_use]
	pub fn host_node(&self) -> &N {
		self.elm.as_ref().expect_throw("vdom-patch: Descriptor has no host node. Was it passed through a patch before?")
	}
}

/// Whether `a` and `b` describe the same logical node, which is decided by key and selector only.
#[must_use]
pub fn same_vnode<N>(a: &VNode<N>, b: &VNode<N>) -> bool {
	a.key() == b.key() && a.sel == b.sel
}
