//! A hook-driven VDOM patcher.
//!
//! [`Patcher::patch`] makes a host tree reflect a [`VNode`] tree, reusing host nodes of descriptors that
//! are the [same node](`same_vnode`) by key and selector. All host access goes through a [`DomApi`],
//! and [`Module`]s observe every creation, update and removal through hooks.

#![doc(html_root_url = "https://docs.rs/vdom-patch/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod children;
mod create;
mod patch;

pub mod builder;
pub mod dom_api;
pub mod hooks;
pub mod load;
pub mod remove;
pub mod selector;
pub mod vnode;
pub mod web;

pub use builder::{comment, h, text, Content};
pub use dom_api::{DomApi, NodeKind};
pub use hooks::{Hooks, Module};
pub use patch::{init, PatchTarget, Patcher};
pub use remove::Removal;
pub use vnode::{same_vnode, Key, VNode, VNodeData};
