#![doc(html_root_url = "https://docs.rs/remount/0.1.0")]
#![warn(clippy::pedantic)]

//! Normalizes JSX-style element descriptors into virtual node trees and mounts them into a live document.
//! Re-rendering replaces the previous tree wholesale; there is intentionally no diffing.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod diff;
pub mod dom;
pub mod element;
pub mod props;
pub mod tree;
pub mod vnode;

#[cfg(target_arch = "wasm32")]
pub mod web;
