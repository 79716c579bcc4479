//! Umbrella crate that re-exports the `dtree-*` building blocks.
//!
//! This crate is a convenient entrypoint: enable the features you need and reach everything
//! through one path.
//!
//! ```ignore
//! use std::sync::Arc;
//! use dtree::core::Binding;
//! use dtree::duel::{build_duel_tree, duel_registries, DuelConfig};
//!
//! let config = DuelConfig::default();
//! let registries = duel_registries::<MyArena>(&config);
//! let tree = build_duel_tree(Arc::clone(&registries), Binding::new(1, 2), &config)?;
//! // once per frame:
//! let _ = tree.tick(&ctx, &mut arena);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use dtree_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use dtree_tools as tools;

#[cfg(feature = "tree")]
#[cfg_attr(docsrs, doc(cfg(feature = "tree")))]
pub use dtree_tree as tree;

#[cfg(feature = "duel")]
#[cfg_attr(docsrs, doc(cfg(feature = "duel")))]
pub use dtree_duel as duel;
