//! Domain layer: the vampire genealogy and its queries
//!
//! No I/O happens here; settings only parametrize queries.

pub mod arena;
pub mod entities;
pub mod error;
pub mod lineage;
pub mod render;
pub mod search;

pub use arena::{AncestorIterator, Genealogy, PostOrderIterator, SubtreeIterator};
pub use entities::{Vampire, VampireId};
pub use error::{GenealogyError, GenealogyResult};
pub use render::TreeRender;
