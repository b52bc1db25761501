//! Vampire genealogy: an arena-backed tree of vampires linked creator to
//! offspring, with seniority, ancestry and subtree queries.
//!
//! ```
//! use vampire_genealogy::Genealogy;
//!
//! let mut g = Genealogy::new();
//! let ansel = g.add_vampire("Ansel", 1800);
//! let sarah = g.add_vampire("Sarah", 2005);
//! g.add_offspring(ansel, sarah).unwrap();
//!
//! assert_eq!(g.closest_common_ancestor(ansel, sarah), Some(ansel));
//! assert_eq!(g.converted_after(ansel, 1980), vec![sarah]);
//! ```

pub mod config;
pub mod domain;
pub mod util;

pub use crate::config::Settings;
pub use domain::{Genealogy, GenealogyError, GenealogyResult, TreeRender, Vampire, VampireId};
