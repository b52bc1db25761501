//! Domain entities: vampires and their handles

use std::fmt;

use generational_arena::Index;

/// Handle to a vampire stored in a [`Genealogy`](crate::domain::Genealogy).
///
/// Equality is identity: two vampires with the same name and year are
/// still distinct handles. A handle is tagged with the genealogy that issued
/// it and is unknown to every other genealogy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VampireId {
    pub(crate) genealogy: u64,
    pub(crate) index: Index,
}

impl fmt::Display for VampireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "#{}:{}.{}", self.genealogy, slot, generation)
    }
}

/// Node payload and edges of one vampire in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    /// Name, not unique across a genealogy
    pub name: String,
    /// Year the vampire was turned
    pub converted_year: i32,
    /// Vampire that turned this one, None for an original
    pub(crate) creator: Option<VampireId>,
    /// Vampires turned by this one, in the order they were added
    pub(crate) offspring: Vec<VampireId>,
}

impl Vampire {
    pub(crate) fn new(name: impl Into<String>, converted_year: i32) -> Self {
        Self {
            name: name.into(),
            converted_year,
            creator: None,
            offspring: Vec::new(),
        }
    }

    pub fn creator(&self) -> Option<VampireId> {
        self.creator
    }

    pub fn offspring(&self) -> &[VampireId] {
        &self.offspring
    }

    pub fn is_original(&self) -> bool {
        self.creator.is_none()
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.converted_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_vampire_when_created_then_is_detached_original() {
        let vampire = Vampire::new("Ansel", 1800);
        assert!(vampire.is_original());
        assert!(vampire.offspring().is_empty());
        assert_eq!(vampire.to_string(), "Ansel (1800)");
    }
}
