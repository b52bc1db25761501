//! Seniority and ancestry queries along creator chains.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::instrument;

use crate::domain::arena::Genealogy;
use crate::domain::entities::VampireId;

impl Genealogy {
    /// Number of creators between `id` and its original; 0 for an original
    /// or an unknown handle.
    #[instrument(level = "trace", skip(self))]
    pub fn number_of_vampires_from_original(&self, id: VampireId) -> usize {
        self.iter_ancestors(id).count().saturating_sub(1)
    }

    /// True if `id` is strictly closer to its original than `other`.
    ///
    /// Vampires of the same generation are not more senior than each other
    /// in either direction.
    #[instrument(level = "trace", skip(self))]
    pub fn is_more_senior_than(&self, id: VampireId, other: VampireId) -> bool {
        self.contains(id)
            && self.contains(other)
            && self.number_of_vampires_from_original(id)
                < self.number_of_vampires_from_original(other)
    }

    /// `id` followed by each creator up to and including the original.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, id: VampireId) -> Vec<VampireId> {
        self.iter_ancestors(id).map(|(ancestor, _)| ancestor).collect()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn original_of(&self, id: VampireId) -> Option<VampireId> {
        self.iter_ancestors(id).last().map(|(original, _)| original)
    }

    /// True if `ancestor` is on `id`'s creator chain; a vampire counts as its
    /// own ancestor.
    #[instrument(level = "trace", skip(self))]
    pub fn is_ancestor_of(&self, ancestor: VampireId, id: VampireId) -> bool {
        self.iter_ancestors(id).any(|(candidate, _)| candidate == ancestor)
    }

    /// Deepest vampire present in both creator chains.
    ///
    /// Scans `id`'s chain nearest first and returns the first handle that is
    /// also in `other`'s chain. When one is an ancestor of the other, that
    /// ancestor is returned. Vampires from unrelated trees have none.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(&self, id: VampireId, other: VampireId) -> Option<VampireId> {
        let theirs: HashSet<VampireId> = self
            .iter_ancestors(other)
            .map(|(ancestor, _)| ancestor)
            .collect();
        self.iter_ancestors(id)
            .map(|(ancestor, _)| ancestor)
            .find(|ancestor| theirs.contains(ancestor))
    }

    /// Names along the creator chain, e.g. `Sarah <- Andrew <- Ansel`.
    #[instrument(level = "trace", skip(self))]
    pub fn lineage_string(&self, id: VampireId) -> String {
        self.iter_ancestors(id)
            .map(|(_, vampire)| vampire.name.as_str())
            .join(" <- ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_twins_with_same_name_when_comparing_ancestry_then_uses_identity() {
        let mut g = Genealogy::new();
        let left_root = g.add_vampire("Twin", 1700);
        let right_root = g.add_vampire("Twin", 1700);
        let left = g.add_vampire("Child", 1800);
        let right = g.add_vampire("Child", 1800);
        g.add_offspring(left_root, left).unwrap();
        g.add_offspring(right_root, right).unwrap();

        assert_eq!(g.closest_common_ancestor(left, right), None);
        assert!(!g.is_ancestor_of(left_root, right));
    }

    #[test]
    fn given_unknown_handle_when_querying_lineage_then_returns_empty() {
        let mut g = Genealogy::new();
        let known = g.add_vampire("known", 1900);
        let mut other = Genealogy::new();
        let unknown = other.add_vampire("unknown", 1900);
        assert_eq!(unknown.index, known.index);

        assert!(g.ancestors(unknown).is_empty());
        assert_eq!(g.original_of(unknown), None);
        assert_eq!(g.number_of_vampires_from_original(unknown), 0);
        assert!(!g.is_more_senior_than(unknown, known));
        assert!(!g.is_more_senior_than(known, unknown));
        assert_eq!(g.lineage_string(unknown), "");
        assert_eq!(g.closest_common_ancestor(unknown, known), None);
        assert_eq!(g.closest_common_ancestor(known, unknown), None);
        assert!(!g.is_ancestor_of(known, unknown));
    }
}
