//! Subtree searches, counts and era filters.

use tracing::instrument;

use crate::config::Settings;
use crate::domain::arena::Genealogy;
use crate::domain::entities::VampireId;

impl Genealogy {
    /// First vampire named `name` in a pre-order walk from `from`.
    ///
    /// `from` is checked first, then its offspring in insertion order.
    /// Names are not unique, so the result is the pre-order-first match.
    #[instrument(level = "debug", skip(self))]
    pub fn vampire_with_name(&self, from: VampireId, name: &str) -> Option<VampireId> {
        self.iter_subtree(from)
            .find(|(_, vampire)| vampire.name == name)
            .map(|(id, _)| id)
    }

    /// Size of the subtree below `id`, not counting `id` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn total_descendants(&self, id: VampireId) -> usize {
        self.iter_subtree(id).count().saturating_sub(1)
    }

    /// Vampires in the subtree of `from` (itself included) turned strictly
    /// after `year`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn converted_after(&self, from: VampireId, year: i32) -> Vec<VampireId> {
        self.iter_subtree(from)
            .filter(|(_, vampire)| vampire.converted_year > year)
            .map(|(id, _)| id)
            .collect()
    }

    /// [`converted_after`](Self::converted_after) using the configured
    /// millennial threshold.
    #[instrument(level = "debug", skip(self, settings))]
    pub fn all_millennial_vampires(&self, from: VampireId, settings: &Settings) -> Vec<VampireId> {
        self.converted_after(from, settings.millennial_threshold)
    }

    /// Vampires without offspring in the subtree of `from`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_vampires(&self, from: VampireId) -> Vec<VampireId> {
        self.iter_subtree(from)
            .filter(|(_, vampire)| vampire.offspring.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of generations in the subtree of `id`: 1 for a vampire without
    /// offspring, 0 for an unknown handle.
    #[instrument(level = "debug", skip(self))]
    pub fn generations(&self, id: VampireId) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(id, 1)];

        while let Some((current, depth)) = stack.pop() {
            if let Some(vampire) = self.get(current) {
                max_depth = max_depth.max(depth);
                stack.extend(vampire.offspring.iter().map(|&child| (child, depth + 1)));
            }
        }

        max_depth
    }
}
