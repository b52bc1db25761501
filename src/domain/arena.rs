use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{Vampire, VampireId};
use crate::domain::error::{GenealogyError, GenealogyResult};

/// Arena-based genealogy of vampires.
///
/// Vampires live in a generational arena and refer to each other by
/// [`VampireId`]. The creator link is a plain handle, so ownership only
/// flows through the arena. A genealogy may hold several unrelated trees.
#[derive(Debug)]
pub struct Genealogy {
    /// Tag stamped on every handle issued by this genealogy
    id: u64,
    arena: Arena<Vampire>,
}

static NEXT_GENEALOGY_ID: AtomicU64 = AtomicU64::new(0);

impl Default for Genealogy {
    fn default() -> Self {
        Self::new()
    }
}

impl Genealogy {
    pub fn new() -> Self {
        Self {
            id: NEXT_GENEALOGY_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
        }
    }

    fn handle(&self, index: Index) -> VampireId {
        VampireId {
            genealogy: self.id,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: VampireId) -> bool {
        id.genealogy == self.id && self.arena.contains(id.index)
    }

    /// Adds a detached vampire: no creator, no offspring.
    #[instrument(level = "trace", skip(self, name))]
    pub fn add_vampire(&mut self, name: impl Into<String>, converted_year: i32) -> VampireId {
        let index = self.arena.insert(Vampire::new(name, converted_year));
        let id = self.handle(index);
        debug!(%id, "Added vampire");
        id
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, id: VampireId) -> Option<&Vampire> {
        if id.genealogy != self.id {
            return None;
        }
        self.arena.get(id.index)
    }

    /// Attaches `child` as the newest offspring of `creator`.
    ///
    /// Both edges change in this one call. A child that already has a creator
    /// is moved: it leaves the old creator's offspring. Attaching a vampire
    /// under itself or one of its descendants is rejected and leaves the
    /// genealogy unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn add_offspring(&mut self, creator: VampireId, child: VampireId) -> GenealogyResult<()> {
        for id in [creator, child] {
            if !self.contains(id) {
                return Err(GenealogyError::UnknownVampire(id));
            }
        }
        if self.is_ancestor_of(child, creator) {
            debug!(%creator, %child, "Rejecting offspring that would close a cycle");
            return Err(GenealogyError::CycleDetected { creator, child });
        }

        let previous = self.arena.get(child.index).and_then(|v| v.creator);
        if let Some(previous) = previous {
            if previous != creator {
                debug!(%child, from = %previous, to = %creator, "Moving offspring to new creator");
            }
            if let Some(old) = self.arena.get_mut(previous.index) {
                old.offspring.retain(|&id| id != child);
            }
        }

        if let Some(parent) = self.arena.get_mut(creator.index) {
            parent.offspring.push(child);
        }
        if let Some(node) = self.arena.get_mut(child.index) {
            node.creator = Some(creator);
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn creator(&self, id: VampireId) -> Option<VampireId> {
        self.get(id).and_then(|v| v.creator)
    }

    /// Direct offspring in insertion order; empty for an unknown handle.
    #[instrument(level = "trace", skip(self))]
    pub fn offspring(&self, id: VampireId) -> &[VampireId] {
        self.get(id).map(|v| v.offspring.as_slice()).unwrap_or(&[])
    }

    #[instrument(level = "trace", skip(self))]
    pub fn number_of_offspring(&self, id: VampireId) -> usize {
        self.offspring(id).len()
    }

    /// Vampires without creator, in creation order.
    #[instrument(level = "debug", skip(self))]
    pub fn roots(&self) -> Vec<VampireId> {
        self.arena
            .iter()
            .filter(|(_, v)| v.is_original())
            .map(|(idx, _)| self.handle(idx))
            .collect()
    }

    /// Pre-order walk of the subtree rooted at `id`, `id` first.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_subtree(&self, id: VampireId) -> SubtreeIterator<'_> {
        SubtreeIterator::new(self, id)
    }

    /// Post-order walk of the subtree rooted at `id`, `id` last.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self, id: VampireId) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, id)
    }

    /// Walk from `id` up the creator chain, `id` first, the original last.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_ancestors(&self, id: VampireId) -> AncestorIterator<'_> {
        AncestorIterator {
            genealogy: self,
            next: Some(id),
        }
    }
}

pub struct SubtreeIterator<'a> {
    genealogy: &'a Genealogy,
    stack: Vec<VampireId>,
}

impl<'a> SubtreeIterator<'a> {
    fn new(genealogy: &'a Genealogy, start: VampireId) -> Self {
        Self {
            genealogy,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for SubtreeIterator<'a> {
    type Item = (VampireId, &'a Vampire);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(vampire) = self.genealogy.get(current) {
                // Push offspring in reverse order for left-to-right traversal
                self.stack.extend(vampire.offspring.iter().rev().copied());
                return Some((current, vampire));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    genealogy: &'a Genealogy,
    stack: Vec<(VampireId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(genealogy: &'a Genealogy, start: VampireId) -> Self {
        Self {
            genealogy,
            stack: vec![(start, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (VampireId, &'a Vampire);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(vampire) = self.genealogy.get(current) {
                if visited {
                    return Some((current, vampire));
                }
                self.stack.push((current, true));
                for &child in vampire.offspring.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

pub struct AncestorIterator<'a> {
    genealogy: &'a Genealogy,
    next: Option<VampireId>,
}

impl<'a> Iterator for AncestorIterator<'a> {
    type Item = (VampireId, &'a Vampire);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let vampire = self.genealogy.get(current)?;
        self.next = vampire.creator;
        Some((current, vampire))
    }
}
