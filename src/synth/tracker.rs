use std::collections::HashSet;

use crate::synth::identity::ElementKind;

// ============================================================================
// Dedup tracker — per-run emitted-identifier state
// ============================================================================

/// Tracks which element identifiers have already produced a test-case
/// record, partitioned by kind.
///
/// One tracker belongs to exactly one synthesis run: construct (or
/// `reset`) one per page or site before synthesizing, and never share an
/// un-reset tracker across independent runs. There is no global
/// instance; concurrent analyses each own their own tracker.
#[derive(Debug, Default)]
pub struct DedupTracker {
    forms: HashSet<String>,
    navigation: HashSet<String>,
    buttons: HashSet<String>,
    links: HashSet<String>,
    cards: HashSet<String>,
}

impl DedupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all emitted state. Call at the start of every independent run.
    pub fn reset(&mut self) {
        self.forms.clear();
        self.navigation.clear();
        self.buttons.clear();
        self.links.clear();
        self.cards.clear();
    }

    pub fn is_emitted(&self, kind: ElementKind, id: &str) -> bool {
        self.set(kind).contains(id)
    }

    pub fn mark_emitted(&mut self, kind: ElementKind, id: impl Into<String>) {
        self.set_mut(kind).insert(id.into());
    }

    fn set(&self, kind: ElementKind) -> &HashSet<String> {
        match kind {
            ElementKind::Form => &self.forms,
            ElementKind::Navigation => &self.navigation,
            ElementKind::Button => &self.buttons,
            ElementKind::Link => &self.links,
            ElementKind::Card => &self.cards,
        }
    }

    fn set_mut(&mut self, kind: ElementKind) -> &mut HashSet<String> {
        match kind {
            ElementKind::Form => &mut self.forms,
            ElementKind::Navigation => &mut self.navigation,
            ElementKind::Button => &mut self.buttons,
            ElementKind::Link => &mut self.links,
            ElementKind::Card => &mut self.cards,
        }
    }
}
