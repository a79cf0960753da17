//! The editing session: document + selection + id counter + history.
//!
//! Everything the canvas, properties panel, and keyboard collaborators do
//! funnels through one `EditorSession`, so the core stays testable without
//! any DOM globals. Each user-initiated mutation (insert, delete,
//! duplicate, field edit, clear) records exactly one history snapshot
//! after it lands; undo/redo restore snapshots without recording, keeping
//! engine-driven states out of the stack.

use crate::history::{History, Snapshot};
use pd_core::{Component, ComponentId, ComponentType, CoreError, Document, IdAllocator, PropValue};

pub struct EditorSession {
    document: Document,
    selected: Option<ComponentId>,
    ids: IdAllocator,
    history: History,
}

impl EditorSession {
    /// A fresh empty session. The empty state becomes the history baseline
    /// so the first real action can be undone back to it.
    pub fn new() -> Self {
        Self::with_history_limit(History::DEFAULT_MAX_SIZE)
    }

    pub fn with_history_limit(max_size: usize) -> Self {
        let mut session = Self {
            document: Document::new(),
            selected: None,
            ids: IdAllocator::new(),
            history: History::new(max_size),
        };
        session.commit();
        session
    }

    /// A session over a previously saved root sequence (startup path). The
    /// id counter moves past every loaded id and the loaded state becomes
    /// the history baseline.
    pub fn with_document(roots: Vec<Component>) -> Self {
        let mut session = Self {
            document: Document::from_roots(roots),
            selected: None,
            ids: IdAllocator::new(),
            history: History::default(),
        };
        if let Some(max) = session.document.max_id() {
            session.ids.bump_past(max);
        }
        session.commit();
        session
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the canvas (and properties panel) should show their empty
    /// placeholders.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn selected(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn selected_component(&self) -> Option<&Component> {
        self.selected.and_then(|id| self.document.find(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Serialized root sequence for the persistence collaborator.
    pub fn save_payload(&self) -> String {
        pd_core::serialize::document_payload(self.document.roots())
    }

    /// Standalone export page for the export collaborator.
    pub fn export_page(&self) -> String {
        pd_core::export_document(self.document.roots())
    }

    // ─── Mutations (each records one snapshot) ───────────────────────────

    /// Create a component at the end of the root sequence and select it.
    pub fn insert_root(&mut self, ty: ComponentType) -> ComponentId {
        let id = self.ids.allocate();
        self.document.push_root(Component::new(id, ty));
        self.selected = Some(id);
        self.commit();
        id
    }

    /// Create a component inside a container. The container, not the new
    /// child, ends up selected, matching the drop interaction. Fails
    /// without touching the tree when the id is not a live container.
    pub fn insert_child(
        &mut self,
        container_id: ComponentId,
        ty: ComponentType,
    ) -> Result<ComponentId, CoreError> {
        let Some(children) = self.document.container_children_mut(container_id) else {
            return Err(CoreError::ContainerNotFound { id: container_id });
        };
        let id = self.ids.allocate();
        children.push(Component::new(id, ty));
        self.selected = Some(container_id);
        self.commit();
        Ok(id)
    }

    /// Remove a component from wherever it lives. Silent no-op (and no
    /// history entry) when the id is stale. Selection clears if it pointed
    /// into the removed subtree.
    pub fn remove_component(&mut self, id: ComponentId) {
        let Some(removed) = self.document.remove(id) else {
            return;
        };
        if let Some(sel) = self.selected
            && removed.contains(sel)
        {
            self.selected = None;
        }
        self.commit();
    }

    /// Remove a specific child from a specific container; no-op if either
    /// id is absent.
    pub fn remove_child(&mut self, container_id: ComponentId, child_id: ComponentId) {
        if self.document.remove_child(container_id, child_id).is_none() {
            return;
        }
        if self.selected == Some(child_id) {
            self.selected = None;
        }
        self.commit();
    }

    /// Apply a properties-panel edit in place. Stale ids and rejected
    /// values are no-ops and record nothing.
    pub fn update_field(&mut self, id: ComponentId, name: &str, value: PropValue) {
        let Some(component) = self.document.find_mut(id) else {
            return;
        };
        if component.set_field(name, value) {
            self.commit();
        }
    }

    /// Set or clear the selection. A stale id leaves the selection alone;
    /// selection changes are not history-recorded.
    pub fn select(&mut self, id: Option<ComponentId>) {
        match id {
            Some(id) if self.document.contains(id) => self.selected = Some(id),
            Some(stale) => log::debug!("ignoring selection of stale id {stale}"),
            None => self.selected = None,
        }
    }

    /// Deep-copy the selected root component. Children receive fresh ids
    /// first, then the copy itself; the copy lands immediately after the
    /// original and becomes selected.
    pub fn duplicate_selected(&mut self) -> Option<ComponentId> {
        let selected = self.selected?;
        let pos = self.document.root_position(selected)?;
        let mut copy = self.document.roots()[pos].clone();

        if let Some(children) = copy.children_mut() {
            for child in children {
                child.id = self.ids.allocate();
            }
        }
        copy.id = self.ids.allocate();

        let id = copy.id;
        self.document.insert_root_at(pos + 1, copy);
        self.selected = Some(id);
        self.commit();
        Some(id)
    }

    /// Wrap-around selection of the next root component.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Wrap-around selection of the previous root component.
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, direction: isize) {
        let len = self.document.len();
        if len == 0 {
            return;
        }
        let current = self
            .selected
            .and_then(|id| self.document.root_position(id));
        let next = match (current, direction) {
            (Some(i), 1) => (i + 1) % len,
            (Some(i), _) if i > 0 => i - 1,
            (Some(_), _) => len - 1,
            (None, 1) => 0,
            (None, _) => len - 1,
        };
        self.selected = Some(self.document.roots()[next].id);
    }

    /// Empty the document and start the history over with the cleared
    /// state as baseline. The id counter resets; nothing in the history
    /// can reintroduce old ids afterwards.
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.selected = None;
        self.ids = IdAllocator::new();
        self.history.clear();
        self.commit();
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Step back one recorded state. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Step forward one recorded state. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// The current state as an owned snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            roots: self.document.roots().to_vec(),
            selected: self.selected,
        }
    }

    fn commit(&mut self) {
        self.history.record(self.snapshot());
    }

    /// Replace the live tree wholesale from a snapshot. Selection survives
    /// only if its id still resolves; the id counter moves past everything
    /// restored so later insertions cannot collide.
    fn restore(&mut self, snapshot: Snapshot) {
        self.document = Document::from_roots(snapshot.roots);
        self.selected = snapshot.selected.filter(|id| self.document.contains(*id));
        if let Some(max) = self.document.max_id() {
            self.ids.bump_past(max);
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
