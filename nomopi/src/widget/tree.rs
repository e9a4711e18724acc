//! WidgetTree - arena of widget nodes.
//!
//! The tree owns every widget. Containers refer to their children by
//! [`WidgetId`], children know their parent, and nothing holds a reference
//! into the arena across calls. Removing a widget drops its whole subtree.
//! Slots are never reused, so a stale id reports `UnknownWidget` instead of
//! silently addressing a different widget.

use crate::error::{LayoutError, Result};
use crate::layout::SizePolicy;
use crate::primitives::Rect;
use crate::settings::Settings;

use super::{CheckBox, Container, EditLine, Label, WidgetId, WidgetKind};

/// A widget plus its place in the tree.
#[derive(Debug, Clone)]
pub struct WidgetNode {
    parent: Option<WidgetId>,
    /// Rectangle assigned by the last layout pass.
    pub(crate) bounds: Rect,
    pub(crate) kind: WidgetKind,
}

impl WidgetNode {
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn policy(&self) -> SizePolicy {
        self.kind.as_widget().policy()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Child ids in order; empty for leaf widgets.
    pub fn children(&self) -> &[WidgetId] {
        match &self.kind {
            WidgetKind::Container(c) => c.children(),
            _ => &[],
        }
    }
}

impl WidgetKind {
    /// Reject configurations that cannot be laid out.
    pub fn validate(&self, settings: &Settings) -> Result<()> {
        match self {
            WidgetKind::Container(c) => c.validate(),
            WidgetKind::Label(l) => l.validate(settings),
            WidgetKind::EditLine(e) => e.validate(settings),
            WidgetKind::CheckBox(c) => c.validate(),
        }
    }
}

/// Arena of widget nodes.
#[derive(Debug, Clone, Default)]
pub struct WidgetTree {
    nodes: Vec<Option<WidgetNode>>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a widget and store it, unattached.
    pub fn insert(&mut self, widget: impl Into<WidgetKind>, settings: &Settings) -> Result<WidgetId> {
        let kind = widget.into();
        kind.validate(settings)?;

        if let WidgetKind::Container(c) = &kind {
            // Children are attached through add_child only
            if !c.children.is_empty() {
                return Err(LayoutError::AlreadyParented(c.children[0]));
            }
        }

        let id = WidgetId::from_index(self.nodes.len());
        tracing::debug!("Inserted {} {}", kind.name(), id);
        self.nodes.push(Some(WidgetNode {
            parent: None,
            bounds: Rect::ZERO,
            kind,
        }));
        Ok(id)
    }

    /// Append `child` to the container `parent`.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        let child_node = self.node(child)?;
        if child_node.parent.is_some() {
            return Err(LayoutError::AlreadyParented(child));
        }
        if !matches!(self.node(parent)?.kind, WidgetKind::Container(_)) {
            return Err(LayoutError::NotAContainer(parent));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::CycleDetected(child));
        }

        if let Some(WidgetKind::Container(container)) =
            self.get_mut(parent).map(|node| &mut node.kind)
        {
            container.children.push(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        Ok(())
    }

    /// Remove a widget and its whole subtree, detaching it from its parent.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        let parent = self.node(id)?.parent;

        if let Some(parent) = parent
            && let Some(WidgetKind::Container(container)) =
                self.get_mut(parent).map(|node| &mut node.kind)
        {
            container.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next.index()).and_then(Option::take) {
                stack.extend_from_slice(node.children());
            }
        }
        Ok(())
    }

    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Like `get`, but an unknown id is an error.
    pub fn node(&self, id: WidgetId) -> Result<&WidgetNode> {
        self.get(id).ok_or(LayoutError::UnknownWidget(id))
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rectangle assigned by the last layout pass.
    pub fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.get(id).map(WidgetNode::bounds)
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        match self.get(id) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    pub fn container(&self, id: WidgetId) -> Result<&Container> {
        match &self.node(id)?.kind {
            WidgetKind::Container(c) => Ok(c),
            _ => Err(LayoutError::NotAContainer(id)),
        }
    }

    pub fn container_mut(&mut self, id: WidgetId) -> Result<&mut Container> {
        match self.get_mut(id).map(|node| &mut node.kind) {
            Some(WidgetKind::Container(c)) => Ok(c),
            Some(_) => Err(LayoutError::NotAContainer(id)),
            None => Err(LayoutError::UnknownWidget(id)),
        }
    }

    pub fn label(&self, id: WidgetId) -> Option<&Label> {
        match self.get(id).map(|node| &node.kind) {
            Some(WidgetKind::Label(l)) => Some(l),
            _ => None,
        }
    }

    pub fn label_mut(&mut self, id: WidgetId) -> Option<&mut Label> {
        match self.get_mut(id).map(|node| &mut node.kind) {
            Some(WidgetKind::Label(l)) => Some(l),
            _ => None,
        }
    }

    pub fn edit_line(&self, id: WidgetId) -> Option<&EditLine> {
        match self.get(id).map(|node| &node.kind) {
            Some(WidgetKind::EditLine(e)) => Some(e),
            _ => None,
        }
    }

    pub fn edit_line_mut(&mut self, id: WidgetId) -> Option<&mut EditLine> {
        match self.get_mut(id).map(|node| &mut node.kind) {
            Some(WidgetKind::EditLine(e)) => Some(e),
            _ => None,
        }
    }

    pub fn check_box(&self, id: WidgetId) -> Option<&CheckBox> {
        match self.get(id).map(|node| &node.kind) {
            Some(WidgetKind::CheckBox(c)) => Some(c),
            _ => None,
        }
    }

    pub fn check_box_mut(&mut self, id: WidgetId) -> Option<&mut CheckBox> {
        match self.get_mut(id).map(|node| &mut node.kind) {
            Some(WidgetKind::CheckBox(c)) => Some(c),
            _ => None,
        }
    }

    /// Ids of live widgets without a parent, in insertion order.
    pub fn roots(&self) -> Vec<WidgetId> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| match node {
                Some(node) if node.parent.is_none() => Some(WidgetId::from_index(index)),
                _ => None,
            })
            .collect()
    }

    /// Ids of `root` and all its descendants, parents before children,
    /// siblings in insertion order.
    pub fn descendants(&self, root: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children().iter().rev().copied());
        }
        out
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(next) = current {
            if next == ancestor {
                return true;
            }
            current = self.get(next).and_then(WidgetNode::parent);
        }
        false
    }
}
