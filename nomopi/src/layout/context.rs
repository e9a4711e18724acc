//! Layout context for tracing and pass bookkeeping.
//!
//! The LayoutContext is threaded through one layout pass:
//! - Depth tracking, so nested containers log with their position in the tree
//! - A count of nodes sized during the pass
//! - Warnings raised when a configuration had to be clamped
//!
//! A fresh context is created for every pass; nothing carries over between
//! resizes, which keeps repeated passes idempotent.

use crate::widget::WidgetId;

/// A layout warning recorded during a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutWarning {
    pub depth: u32,
    pub widget: WidgetId,
    pub message: String,
}

/// Layout context passed through the widget tree.
#[derive(Debug, Default)]
pub struct LayoutContext {
    depth: u32,
    nodes_visited: usize,
    warnings: Vec<LayoutWarning>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a container scope.
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// Exit the current scope.
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth (root container = 1 while it lays out).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Record that a node received a size.
    #[inline]
    pub fn visit(&mut self) {
        self.nodes_visited += 1;
    }

    /// Number of nodes sized so far in this pass.
    #[inline]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Record and log a warning.
    pub fn warn(&mut self, widget: WidgetId, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("layout {} (depth {}): {}", widget, self.depth, message);
        self.warnings.push(LayoutWarning {
            depth: self.depth,
            widget,
            message,
        });
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Consume the context, returning its warnings.
    pub fn into_warnings(self) -> Vec<LayoutWarning> {
        self.warnings
    }
}
