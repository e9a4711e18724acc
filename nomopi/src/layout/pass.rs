//! The layout pass: top-down, single traversal of the widget tree.
//!
//! Each node is given its rectangle and resized. A container first resolves
//! its own frame, then its children's policies are distributed over the
//! frame's usable span and every child is placed along the main axis,
//! interleaved with spacer slots. Children then recurse with the rectangle
//! they were given. Nothing is measured bottom-up.

use crate::i18n::Dictionary;
use crate::primitives::Rect;
use crate::widget::{WidgetEnv, WidgetId, WidgetKind, WidgetTree};

use super::context::{LayoutContext, LayoutWarning};
use super::flex::{SpanMode, distribute};
use super::frame::gap_count;
use super::length::{Orientation, SizePolicy};

/// Lay out the subtree rooted at `root` inside `bounds`.
///
/// Returns the warnings raised during the pass. Running the pass twice with
/// the same inputs produces identical geometry.
pub fn layout(
    tree: &mut WidgetTree,
    root: WidgetId,
    bounds: Rect,
    env: &WidgetEnv<'_>,
) -> Vec<LayoutWarning> {
    let mut ctx = LayoutContext::new();
    layout_node(tree, root, bounds, env, &mut ctx);
    tracing::debug!(
        "layout pass: {} nodes, {} warnings",
        ctx.nodes_visited(),
        ctx.warnings().len()
    );
    ctx.into_warnings()
}

/// Lay out a single node and, for containers, its children.
pub fn layout_node(
    tree: &mut WidgetTree,
    id: WidgetId,
    bounds: Rect,
    env: &WidgetEnv<'_>,
    ctx: &mut LayoutContext,
) {
    let Some(node) = tree.get_mut(id) else {
        ctx.warn(id, "unknown widget skipped");
        return;
    };

    node.bounds = bounds;
    node.kind.as_widget_mut().resize(bounds, env);
    ctx.visit();
    tracing::trace!("{}{} {} -> {:?}", "  ".repeat(ctx.depth() as usize), node.name(), id, bounds);

    let WidgetKind::Container(container) = &node.kind else {
        return;
    };

    let children = container.children().to_vec();
    let orientation = container.orientation();
    let mode = container.span_mode();
    let edge_spacing = container.has_edge_spacing();
    let frame = container.frame().clone();
    tracing::debug!(
        "{} {}: {}x{}, inner {}x{}, spacing {}px, {} children",
        container.name(),
        id,
        bounds.width,
        bounds.height,
        frame.inner.width,
        frame.inner.height,
        frame.spacing,
        children.len()
    );

    let policies: Vec<SizePolicy> = children
        .iter()
        .map(|child| {
            tree.get(*child)
                .map_or(SizePolicy::pixels(0), |n| n.policy())
        })
        .collect();

    if frame.spacing_clamped {
        ctx.warn(
            id,
            format!(
                "spacing reduced to {}px so the gaps fit the inner extent",
                frame.spacing
            ),
        );
    }

    let inner_main = orientation.main(frame.inner.size());
    let distribution = distribute(policies, frame.usable_span, inner_main, mode);
    if distribution.clamped {
        ctx.warn(
            id,
            format!(
                "fixed children exceed the usable span of {}px and were clamped",
                frame.usable_span
            ),
        );
    }

    let gaps = gap_count(children.len(), edge_spacing);
    let spacing_total = frame.spacing.saturating_mul(gaps);

    // Scroll boxes shift their content by the (re-clamped) offset
    let offset = match (mode, tree.container_mut(id)) {
        (SpanMode::Scrollable, Ok(container)) => {
            let padding_main = match orientation {
                Orientation::Horizontal => frame.padding.horizontal(),
                Orientation::Vertical => frame.padding.vertical(),
            };
            container.set_content_extent(
                distribution
                    .consumed
                    .saturating_add(spacing_total)
                    .saturating_add(padding_main),
            );
            container.scroll_offset()
        }
        _ => 0,
    };

    let mut cursor = main_origin(orientation, frame.inner) - offset as i32;
    let mut spacers = Vec::with_capacity(gaps as usize);
    let mut placements = Vec::with_capacity(children.len());

    if edge_spacing && !children.is_empty() {
        spacers.push(slot(orientation, frame.inner, cursor, frame.spacing));
        cursor += frame.spacing as i32;
    }

    let last = children.len().saturating_sub(1);
    for (i, (child, allocation)) in children
        .iter()
        .zip(&distribution.allocations)
        .enumerate()
    {
        placements.push((*child, slot(orientation, frame.inner, cursor, allocation.main_size)));
        cursor += allocation.main_size as i32;

        if i < last || edge_spacing {
            spacers.push(slot(orientation, frame.inner, cursor, frame.spacing));
            cursor += frame.spacing as i32;
        }
    }

    if let Ok(container) = tree.container_mut(id) {
        container.frame.consumed = distribution.consumed;
        container.frame.spacers = spacers;
    }

    ctx.enter();
    for (child, rect) in placements {
        layout_node(tree, child, rect, env, ctx);
    }
    ctx.exit();
}

/// Refresh localized text for every widget under `root`.
pub fn translate(tree: &mut WidgetTree, root: WidgetId, dictionary: Option<&Dictionary>) {
    for id in tree.descendants(root) {
        if let Some(node) = tree.get_mut(id) {
            node.kind_mut().as_widget_mut().translate(dictionary);
        }
    }
}

/// Advance animation state for every widget under `root`.
pub fn tick(tree: &mut WidgetTree, root: WidgetId, dt: f32) {
    for id in tree.descendants(root) {
        if let Some(node) = tree.get_mut(id) {
            node.kind_mut().as_widget_mut().tick(dt);
        }
    }
}

#[inline]
fn main_origin(orientation: Orientation, inner: Rect) -> i32 {
    match orientation {
        Orientation::Horizontal => inner.x,
        Orientation::Vertical => inner.y,
    }
}

/// A slot starting at `main` along the main axis, spanning the full inner
/// cross extent.
#[inline]
fn slot(orientation: Orientation, inner: Rect, main: i32, extent: u32) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect::new(main, inner.y, extent, inner.height),
        Orientation::Vertical => Rect::new(inner.x, main, inner.width, extent),
    }
}
