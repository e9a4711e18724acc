//! Layout error types.

use thiserror::Error;

use crate::layout::{Axis, Side};
use crate::widget::WidgetId;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid {side} padding: {value} (expected a fraction in [0, 1])")]
    InvalidPadding { side: Side, value: f32 },

    #[error("{axis} padding sums to {total} (must not exceed 1)")]
    PaddingOverflow { axis: Axis, total: f32 },

    #[error("invalid spacing: {0} (expected a fraction in [0, 1])")]
    InvalidSpacing(f32),

    #[error("invalid proportional fraction: {0} (expected a value in [0, 1])")]
    InvalidFraction(f32),

    #[error("invalid fill weight: {0} (expected a finite value >= 0)")]
    InvalidWeight(f32),

    #[error("unknown widget: {0}")]
    UnknownWidget(WidgetId),

    #[error("widget {0} is not a container")]
    NotAContainer(WidgetId),

    #[error("widget {0} is not a label")]
    NotALabel(WidgetId),

    #[error("widget {0} already has a parent")]
    AlreadyParented(WidgetId),

    #[error("adding widget {0} would create a cycle")]
    CycleDetected(WidgetId),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown default font index: {0}")]
    UnknownFont(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
