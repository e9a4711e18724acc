//! Widget system.
//!
//! Widgets are a closed set of kinds stored in a [`WidgetTree`] arena and
//! addressed by [`WidgetId`]. Every kind implements the [`Widget`]
//! capability trait: it can be resized to a rectangle, re-read its text
//! from the active dictionary, and advance per-frame animation state.
//!
//! Containers only size *themselves* in [`Widget::resize`]; distributing
//! space among their children is done by the layout pass, which has access
//! to the whole arena.

use std::fmt;

use crate::i18n::Dictionary;
use crate::layout::SizePolicy;
use crate::primitives::Rect;
use crate::settings::Settings;
use crate::text::TextMeasure;

pub mod check_box;
pub mod container;
pub mod edit_line;
pub mod label;
pub mod tree;

pub use check_box::CheckBox;
pub use container::{Background, Container, ContainerKind, Filtering};
pub use edit_line::EditLine;
pub use label::{Label, LabelMetrics};
pub use tree::{WidgetNode, WidgetTree};

/// Handle to a widget stored in a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Build an id from a raw arena index.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host services available to widgets while they resize.
#[derive(Clone, Copy)]
pub struct WidgetEnv<'a> {
    pub measure: &'a dyn TextMeasure,
    pub settings: &'a Settings,
}

/// Capability interface shared by every widget kind.
pub trait Widget {
    /// The sizing policy fixed at construction.
    fn policy(&self) -> SizePolicy;

    /// Take on the given rectangle.
    fn resize(&mut self, bounds: Rect, env: &WidgetEnv<'_>);

    /// Refresh localized text. `None` means no dictionary is active.
    fn translate(&mut self, _dictionary: Option<&Dictionary>) {}

    /// Advance animation state by `dt` seconds.
    fn tick(&mut self, _dt: f32) {}
}

/// The closed set of widget kinds.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Container(Container),
    Label(Label),
    EditLine(EditLine),
    CheckBox(CheckBox),
}

impl WidgetKind {
    pub fn as_widget(&self) -> &dyn Widget {
        match self {
            WidgetKind::Container(w) => w,
            WidgetKind::Label(w) => w,
            WidgetKind::EditLine(w) => w,
            WidgetKind::CheckBox(w) => w,
        }
    }

    pub fn as_widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            WidgetKind::Container(w) => w,
            WidgetKind::Label(w) => w,
            WidgetKind::EditLine(w) => w,
            WidgetKind::CheckBox(w) => w,
        }
    }

    /// Short display name, for logging and debug dumps.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Container(c) => c.name(),
            WidgetKind::Label(_) => "Label",
            WidgetKind::EditLine(_) => "EditLine",
            WidgetKind::CheckBox(_) => "CheckBox",
        }
    }
}

impl From<Container> for WidgetKind {
    fn from(v: Container) -> Self { Self::Container(v) }
}

impl From<Label> for WidgetKind {
    fn from(v: Label) -> Self { Self::Label(v) }
}

impl From<EditLine> for WidgetKind {
    fn from(v: EditLine) -> Self { Self::EditLine(v) }
}

impl From<CheckBox> for WidgetKind {
    fn from(v: CheckBox) -> Self { Self::CheckBox(v) }
}
