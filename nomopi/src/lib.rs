//! nomopi: resolution-independent box-model layout.
//!
//! Widgets are sized by policy instead of by pixels:
//! - `Fill` widgets share whatever their container has left, by weight
//! - `Proportional` widgets take a fraction of the container's usable span
//! - `PixelPerfect` widgets take an exact pixel extent
//!
//! Containers (HBox, VBox, ScrollBox) add fractional padding and spacing, so
//! a UI built once lays out identically on any surface size.
//!
//! # Usage
//!
//! ```ignore
//! use nomopi::{Container, Label, Settings, Size, Ui};
//!
//! let mut ui = Ui::new(Settings::default());
//! let root = ui.insert(Container::vbox().spacing(0.05))?;
//! let title = ui.insert(Label::new().text("Title"))?;
//! ui.add_child(root, title)?;
//! ui.set_root_widget(root)?;
//! ui.set_surface_size(Size::new(1280, 720));
//! ```
//!
//! Rendering is left to the host: nomopi computes rectangles, font sizes and
//! resolved resource paths, and never draws.

// Geometry
pub mod primitives;

// Layout core
pub mod layout;

// Widgets and the arena that owns them
pub mod widget;

// Host services
pub mod i18n;
pub mod settings;
pub mod text;

// Root holder
pub mod ui;

mod error;

pub use error::{LayoutError, Result};
pub use i18n::{Dictionary, Localization};
pub use layout::{Align, LayoutWarning, Orientation, Padding, SizePolicy};
pub use primitives::{Color, Point, Rect, Size};
pub use settings::Settings;
pub use text::{FitMode, FontParams, MonospaceMeasure, TextMeasure};
pub use ui::Ui;
pub use widget::{
    Background, CheckBox, Container, ContainerKind, EditLine, Filtering, Label, Widget,
    WidgetId, WidgetKind, WidgetTree,
};
