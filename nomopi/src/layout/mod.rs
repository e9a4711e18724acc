//! Box-model layout.
//!
//! Every widget carries a [`SizePolicy`] for the main axis of its parent
//! container. A layout pass walks the widget tree top-down: each container
//! resolves its padding and spacing, distributes its usable span among its
//! children, and recurses.
//!
//! # Architecture
//!
//! ```text
//! ContainerFrame::resolve -> distribute -> place children + spacers -> recurse
//! ```

pub mod context;
pub mod flex;
pub mod frame;
pub mod length;
pub mod pass;

pub use context::{LayoutContext, LayoutWarning};
pub use flex::{Allocation, Distribution, SpanMode, distribute};
pub use frame::{ContainerFrame, PixelPadding, gap_count};
pub use length::{Align, Axis, Orientation, Padding, Side, SizePolicy, validate_spacing};
pub use pass::layout;
