//! Errors raised while building the widget tree

use thiserror_no_std::Error;

use crate::ui::WidgetId;

/// Malformed tree construction
///
/// Everything else in the toolkit degrades silently; building an impossible
/// tree is the one thing reported back to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UiError {
    #[error("Widget {0:?} cannot be added to itself")]
    SelfContainment(WidgetId),

    #[error("Adding {child:?} to {parent:?} would create a cycle")]
    Cycle { parent: WidgetId, child: WidgetId },

    #[error("Widget {0:?} already has a parent")]
    AlreadyAttached(WidgetId),

    #[error("Widget {0:?} is not a container")]
    NotAContainer(WidgetId),

    #[error("Widget {0:?} has no replaceable text")]
    NoText(WidgetId),

    #[error("No widget with id {0:?}")]
    UnknownWidget(WidgetId),
}
