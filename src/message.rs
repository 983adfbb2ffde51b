//! Forwarding window messages to the compositor.
//!
//! Windows that draw into compositor-managed frame areas must give the
//! compositor first refusal on certain non-client messages (hit testing
//! over the caption buttons, for instance). [`route`] is the single
//! stateless hook for that: call it from the window procedure before
//! any default handling.

use crate::traits::{Compositor, CompositorError};
use crate::types::{WindowId, WindowMessage};

/// Forward `message` to the compositor's default window procedure.
///
/// Writes the native result value into `message.result` and returns
/// whether the compositor claimed the message. When it did, the window
/// procedure should return `message.result` without further processing;
/// otherwise handling continues as usual. No retries, no state.
pub fn route<C: Compositor>(
    compositor: &C,
    window: WindowId,
    message: &mut WindowMessage,
) -> Result<bool, CompositorError> {
    let (handled, result) =
        compositor.default_window_proc(window, message.code, message.wparam, message.lparam)?;
    message.result = result;
    Ok(handled)
}
