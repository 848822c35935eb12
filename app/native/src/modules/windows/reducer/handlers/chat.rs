//! Chat payload handlers.
//!
//! Chat windows keep their pending input and selected channel in the payload.
//! Id `0` addresses the modal's payload.

use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::state::{ChannelId, Payload, WindowId, WindowsState};

fn payload_mut(state: &mut WindowsState, window_id: WindowId) -> WindowResult<&mut Payload> {
    state.payload_mut(window_id).ok_or(WindowError::UnknownWindow(window_id))
}

/// Append `msg` to the input message, separated by a single space.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if there is no payload for
/// `window_id`, or [`WindowError::InvalidPayload`] if its input message is
/// missing or not a string.
pub fn on_append_chat_input(
    state: &mut WindowsState,
    window_id: WindowId,
    msg: &str,
) -> WindowResult<()> {
    let payload = payload_mut(state, window_id)?;
    let mut message = payload
        .input_message()
        .ok_or(WindowError::InvalidPayload { window_id, field: Payload::INPUT_MESSAGE })?
        .to_owned();

    if !message.is_empty() && !message.ends_with(' ') {
        message.push(' ');
    }
    message.push_str(msg);

    payload.insert(Payload::INPUT_MESSAGE, message);
    Ok(())
}

/// Select the chat channel.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if there is no payload for
/// `window_id`.
pub fn on_set_chat_channel(
    state: &mut WindowsState,
    window_id: WindowId,
    cid: ChannelId,
) -> WindowResult<()> {
    payload_mut(state, window_id)?.insert(Payload::CHAT_CHANNEL, cid);
    tracing::debug!(window_id = %window_id, cid, "set chat channel");
    Ok(())
}

/// Replace the input message.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if there is no payload for
/// `window_id`.
pub fn on_set_chat_input(state: &mut WindowsState, window_id: WindowId, msg: String) -> WindowResult<()> {
    payload_mut(state, window_id)?.insert(Payload::INPUT_MESSAGE, msg);
    Ok(())
}
