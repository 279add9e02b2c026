//! Reply extraction: isolate the assistant's newest turn from raw model
//! output.

/// Marker that precedes assistant turns in the transcript format.
pub const ASSISTANT_MARKER: &str = "Assistant:";

/// Turn-boundary markers, in priority order. The first one found in the
/// candidate reply truncates it there.
pub const STOP_MARKERS: [&str; 3] = ["\nUser:", "\nuser:", "\nHuman:"];

/// Extract the assistant's newest turn from `generated`.
///
/// Completion backends echo the prompt before the continuation, so the
/// reply starts after the *last* [`ASSISTANT_MARKER`]. If the model ran
/// on and hallucinated further turns, the reply is cut at the first
/// [`STOP_MARKERS`] hit. The result is whitespace-trimmed and may be
/// empty.
///
/// If no assistant marker occurs anywhere, the whole text comes back
/// (trimmed), prompt echo included. Callers that feed this function
/// non-transcript text get it back as-is.
pub fn extract_reply(generated: &str) -> String {
    let candidate = match generated.rfind(ASSISTANT_MARKER) {
        Some(idx) => &generated[idx + ASSISTANT_MARKER.len()..],
        None => generated,
    };

    let mut reply = candidate;
    for marker in STOP_MARKERS {
        if let Some(idx) = reply.find(marker) {
            reply = &reply[..idx];
            break;
        }
    }

    reply.trim().to_string()
}
