//! Prompt composition.

/// Separator placed between a prompt and appended source text.
pub const BLANK_LINE: &str = "\n\n";

/// Combine a prompt with optional source text.
///
/// - no text: the prompt is returned unchanged;
/// - text and a non-blank `marker` found in the prompt: the first occurrence
///   of the marker is replaced by the text;
/// - otherwise the text is appended after one blank line.
pub fn compose_prompt(prompt: &str, blob_text: Option<&str>, marker: Option<&str>) -> String {
    let Some(text) = blob_text else {
        return prompt.to_string();
    };

    match marker.filter(|m| !m.trim().is_empty()) {
        Some(marker) if prompt.contains(marker) => prompt.replacen(marker, text, 1),
        Some(marker) => {
            tracing::debug!(marker, "insert marker not present in prompt, appending text");
            format!("{prompt}{BLANK_LINE}{text}")
        }
        None => format!("{prompt}{BLANK_LINE}{text}"),
    }
}
