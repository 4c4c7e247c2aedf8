use crate::serenity::serenity_model::StackFrame;

const UNKNOWN: &str = "Unknown";
const UNKNOWN_METHOD: &str = "method";

// ============================================================================
// Stack frame rendering
// ============================================================================

impl StackFrame {
    /// `Class.method`, with placeholders for missing parts.
    pub fn qualified_method(&self) -> String {
        format!(
            "{}.{}",
            self.declaring_class.as_deref().unwrap_or(UNKNOWN),
            self.method_name.as_deref().unwrap_or(UNKNOWN_METHOD)
        )
    }

    pub fn file_label(&self) -> &str {
        self.file_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn line_label(&self) -> String {
        self.line_number
            .map(|line| line.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Render frames in order, one `at Class.method (File:line)` line each.
///
/// Every line carries a leading newline, so consecutive frames are separated
/// by a blank line.
pub fn format_stack_trace(frames: &[StackFrame]) -> String {
    frames
        .iter()
        .map(|frame| {
            format!(
                "\nat {} ({}:{})",
                frame.qualified_method(),
                frame.file_label(),
                frame.line_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The innermost frame, if any.
pub fn last_frame(frames: &[StackFrame]) -> Option<&StackFrame> {
    frames.last()
}
