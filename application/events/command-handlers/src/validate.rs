use events_errors::EventError;

/// Text columns on events are required; whitespace-only input counts as
/// blank.
pub(crate) fn require_non_blank(
    value: &str, field: &'static str,
) -> Result<(), EventError> {
    if value.trim().is_empty() {
        return Err(EventError::Validation { field });
    }
    Ok(())
}
