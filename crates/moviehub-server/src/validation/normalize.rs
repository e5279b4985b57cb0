use validator::ValidationErrors;

/// Flattens validation errors into one deterministic message.
///
/// All messages are collected regardless of field, sorted by byte order and
/// joined with `separator`. Duplicates are kept, so two blank fields yield
/// the same message twice. Errors without a message fall back to their code.
pub fn normalize(errors: &ValidationErrors, separator: &str) -> String {
    let fields = errors.field_errors();
    let mut messages: Vec<&str> = fields
        .values()
        .flat_map(|errors| errors.iter())
        .map(|error| error.message.as_deref().unwrap_or(error.code.as_ref()))
        .collect();

    messages.sort_unstable();
    messages.join(separator)
}
