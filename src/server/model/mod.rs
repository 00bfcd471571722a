pub(crate) mod ad;
pub(crate) mod assignment;
pub(crate) mod config;
pub(crate) mod document;
pub(crate) mod table;

/// Required string fields count as absent when missing, null or empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
