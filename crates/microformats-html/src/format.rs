//! The formatter seam.

/// Renders a value object as an HTML fragment.
///
/// Formatters that delegate to others hold them as `Format` implementors, so
/// a caller can swap in its own rendering for any nested part.
pub trait Format<T: ?Sized> {
    fn format(&self, value: &T) -> String;
}
