//! Shared rendering for `TypeName([a, b, ...])` output.

use core::fmt;

/// Writes `label([e1<sep>e2<sep>...])` to `f`.
///
/// An empty sequence renders as `label([])`.
pub fn fmt_sequence<I>(f: &mut fmt::Formatter<'_>, label: &str, items: I, separator: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "{}([", label)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("])")
}
