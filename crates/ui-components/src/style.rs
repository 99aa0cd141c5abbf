//! Variant resolution and class composition
//!
//! Components describe their appearance as Tailwind utility class strings.
//! Every variant and size enum implements [`StyleVariant`]; [`compose`]
//! joins base, variant, size, and caller overrides in that fixed precedence
//! order, and [`cn`] normalizes the result.

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

// =============================================================================
// Variant Resolution
// =============================================================================

/// A selectable style axis (variant or size) that resolves to utility classes
pub trait StyleVariant {
    /// Utility classes contributed by this selection
    fn classes(&self) -> &'static str;
}

/// Join class fragments into a normalized class string
///
/// Whitespace is collapsed and exact duplicate classes are dropped, keeping
/// the last occurrence so later fragments win.
pub fn cn(parts: &[&str]) -> String {
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect();

    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if tokens[i + 1..].contains(token) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Resolve a component's full class string
///
/// Precedence is fixed: base, then variant, then size, then caller
/// overrides. Later classes win on exact duplicates.
pub fn compose<V, S>(base: &str, variant: &V, size: &S, overrides: &str) -> String
where
    V: StyleVariant,
    S: StyleVariant,
{
    cn(&[base, variant.classes(), size.classes(), overrides])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl StyleVariant for Fixed {
        fn classes(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_cn_joins_and_collapses_whitespace() {
        assert_eq!(cn(&["a  b", " c "]), "a b c");
        assert_eq!(cn(&["", "a", ""]), "a");
        assert_eq!(cn(&[]), "");
    }

    #[test]
    fn test_cn_dedupes_keeping_last() {
        assert_eq!(cn(&["p-4 text-sm", "p-4"]), "text-sm p-4");
        assert_eq!(cn(&["a b a"]), "b a");
    }

    #[test]
    fn test_compose_precedence_order() {
        let variant = Fixed("bg-taxi-yellow-500");
        let size = Fixed("h-10 px-4");
        let out = compose("inline-flex rounded-md", &variant, &size, "w-full");
        assert_eq!(out, "inline-flex rounded-md bg-taxi-yellow-500 h-10 px-4 w-full");
    }

    #[test]
    fn test_compose_overrides_win_on_duplicates() {
        let variant = Fixed("p-6");
        let size = Fixed("");
        let out = compose("rounded-lg p-6", &variant, &size, "p-6 shadow-md");
        assert_eq!(out, "rounded-lg p-6 shadow-md");
    }

    #[test]
    fn test_compose_with_empty_overrides() {
        let variant = Fixed("a");
        let size = Fixed("b");
        assert_eq!(compose("base", &variant, &size, ""), "base a b");
    }
}
