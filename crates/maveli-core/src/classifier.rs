//! Name plausibility heuristic.
//!
//! Intentionally approximate: a greeting page should err on the side of
//! welcoming people, so the heuristic only has to catch the obvious
//! keyboard-mash and placeholder names. Rules fire in priority order –
//! allowlist, then denylist, then a shape check.
//!
//! Total over any input string; the caller enforces the minimum length
//! before storing anything, not before classifying.

/// Curated common first names across several naming conventions.
/// Matched case-insensitively, exact form only ("alex" yes, "alexa" no).
const COMMON_REAL_NAMES: &[&str] = &[
    "john", "jane", "alex", "sarah", "mike", "lisa", "david", "anna",
    "raj", "priya", "rahul", "kavya", "arjun", "maya", "rohan", "sneha",
    "aarav", "ananya", "ishaan", "tara", "vikram", "pooja", "karan", "riya",
];

/// Placeholder words nobody is actually called. Prefix match,
/// case-insensitive.
const PLACEHOLDER_PREFIXES: &[&str] = &[
    "test", "fake", "demo", "sample", "user", "admin",
    "guest", "temp", "placeholder", "example", "default",
];

/// Returns `true` when `name` plausibly belongs to a real person.
pub fn is_plausible_name(name: &str) -> bool {
    let lower = name.to_lowercase();

    if COMMON_REAL_NAMES.contains(&lower.as_str()) {
        return true;
    }
    if looks_fabricated(name, &lower) {
        return false;
    }
    has_name_shape(name)
}

/// Denylist of suspicious patterns. Substring rules for `123`, `abc`
/// and `xyz` are case-sensitive, mirroring the keyboard rows they
/// come from; the rest fold case.
fn looks_fabricated(name: &str, lower: &str) -> bool {
    if PLACEHOLDER_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    if name.contains("123") || name.contains("abc") || name.contains("xyz") {
        return true;
    }
    if lower.contains("qwerty") || lower.contains("asdf") {
        return true;
    }
    // A single key held down: "aaaa", "xxxxxxx".
    !name.is_empty()
        && (name.chars().all(|c| c == 'a') || name.chars().all(|c| c == 'x'))
}

/// Fallback shape check: 2–25 characters, letters plus the punctuation
/// that occurs in real names, and not one character repeated throughout.
fn has_name_shape(name: &str) -> bool {
    let len = name.chars().count();
    if !(2..=25).contains(&len) {
        return false;
    }
    let valid_chars = name.chars().all(|c| {
        c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'' || c == '.'
    });
    if !valid_chars {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => !chars.all(|c| c == first),
        None => false,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn allowlisted_names_are_real_in_any_case() {
        for name in COMMON_REAL_NAMES {
            assert!(is_plausible_name(name), "{name} should be real");
            assert!(is_plausible_name(&name.to_uppercase()), "{name} uppercased should be real");
        }
        assert!(is_plausible_name("Raj"));
        assert!(is_plausible_name("PRIYA"));
    }

    #[test]
    fn placeholder_prefixes_are_fabricated() {
        for name in ["test", "testing", "FakeName", "demo-account", "adminUser", "Guest", "temp1"] {
            assert!(!is_plausible_name(name), "{name} should be fabricated");
        }
    }

    #[test]
    fn keyboard_mash_is_fabricated() {
        assert!(!is_plausible_name("test123"));
        assert!(!is_plausible_name("no123where"));
        assert!(!is_plausible_name("xabcx"));
        assert!(!is_plausible_name("xyzzy"));
        assert!(!is_plausible_name("QwErTy"));
        assert!(!is_plausible_name("Asdf"));
    }

    #[test]
    fn repeated_single_key_is_fabricated() {
        assert!(!is_plausible_name("aaaa"));
        assert!(!is_plausible_name("xxxxxxx"));
        // Other repeated letters fall through to the shape check instead.
        assert!(!is_plausible_name("bbbb"));
    }

    #[test]
    fn ordinary_names_pass_the_shape_check() {
        assert!(is_plausible_name("Alexander"));
        assert!(is_plausible_name("Mary-Jane"));
        assert!(is_plausible_name("O'Neil"));
        assert!(is_plausible_name("Dr. Watson"));
        assert!(is_plausible_name("Lakshmi Menon"));
    }

    #[test]
    fn shape_check_rejects_bad_lengths() {
        assert!(!is_plausible_name(""));
        assert!(!is_plausible_name("b"));
        // 26 characters, one over the limit.
        assert!(!is_plausible_name("Thiruvonam Pookalam Maveli"));
    }

    #[test]
    fn shape_check_rejects_digits_and_symbols() {
        assert!(!is_plausible_name("J4ne"));
        assert!(!is_plausible_name("jane_doe"));
        assert!(!is_plausible_name("jane@home"));
        assert!(!is_plausible_name("名前"));
    }
}
