//! Casing helpers for declared names.
//!
//! First-letter transforms operate on the first Unicode scalar value, so a
//! name such as `élan` becomes `Élan`, not a mangled byte sequence.

/// `cat` → `Cat`, `catAndDog` → `CatAndDog`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `CatAndDog` → `catAndDog`.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `CatAndDog` → `catanddog`.
pub fn all_lower(s: &str) -> String {
    s.to_lowercase()
}

/// `animals` → `ANIMALS`.
pub fn all_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Default plural: lower-first name with an `s` appended.
///
/// No irregular forms are attempted; `mouse` becomes `mouses`. Declarations
/// that need `mice` must say so with `plural`.
pub fn default_plural(name: &str) -> String {
    let mut plural = lower_first(name);
    plural.push('s');
    plural
}

/// Strict and reserved Rust keywords. A derived name equal to one of these
/// cannot be a module, field or method name in generated code.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// A letter or `_`, then letters, digits or `_`; a lone `_` is not a name.
///
/// Names pass through file paths, module paths, SQL and URLs unquoted, so
/// separators, dots and punctuation are all rejected here.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_alphanumeric() || c == '_')
}

pub fn is_keyword(s: &str) -> bool {
    RUST_KEYWORDS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("cat"), "Cat");
        assert_eq!(upper_first("catAndDog"), "CatAndDog");
        assert_eq!(upper_first("Cat"), "Cat");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("CatAndDog"), "catAndDog");
        assert_eq!(lower_first("ID"), "iD");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_first_letter_is_a_code_point_not_a_byte() {
        assert_eq!(upper_first("élan"), "Élan");
        assert_eq!(lower_first("Ärger"), "ärger");
        assert_eq!(upper_first("ñandú"), "Ñandú");
        // Expanding case mappings are kept whole.
        assert_eq!(upper_first("ßeta"), "SSeta");
    }

    #[test]
    fn test_all_lower_and_upper() {
        assert_eq!(all_lower("CatAndDog"), "catanddog");
        assert_eq!(all_upper("animals"), "ANIMALS");
        assert_eq!(all_lower("ÉCOLE"), "école");
    }

    #[test]
    fn test_default_plural() {
        assert_eq!(default_plural("cat"), "cats");
        assert_eq!(default_plural("Cat"), "cats");
        assert_eq!(default_plural("mouse"), "mouses");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("cat"));
        assert!(is_identifier("goodBoy"));
        assert!(is_identifier("_private2"));
        assert!(is_identifier("élan"));
        for bad in ["", "_", "..", "../escaped", "a/b", "cat-food", "2cats", "cat food", "a.b", "x\"y"] {
            assert!(!is_identifier(bad), "{bad}");
        }
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("type"));
        assert!(is_keyword("self"));
        assert!(!is_keyword("kind"));
    }
}
