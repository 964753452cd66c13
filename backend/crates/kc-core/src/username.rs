/// Canonicalize a username the way the account store does: the first
/// character is upper-cased, everything after it is left untouched.
///
/// `"jdoe"` becomes `"Jdoe"` and `"jDOE"` becomes `"JDOE"`.
pub fn normalize_username(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
