/// Convert a CamelCase entity name to its word-separated lowercase form.
///
/// The rule is strictly per-character: every uppercase letter that is not
/// the first character gets an underscore inserted before it, and every
/// character is lowered. Uppercase runs are not grouped, so `"UserID"`
/// becomes `"user_i_d"`. Output file names derive from this, so the exact
/// behavior is load-bearing.
///
/// # Example
///
/// ```rust
/// use crudgen::generator::to_snake_case;
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lowercase only the first character, leaving the rest untouched.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
