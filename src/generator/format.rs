use crate::error::GenerateError;

/// Artifact left behind when a boolean-style template guard collapses to an
/// always-true branch. Patched out before parsing; this is a structural fix
/// for a known expansion quirk, not a general-purpose rewrite.
const OR_ARTIFACT: &str = "|| {";

/// Sanitize and canonicalize rendered text.
///
/// Applies the fixed artifact substitution, then parses the result as a
/// Rust source file and pretty-prints it. Text that is not valid Rust is an
/// error; the caller logs it and skips the file instead of writing
/// malformed output.
pub fn sanitize(raw: &[u8]) -> Result<String, GenerateError> {
    let text = String::from_utf8_lossy(raw);
    let patched = text.replace(OR_ARTIFACT, "{");
    let file = syn::parse_file(&patched)?;
    Ok(prettyplease::unparse(&file))
}
