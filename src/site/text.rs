//! String casing.

/// Convert arbitrary text to camelCase.
///
/// Words are maximal runs of ASCII alphanumerics, with an extra word
/// boundary wherever a lowercase letter or digit is followed by an
/// uppercase letter, so already-camelCased input passes through unchanged
/// and the function is idempotent. Separator characters are dropped; the
/// first word is lower-cased, every later word starts upper-cased.
///
/// # Examples
///
/// ```
/// assert_eq!(urlsnap::site::to_camel_case("hello-world_test"), "helloWorldTest");
/// assert_eq!(urlsnap::site::to_camel_case("helloWorldTest"), "helloWorldTest");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut start_word = false;
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() {
                start_word = true;
            }
            prev = None;
            continue;
        }

        let case_break = matches!(
            prev,
            Some(p) if c.is_ascii_uppercase() && (p.is_ascii_lowercase() || p.is_ascii_digit())
        );

        if out.is_empty() {
            out.push(c.to_ascii_lowercase());
        } else if start_word || case_break {
            out.push(c.to_ascii_uppercase());
            start_word = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }

        prev = Some(c);
    }

    out
}
