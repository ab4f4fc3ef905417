//! String-case helpers for template key normalization.

/// Convert a string to camelCase (e.g., "my-form" -> "myForm").
///
/// Words are split on `-`, `_`, and whitespace. The first word is
/// lowercased on its first character, subsequent words are capitalized.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut first_word = true;
    for word in s.split(|c: char| c == '-' || c == '_' || c.is_whitespace()) {
        if word.is_empty() {
            continue;
        }
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            if first_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            result.push_str(chars.as_str());
        }
        first_word = false;
    }
    result
}

/// Convert a string to PascalCase (e.g., "contact-form" -> "ContactForm").
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
