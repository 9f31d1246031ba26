//! Shared string helpers.

/// Convert a name to PascalCase, splitting on `_`, `-`, `/` and `.`
/// (e.g., "web-frontend" -> "WebFrontend")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', '/', '.'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
