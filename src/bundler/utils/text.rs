//! String transforms shared by the resolver and the script builder.

/// Joins the words of `name` with each word's first letter upper-cased.
///
/// Words are separated by `_`, `-` or whitespace:
/// - "my_app" -> "MyApp"
/// - "hello world" -> "HelloWorld"
/// - "Demo" -> "Demo"
pub fn camel_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Folds line breaks into single spaces so `text` fits a `KEY=value` line.
///
/// Blank lines are dropped and each line is trimmed, so a YAML block scalar
/// such as `description: |` reads as one sentence.
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
