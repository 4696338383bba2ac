/// Characters the legacy Markdown parse mode treats as formatting.
const SPECIAL: [char; 4] = ['_', '*', '[', '`'];

/// Escapes user-supplied text (answer texts, display names) so it renders
/// literally inside a Markdown-formatted message.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
