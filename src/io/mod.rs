//! Serializers: STL meshes and the simulator description files that reference them.

pub mod mjcf;
pub mod sdformat;
pub mod stl;

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted XML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
