use regex::Regex;
use std::sync::LazyLock;

static SCENE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+(\w+)\s*\(\s*Scene\s*\)\s*:").expect("scene class pattern")
});

/// Find the name of the class to render: the first declaration in `source`
/// deriving directly from manim's `Scene`.
///
/// This is a textual scan, not a parse. Only the first match is used; later
/// Scene subclasses in the same source are ignored.
pub fn find_entry_point(source: &str) -> Option<&str> {
    SCENE_CLASS_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}
