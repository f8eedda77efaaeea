pub mod layout;
pub mod project_grid;
pub mod repo_link;
pub mod theme_select;

pub use layout::render_page;
pub use project_grid::render_project_grid;
pub use repo_link::render_repo_link;
pub use theme_select::{render_theme_menu, theme_script};

/// HTML-escape a string for text and attribute positions
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
