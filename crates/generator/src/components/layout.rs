use folio_core::SiteMetadata;

use super::{html_escape, render_theme_menu};

/// Wrap page content in the shared document shell
pub fn render_page(site: &SiteMetadata, page_title: &str, content: &str) -> String {
    let site_title = html_escape(&site.title);
    let full_title = if page_title.is_empty() {
        site_title.clone()
    } else {
        format!("{} | {}", html_escape(page_title), site_title)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="github-light">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{}">
    <title>{}</title>
    <script src="/theme.js" defer></script>
</head>
<body>
    <header class="site-header">
        <a class="site-title" href="/">{}</a>
        <nav>
            <a href="/projects/">projects</a>
        </nav>
        {}
    </header>
    <main>
{}
    </main>
</body>
</html>
"#,
        html_escape(&site.description),
        full_title,
        site_title,
        render_theme_menu(),
        content
    )
}
