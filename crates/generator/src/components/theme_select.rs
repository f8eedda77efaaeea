//! Client-side theme selector.
//!
//! The menu markup and `theme.js` follow the same rules as
//! [`folio_core::theme::ThemeSelector`]: the stored value wins, otherwise
//! `prefers-color-scheme: dark` picks dark over light, and only a click
//! writes to `localStorage`. Keys, names and attributes come from the core
//! constants so both sides agree.

use folio_core::theme::{THEME_CLASSES, THEME_STORAGE_KEY, ThemePreference};
use serde_json::{Map, Value, json};

/// Listbox with one option per theme
pub fn render_theme_menu() -> String {
    let options: String = ThemePreference::ALL
        .iter()
        .map(|theme| {
            format!(
                r#"<li role="option" class="theme-option" data-theme-option="{name}" aria-selected="false" tabindex="-1">{name}</li>"#,
                name = theme.as_str()
            )
        })
        .collect();

    format!(
        r#"<div class="theme-select">
    <button type="button" class="theme-button" aria-haspopup="listbox" aria-expanded="false" aria-label="Select theme"></button>
    <ul class="theme-options" role="listbox" hidden>{}</ul>
</div>"#,
        options
    )
}

fn theme_table() -> Value {
    let mut themes = Map::new();
    for theme in ThemePreference::ALL {
        let attributes = theme.attributes();
        themes.insert(
            theme.as_str().to_string(),
            json!({ "cls": attributes.class, "dataTheme": attributes.data_theme }),
        );
    }
    Value::Object(themes)
}

/// Contents of `theme.js`
pub fn theme_script() -> String {
    let header = format!(
        "const STORAGE_KEY = {};\nconst THEME_CLASSES = {};\nconst THEMES = {};\n",
        json!(THEME_STORAGE_KEY),
        json!(THEME_CLASSES),
        theme_table()
    );

    let body = r#"
function applyAttributes(theme) {
    const root = document.documentElement;
    root.classList.remove(...THEME_CLASSES);
    const attrs = THEMES[theme];
    if (attrs.cls) {
        root.classList.add(attrs.cls);
    }
    root.setAttribute('data-theme', attrs.dataTheme);
}

function initialTheme() {
    const stored = localStorage.getItem(STORAGE_KEY);
    if (stored && Object.prototype.hasOwnProperty.call(THEMES, stored)) {
        return stored;
    }
    return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
}

class ThemeSelect {
    constructor(container) {
        this.button = container.querySelector('.theme-button');
        this.list = container.querySelector('.theme-options');
        this.options = Array.from(container.querySelectorAll('.theme-option'));
        this.theme = initialTheme();

        applyAttributes(this.theme);
        this.render();

        this.button.addEventListener('click', () => this.toggle());
        this.options.forEach(option => {
            option.addEventListener('click', () => this.select(option.dataset.themeOption));
        });
    }

    toggle() {
        const open = this.list.hidden;
        this.list.hidden = !open;
        this.button.setAttribute('aria-expanded', String(open));
    }

    select(theme) {
        this.theme = theme;
        applyAttributes(theme);
        localStorage.setItem(STORAGE_KEY, theme);
        this.render();
        this.list.hidden = true;
        this.button.setAttribute('aria-expanded', 'false');
    }

    render() {
        this.button.textContent = this.theme;
        this.options.forEach(option => {
            option.setAttribute('aria-selected', String(option.dataset.themeOption === this.theme));
        });
    }
}

function initThemeSelect() {
    document.querySelectorAll('.theme-select').forEach(container => new ThemeSelect(container));
}

if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', initThemeSelect);
} else {
    initThemeSelect();
}
"#;

    format!("{}{}", header, body)
}
