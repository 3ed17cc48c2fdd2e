//! Server-rendered page markup.
//!
//! ARCHITECTURE
//! ============
//! Pages are leptos components rendered to strings on the server; there is
//! no hydration. `layout` owns the document shell, `components` the shared
//! presentational pieces, and `pages` one module per route. Handlers fetch,
//! shape, then call `render_page` with the finished page view.

pub mod components;
pub mod layout;
pub mod pages;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use layout::{Chrome, Nav, Theme};
use layout::Shell;

/// Render a complete HTML document: `body` wrapped in the site shell.
pub fn render_page<V>(chrome: Chrome, title: &str, body: V) -> String
where
    V: IntoView + 'static,
{
    let title = title.to_owned();
    render(move || {
        view! {
            <Shell chrome=chrome title=title>
                {body}
            </Shell>
        }
    })
}

/// Render a view inside a fresh reactive owner.
pub fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
