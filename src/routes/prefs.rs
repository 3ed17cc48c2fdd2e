//! Theme preference toggle.
//!
//! The preference is the only client-side state the site keeps. It lives in
//! a plain cookie and is read back by every page render.

use axum::Form;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::views::Theme;

pub const THEME_COOKIE: &str = "league_theme";

#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Theme recorded in the request's cookies, light when absent or unknown.
#[must_use]
pub fn theme_from(jar: &CookieJar) -> Theme {
    Theme::parse(jar.get(THEME_COOKIE).map(Cookie::value))
}

/// Only same-site absolute paths are followed; anything else goes home.
#[must_use]
pub fn safe_return_path(raw: Option<&str>) -> &str {
    match raw {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p,
        _ => "/",
    }
}

/// `POST /preferences/theme` — flip the theme cookie and go back.
pub async fn toggle_theme(jar: CookieJar, Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let next = theme_from(&jar).toggled();
    tracing::debug!(theme = next.as_str(), "theme preference changed");
    let cookie = Cookie::build((THEME_COOKIE, next.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .build();
    let target = safe_return_path(form.return_to.as_deref()).to_owned();
    (jar.add(cookie), Redirect::to(&target))
}
