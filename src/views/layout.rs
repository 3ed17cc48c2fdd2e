//! Document shell: head, navigation, theme toggle, and partner footer.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::Partner;

/// Theme preference carried in the `league_theme` cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Schedule,
    Teams,
    Standings,
    News,
    Videos,
    About,
    /// Detail pages that do not highlight an entry.
    Detail,
}

const NAV_ITEMS: [(Nav, &str, &str); 7] = [
    (Nav::Home, "/", "Home"),
    (Nav::Schedule, "/schedule", "Schedule"),
    (Nav::Teams, "/teams", "Teams"),
    (Nav::Standings, "/standings", "Standings"),
    (Nav::News, "/news", "News"),
    (Nav::Videos, "/videos", "Videos"),
    (Nav::About, "/about", "About"),
];

/// Everything the shell needs besides the page body.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub site_name: String,
    pub theme: Theme,
    pub active: Nav,
    /// Request path, used to return here after toggling the theme.
    pub path: String,
    pub partners: Vec<Partner>,
}

#[component]
pub fn Shell(chrome: Chrome, title: String, children: Children) -> impl IntoView {
    let Chrome { site_name, theme, active, path, partners } = chrome;
    let document_title = format!("{title} | {site_name}");
    let toggle_label = match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };
    let nav = NAV_ITEMS
        .iter()
        .map(|&(item, href, label)| {
            let class = if item == active { "site-nav__link site-nav__link--active" } else { "site-nav__link" };
            view! { <a class=class href=href>{label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=theme.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{document_title}</title>
                <link rel="stylesheet" href="/static/site.css"/>
            </head>
            <body>
                <header class="site-header">
                    <a class="site-header__brand" href="/">{site_name.clone()}</a>
                    <nav class="site-nav">{nav}</nav>
                    <form class="theme-toggle" method="post" action="/preferences/theme">
                        <input type="hidden" name="return_to" value=path/>
                        <button type="submit">{toggle_label}</button>
                    </form>
                </header>
                <main class="site-main">{children()}</main>
                <Footer site_name=site_name partners=partners/>
            </body>
        </html>
    }
}

#[component]
fn Footer(site_name: String, partners: Vec<Partner>) -> impl IntoView {
    let partner_list = (!partners.is_empty()).then(|| {
        let items = partners
            .into_iter()
            .map(|p| {
                let tier = p.tier.map(|t| view! { <span class="partner__tier">{t}</span> });
                let logo = p.logo_url.map(|src| view! { <img class="partner__logo" src=src alt=""/> });
                match p.website_url {
                    Some(url) => view! {
                        <li class="partner"><a href=url rel="noopener">{logo}{p.name}</a>{tier}</li>
                    }
                    .into_any(),
                    None => view! { <li class="partner">{logo}{p.name}{tier}</li> }.into_any(),
                }
            })
            .collect::<Vec<_>>();
        view! {
            <section class="partners">
                <h2>"Partners"</h2>
                <ul class="partners__list">{items}</ul>
            </section>
        }
    });

    view! {
        <footer class="site-footer">
            {partner_list}
            <p class="site-footer__note">{format!("© {site_name}. All league data courtesy of the official league API.")}</p>
        </footer>
    }
}
