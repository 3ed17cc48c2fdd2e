//! Paginated news list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::api::types::NewsItem;
use crate::pagination::PageSlice;
use crate::views::components::{EmptyState, NewsCard, Pager};

#[component]
pub fn NewsPage(slice: PageSlice<NewsItem>) -> impl IntoView {
    let info = slice.info();
    let PageSlice { items, page, total_pages, total_items } = slice;
    let body = if items.is_empty() {
        view! { <EmptyState message="No news yet. Check back soon."/> }.into_any()
    } else {
        let cards = items.into_iter().map(|item| view! { <NewsCard item=item/> }).collect::<Vec<_>>();
        view! { <div class="news-grid">{cards}</div> }.into_any()
    };
    let summary = (total_items > 0).then(|| format!("Page {page} of {total_pages}"));

    view! {
        <h1>"News"</h1>
        {summary.map(|s| view! { <p class="filters__count">{s}</p> })}
        {body}
        <Pager info=info/>
    }
}
