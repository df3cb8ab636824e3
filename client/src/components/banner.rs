//! Page hero: background image, title pair, breadcrumbs, meta line, share.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icons::{Icon, IconKind};

/// Inline style layering a dark gradient over the banner image.
pub fn background_style(image: &str) -> String {
    format!(
        "background-image: linear-gradient(to right, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.3)), url({image});"
    )
}

/// Class for the sub-route crumb; highlighted when it is the current page.
pub fn crumb_class(current_path: &str, sub_route_path: &str) -> &'static str {
    if current_path == sub_route_path {
        "banner__crumb banner__crumb--current"
    } else {
        "banner__crumb"
    }
}

/// `date | time`, either half alone, or nothing.
pub fn date_time_line(date: Option<&str>, time: Option<&str>) -> Option<String> {
    match (date.filter(|d| !d.is_empty()), time.filter(|t| !t.is_empty())) {
        (Some(date), Some(time)) => Some(format!("{date} | {time}")),
        (Some(one), None) | (None, Some(one)) => Some(one.to_owned()),
        (None, None) => None,
    }
}

/// Full meta line: `By {author}` joined to the date/time part.
pub fn meta_line(author: Option<&str>, date: Option<&str>, time: Option<&str>) -> Option<String> {
    let author = author.filter(|a| !a.is_empty()).map(|a| format!("By {a}"));
    match (author, date_time_line(date, time)) {
        (Some(author), Some(when)) => Some(format!("{author} | {when}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

#[component]
pub fn Banner(
    #[prop(into)] image: String,
    #[prop(into)] title_first: String,
    #[prop(optional, into)] title_second: String,
    #[prop(optional, into)] small_text: Option<String>,
    #[prop(into)] main_route: String,
    #[prop(into)] sub_route: String,
    #[prop(into)] sub_route_path: String,
    #[prop(optional_no_strip)] date: Option<String>,
    #[prop(optional_no_strip)] time: Option<String>,
    #[prop(optional_no_strip)] author: Option<String>,
    #[prop(optional)] show_social_icons: bool,
) -> impl IntoView {
    let location = use_location();
    let sub_class = {
        let sub_route_path = sub_route_path.clone();
        move || crumb_class(&location.pathname.get(), &sub_route_path)
    };
    let meta = meta_line(author.as_deref(), date.as_deref(), time.as_deref());
    let main_label = format!("Navigate to {main_route}");
    let sub_label = format!("Navigate to {sub_route}");

    view! {
        <section class="banner" style=background_style(&image)>
            <div class="banner__titles">
                <h1 class="banner__title">
                    <span class="banner__title-accent">{title_first}</span>
                    " "
                    <span>{title_second}</span>
                </h1>
                {small_text.map(|text| view! { <p class="banner__subtitle">{text}</p> })}
            </div>

            <nav class="banner__breadcrumbs" aria-label="Breadcrumb">
                <a href="/" class="banner__crumb" aria-label=main_label>{main_route}</a>
                <span class="banner__crumb-separator">"/"</span>
                <a href=sub_route_path class=sub_class aria-label=sub_label>{sub_route}</a>
            </nav>

            {meta.map(|line| view! { <p class="banner__meta">{line}</p> })}

            <Show when=move || show_social_icons>
                <button
                    class="banner__share"
                    aria-label="Share this page"
                    on:click=move |_| crate::util::share::share_current_page()
                >
                    <Icon kind=IconKind::ExternalLink/>
                </button>
            </Show>
        </section>
    }
}
