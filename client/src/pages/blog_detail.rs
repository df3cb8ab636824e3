//! Single blog post at `/blog/{id}`.
//!
//! Text blocks are Markdown. Raw HTML in the source is dropped before
//! rendering so post content cannot inject markup.

#[cfg(test)]
#[path = "blog_detail_test.rs"]
mod blog_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::banner::Banner;
use crate::content::blog::{BlogEntry, BlogSource, ContentBlock, blog_href};

pub const NOT_FOUND_MESSAGE: &str = "We couldn't find that post.";

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let blogs = expect_context::<BlogSource>();

    let entry = move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        blogs.find(&id).cloned()
    };

    view! {
        <main class="blog-detail">
            {move || match entry() {
                Some(entry) => view! { <PostView entry=entry/> }.into_any(),
                None => view! { <p class="blog-detail__missing">{NOT_FOUND_MESSAGE}</p> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn PostView(entry: BlogEntry) -> impl IntoView {
    let BlogEntry { id, title, image, highlight, date, time, author, detail } = entry;
    let sub_route_path = blog_href(&id);

    view! {
        <Banner
            image=image
            title_first=title
            main_route="Blog"
            sub_route="Article"
            sub_route_path=sub_route_path
            date=Some(date)
            time=time
            author=author
            show_social_icons=true
        />
        <article class="blog-detail__body">
            <p class="blog-detail__highlight">{highlight}</p>
            {detail.content.into_iter().map(render_block).collect_view()}
        </article>
    }
}

fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Text { value } => {
            view! { <div class="blog-detail__text" inner_html=render_markdown_html(&value)></div> }.into_any()
        }
        ContentBlock::Heading { value } => view! { <h2 class="blog-detail__heading">{value}</h2> }.into_any(),
        ContentBlock::Image { src, alt } => view! { <img class="blog-detail__image" src=src alt=alt/> }.into_any(),
        ContentBlock::Unknown => ().into_any(),
    }
}

pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
