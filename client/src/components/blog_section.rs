//! Home page teaser of the latest blog posts.
//!
//! Pure projection of the injected [`BlogSource`]: the first entry becomes a
//! featured card and the next three a compact list, in source order.

use leptos::prelude::*;

use super::button::Button;
use super::icons::IconKind;
use super::title_description::TitleDescription;
use crate::content::blog::{BlogEntry, BlogSource, BlogTeaser, EntryKind, blog_href};

#[component]
pub fn BlogSection() -> impl IntoView {
    let blogs = expect_context::<BlogSource>();
    let teaser = BlogTeaser::from_entries(blogs.entries());

    view! {
        <section class="blog-section">
            <div class="blog-section__header">
                <TitleDescription title="Latest News and Articles"/>
                <Button label="View all" icon=IconKind::ArrowUpRight class="blog-section__view-all" href="/blog"/>
            </div>
            {match teaser {
                Some(teaser) => view! {
                    <div class="blog-section__grid">
                        <FeaturedCard entry=teaser.featured/>
                        <div class="blog-section__recent">
                            {teaser.recent.into_iter().map(|entry| view! { <CompactCard entry=entry/> }).collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
                None => view! { <p class="blog-section__empty">"No posts yet."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
pub(crate) fn FeaturedCard(entry: BlogEntry) -> impl IntoView {
    view! {
        <a class="blog-card blog-card--featured" href=blog_href(&entry.id)>
            <img class="blog-card__image" src=entry.image alt=entry.title.clone()/>
            <p class="blog-card__title">{entry.title}</p>
            <p class="blog-card__highlight">{entry.highlight}</p>
            <p class="blog-card__date">{entry.date}</p>
        </a>
    }
}

#[component]
fn CompactCard(entry: BlogEntry) -> impl IntoView {
    let kind = EntryKind::of(&entry);
    view! {
        <a class="blog-card blog-card--compact" href=blog_href(&entry.id)>
            <img class="blog-card__thumb" src=entry.image alt=entry.title.clone()/>
            <div class="blog-card__body">
                <h3 class="blog-card__kind">{kind.label()}</h3>
                <p class="blog-card__title">{entry.title}</p>
            </div>
        </a>
    }
}
