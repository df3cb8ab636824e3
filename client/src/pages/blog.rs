//! Blog index listing every entry.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::blog_section::FeaturedCard;
use crate::content::blog::BlogSource;

#[component]
pub fn BlogPage() -> impl IntoView {
    let blogs = expect_context::<BlogSource>();
    let entries = blogs.entries().to_vec();

    view! {
        <main class="blog-page">
            <Banner
                image="/assets/banner-blog.webp"
                title_first="Our"
                title_second="Blog"
                main_route="Home"
                sub_route="Blog"
                sub_route_path="/blog"
            />
            {if entries.is_empty() {
                view! { <p class="blog-page__empty">"No posts yet."</p> }.into_any()
            } else {
                view! {
                    <div class="blog-page__grid">
                        {entries.into_iter().map(|entry| view! { <FeaturedCard entry=entry/> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </main>
    }
}
