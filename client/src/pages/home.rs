//! Landing page.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::blog_section::BlogSection;
use crate::components::get_in_touch::GetInTouchSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Banner
                image="/assets/banner-home.webp"
                title_first="Moving"
                title_second="Made Simple"
                small_text="Local and international removals, storage and logistics handled end to end."
                main_route="Home"
                sub_route="Get in touch"
                sub_route_path="/#get-in-touch"
            />
            <BlogSection/>
            <div id="get-in-touch">
                <GetInTouchSection/>
            </div>
        </main>
    }
}
