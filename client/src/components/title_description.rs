//! Section heading with an optional lead paragraph.

use leptos::prelude::*;

#[component]
pub fn TitleDescription(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional)] title_class: &'static str,
    #[prop(optional)] description_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="title-description">
            <h2 class=format!("title-description__title {title_class}")>{title}</h2>
            {description.map(|text| {
                view! {
                    <p class=format!("title-description__text {description_class}")>{text}</p>
                }
            })}
        </div>
    }
}
