//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::blog::{BlogSource, StaticBlogRepository};
use crate::pages::{blog::BlogPage, blog_detail::BlogDetailPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the blog repository and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(load_blogs());

    view! {
        <Stylesheet id="leptos" href="/pkg/removals-site.css"/>
        <Title text="Removals | Moving made simple"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogDetailPage/>
            </Routes>
        </Router>
    }
}

fn load_blogs() -> BlogSource {
    match StaticBlogRepository::bundled() {
        Ok(repository) => BlogSource::new(repository),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("bundled blog content is malformed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            BlogSource::new(StaticBlogRepository::default())
        }
    }
}
