//! Blog index and post detail pages.
//!
//! The detail page reads one post by slug. When the provider has no such post
//! or cannot be reached, the placeholder post with the same slug is shown;
//! otherwise a not-found notice.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::components::content_sections::BlogSection;
use crate::components::hero::Hero;
use crate::components::layout::Layout;
use crate::components::spinner::Spinner;
use crate::net::types::BlogPost;
use crate::util::{format, markdown};

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <Layout>
            <Hero
                title="Travel Stories"
                subtitle="Guides, tips and tales from the road."
                image_url="/images/hero/blog.jpg"
                compact=true
            />
            <BlogSection title="All Articles"/>
        </Layout>
    }
}

/// Loading flag plus the resolved post for the slug being shown.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PostView {
    /// Slug the page is currently showing; responses for any other slug are stale.
    pub slug: String,
    pub loading: bool,
    pub post: Option<BlogPost>,
}

impl PostView {
    pub(crate) fn loading(slug: &str) -> Self {
        Self { slug: slug.to_owned(), loading: true, post: None }
    }

    /// Apply the read for `slug`, preferring the provider's post over the
    /// placeholder with the same slug. A response for another slug is ignored.
    pub(crate) fn resolve(&mut self, slug: &str, fetched: Option<BlogPost>) {
        if self.slug != slug {
            return;
        }
        self.post = fetched.or_else(|| catalog::blog_post(slug));
        self.loading = false;
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let view_state = RwSignal::new(PostView::loading(&slug.get_untracked()));

    Effect::new(move |_| {
        let slug = slug.get();
        view_state.set(PostView::loading(&slug));
        leptos::task::spawn_local(async move {
            let fetched = match crate::net::api::fetch_blog_post(&slug).await {
                Ok(post) => post,
                Err(e) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("blog post {slug} fetch failed: {e}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = e;
                    None
                }
            };
            let _ = view_state.try_update(|view| view.resolve(&slug, fetched));
        });
    });

    view! {
        <Layout>
            <Show when=move || !view_state.with(|v| v.loading) fallback=|| view! { <Spinner/> }>
                {move || match view_state.get().post {
                    Some(post) => view! { <PostBody post=post/> }.into_any(),
                    None => {
                        view! {
                            <Hero
                                title="Article not found"
                                subtitle="This story may have been moved or unpublished."
                                compact=true
                                actions=Box::new(|| view! { <a class="btn" href="/blog">"All articles"</a> }.into_any())
                            />
                        }
                            .into_any()
                    }
                }}
            </Show>
        </Layout>
    }
}

#[component]
fn PostBody(post: BlogPost) -> impl IntoView {
    let body_html = markdown::to_html(&post.content);
    let meta =
        format!("{} · {} · {}", post.category, format::date(post.created_at), format::read_time(post.read_time));

    view! {
        <article class="blog-post">
            <Hero title=post.title.clone() subtitle=meta image_url=post.image_url.clone() compact=true/>
            <div class="blog-post__body">
                <p class="blog-post__excerpt">{post.excerpt.clone()}</p>
                <div class="blog-post__content" inner_html=body_html></div>
                <a class="card__link" href="/blog">"← Back to all articles"</a>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_fetched_post() {
        let mut live = catalog::blog_posts().remove(0);
        live.title = "Live title".into();
        let mut view = PostView::loading(&live.slug);
        view.resolve(&live.slug.clone(), Some(live));
        assert!(!view.loading);
        assert_eq!(view.post.map(|p| p.title), Some("Live title".to_owned()));
    }

    #[test]
    fn resolve_falls_back_to_placeholder_slug() {
        let mut view = PostView::loading("why-shoulder-season-wins");
        view.resolve("why-shoulder-season-wins", None);
        assert_eq!(view.post.map(|p| p.slug), Some("why-shoulder-season-wins".to_owned()));
    }

    #[test]
    fn resolve_unknown_slug_is_not_found() {
        let mut view = PostView::loading("no-such-post");
        view.resolve("no-such-post", None);
        assert!(!view.loading);
        assert!(view.post.is_none());
    }

    #[test]
    fn late_response_for_previous_slug_is_dropped() {
        let previous = catalog::blog_post("carry-on-packing-list");
        let mut view = PostView::loading("why-shoulder-season-wins");

        view.resolve("carry-on-packing-list", previous);
        assert!(view.loading);
        assert!(view.post.is_none());

        view.resolve("why-shoulder-season-wins", None);
        assert!(!view.loading);
        assert_eq!(view.post.map(|p| p.slug), Some("why-shoulder-season-wins".to_owned()));
    }
}
