//! Community page: topic filter, posts and the new-post form.
//!
//! Seeded posts come from the content store. Posts written in this session
//! are kept in session page state, newest first, and shown ahead of them.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use sherise_core::Route;
use tracing::instrument;

use crate::content::{CommunityPost, Topic};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{SessionStore, keys};
use crate::routes::PageContext;
use crate::state::AppState;

/// Posts kept per session. Older ones are dropped when a new one is written.
pub const MAX_OWN_POSTS: usize = 50;

// =============================================================================
// Form Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct TopicQuery {
    pub topic: Option<String>,
}

impl TopicQuery {
    /// Selected topic. `All`, unknown names and no value mean no filter.
    fn topic(&self) -> Option<Topic> {
        self.topic.as_deref().and_then(|t| t.parse().ok())
    }
}

#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub topic: String,
}

// =============================================================================
// Templates
// =============================================================================

/// A post as listed on the page.
pub struct PostView {
    pub post: CommunityPost,
    pub time_ago: String,
}

/// A topic filter pill.
pub struct TopicFilter {
    pub value: &'static str,
    pub label_key: &'static str,
    pub active: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "community.html")]
pub struct CommunityTemplate {
    pub ctx: PageContext,
    pub topics: Vec<TopicFilter>,
    /// True when no topic filter is applied.
    pub showing_all: bool,
    pub posts: Vec<PostView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display posts, optionally filtered by `?topic=`.
pub async fn show(
    store: SessionStore,
    State(state): State<AppState>,
    Query(query): Query<TopicQuery>,
) -> Result<impl IntoResponse> {
    let selected = query.topic();
    let own: Vec<CommunityPost> = store.page_state(keys::COMMUNITY_POSTS).await?;
    let now = Utc::now();

    let posts = own
        .into_iter()
        .chain(state.content().community_posts().iter().cloned())
        .filter(|post| selected.is_none_or(|topic| post.topic == topic))
        .map(|post| PostView {
            time_ago: post.time_ago(now),
            post,
        })
        .collect();

    let topics = Topic::ALL
        .into_iter()
        .map(|topic| TopicFilter {
            value: topic.as_str(),
            label_key: topic.label_key(),
            active: selected == Some(topic),
        })
        .collect();

    Ok(CommunityTemplate {
        ctx: PageContext::new(&store, Route::Community),
        topics,
        showing_all: selected.is_none(),
        posts,
    })
}

/// Publish a post. Blank titles or content are ignored.
#[instrument(skip_all, fields(topic = %form.topic))]
pub async fn create_post(store: SessionStore, Form(form): Form<NewPostForm>) -> Result<Redirect> {
    let topic: Topic = form
        .topic
        .parse()
        .map_err(|e: crate::content::TopicError| AppError::BadRequest(e.to_string()))?;

    if let Some(post) = CommunityPost::own(&form.title, &form.content, topic, Utc::now()) {
        let mut own: Vec<CommunityPost> = store.page_state(keys::COMMUNITY_POSTS).await?;
        own.insert(0, post);
        own.truncate(MAX_OWN_POSTS);
        store.set_page_state(keys::COMMUNITY_POSTS, &own).await?;

        tracing::info!(posts = own.len(), "Community post created");
        add_breadcrumb("community", "Created post", Some(&[("topic", topic.as_str())]));
    }

    Ok(Redirect::to(Route::Community.path()))
}
