//! Success stories page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sherise_core::Route;

use crate::content::Story;
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryQuery {
    /// Story to open in full. Kept as text so `?story=abc` shows the list.
    pub story: Option<String>,
}

impl StoryQuery {
    fn story_id(&self) -> Option<u32> {
        self.story.as_deref()?.trim().parse().ok()
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "stories.html")]
pub struct StoriesTemplate {
    pub ctx: PageContext,
    pub stories: Vec<Story>,
    pub selected: Option<Story>,
}

/// Display the stories, with one opened in full if `?story=` names it.
/// Unknown ids show the plain list.
pub async fn show(
    store: SessionStore,
    State(state): State<AppState>,
    Query(query): Query<StoryQuery>,
) -> impl IntoResponse {
    let content = state.content();

    StoriesTemplate {
        ctx: PageContext::new(&store, Route::Stories),
        stories: content.stories().to_vec(),
        selected: query.story_id().and_then(|id| content.story(id)).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(story: Option<&str>) -> StoryQuery {
        StoryQuery {
            story: story.map(str::to_string),
        }
    }

    #[test]
    fn test_story_id_parses_leniently() {
        assert_eq!(query(Some("2")).story_id(), Some(2));
        assert_eq!(query(Some("abc")).story_id(), None);
        assert_eq!(query(Some("")).story_id(), None);
        assert_eq!(query(None).story_id(), None);
    }
}
