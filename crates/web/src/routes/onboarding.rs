//! Onboarding wizard.
//!
//! Three steps, one per request: choose a language, pick interests, confirm.
//! Ticked interests are kept in the session as a draft until the last step
//! hands them to [`sherise_core::Store::complete_onboarding`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use sherise_core::{LanguageCode, Route, SUPPORTED_LANGUAGES, i18n};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{SessionStore, keys};
use crate::routes::PageContext;

/// Interests offered during onboarding: `(tag, label key)`.
pub const INTERESTS: [(&str, &str); 5] = [
    ("health", "interestHealth"),
    ("career", "interestCareer"),
    ("safety", "interestSafety"),
    ("finance", "interestFinance"),
    ("community", "interestCommunity"),
];

/// Translation key for an interest tag, if it is one of [`INTERESTS`].
#[must_use]
pub fn interest_label_key(tag: &str) -> Option<&'static str> {
    INTERESTS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, key)| *key)
}

const LAST_STEP: u8 = 3;

// =============================================================================
// Form Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct StepQuery {
    pub step: Option<String>,
}

impl StepQuery {
    /// Requested step, clamped to `1..=3`. Anything unparseable is step 1.
    fn step(&self) -> u8 {
        self.step
            .as_deref()
            .and_then(|step| step.trim().parse::<u8>().ok())
            .unwrap_or(1)
            .clamp(1, LAST_STEP)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingAction {
    Language,
    Toggle,
    Complete,
}

#[derive(Debug, Deserialize)]
pub struct OnboardingForm {
    pub action: OnboardingAction,
    pub language: Option<String>,
    pub interest: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// A selectable option on the wizard.
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Onboarding page template.
#[derive(Template, WebTemplate)]
#[template(path = "onboarding.html")]
pub struct OnboardingTemplate {
    pub ctx: PageContext,
    pub step: u8,
    pub languages: Vec<Choice>,
    /// Interests with `label` holding the translation key.
    pub interests: Vec<Choice>,
    /// Translation keys of the ticked interests, in order.
    pub selected_keys: Vec<&'static str>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display a wizard step.
pub async fn show(
    store: SessionStore,
    Query(query): Query<StepQuery>,
) -> Result<impl IntoResponse> {
    let draft: Vec<String> = store.page_state(keys::ONBOARDING_DRAFT).await?;
    let current = store.language().as_str();

    let languages = SUPPORTED_LANGUAGES
        .into_iter()
        .map(|(code, name)| Choice {
            value: code,
            label: name,
            selected: code == current,
        })
        .collect();

    let interests = INTERESTS
        .into_iter()
        .map(|(tag, key)| Choice {
            value: tag,
            label: key,
            selected: draft.iter().any(|d| d == tag),
        })
        .collect();

    let selected_keys = draft
        .iter()
        .filter_map(|tag| interest_label_key(tag))
        .collect();

    Ok(OnboardingTemplate {
        ctx: PageContext::new(&store, Route::Onboarding),
        step: query.step(),
        languages,
        interests,
        selected_keys,
    })
}

/// Apply a wizard action and move to the next step.
#[instrument(skip_all, fields(action = ?form.action))]
pub async fn update(
    mut store: SessionStore,
    Form(form): Form<OnboardingForm>,
) -> Result<Redirect> {
    match form.action {
        OnboardingAction::Language => {
            let language = parse_supported_language(form.language.as_deref())?;
            store.set_language(language);
            store.save().await?;
            Ok(Redirect::to("/onboarding?step=2"))
        }
        OnboardingAction::Toggle => {
            let tag = form.interest.as_deref().unwrap_or_default();
            if interest_label_key(tag).is_none() {
                return Err(AppError::BadRequest(format!("unknown interest '{tag}'")));
            }
            let mut draft: Vec<String> = store.page_state(keys::ONBOARDING_DRAFT).await?;
            toggle(&mut draft, tag);
            store.set_page_state(keys::ONBOARDING_DRAFT, &draft).await?;
            Ok(Redirect::to("/onboarding?step=2"))
        }
        OnboardingAction::Complete => {
            let draft: Vec<String> = store.page_state(keys::ONBOARDING_DRAFT).await?;
            store.complete_onboarding(&draft);
            if !store.has_completed_onboarding() {
                return Ok(Redirect::to(Route::Login.path()));
            }
            store.save().await?;
            store.set_page_state(keys::ONBOARDING_DRAFT, &Vec::<String>::new()).await?;

            tracing::info!(interests = ?draft, "Onboarding completed");
            add_breadcrumb("onboarding", "Completed onboarding", None);
            Ok(Redirect::to(Route::Dashboard.path()))
        }
    }
}

/// Parse a language code that has a translation table.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for missing, malformed or unsupported codes.
pub fn parse_supported_language(value: Option<&str>) -> Result<LanguageCode> {
    let code = value
        .unwrap_or_default()
        .parse::<LanguageCode>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if i18n::is_supported(code.as_str()) {
        Ok(code)
    } else {
        Err(AppError::BadRequest(format!("unsupported language '{code}'")))
    }
}

/// Add `tag` if absent, remove it if present.
fn toggle(draft: &mut Vec<String>, tag: &str) {
    if let Some(pos) = draft.iter().position(|d| d == tag) {
        draft.remove(pos);
    } else {
        draft.push(tag.to_string());
    }
}
