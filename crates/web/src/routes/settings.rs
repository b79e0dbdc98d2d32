//! Settings page: language, theme and text size.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use sherise_core::{FontSize, Route, SUPPORTED_LANGUAGES};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::routes::onboarding::{Choice, parse_supported_language};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsAction {
    Language,
    DarkMode,
    HighContrast,
    FontSize,
}

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub action: SettingsAction,
    pub language: Option<String>,
    pub font_size: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub languages: Vec<Choice>,
    /// Font sizes with `label` holding the button text.
    pub font_sizes: Vec<Choice>,
    pub dark_mode: bool,
    pub high_contrast: bool,
}

pub async fn show(store: SessionStore) -> impl IntoResponse {
    let current = store.language().as_str();
    let languages = SUPPORTED_LANGUAGES
        .into_iter()
        .map(|(code, name)| Choice {
            value: code,
            label: name,
            selected: code == current,
        })
        .collect();

    let font_sizes = FontSize::ALL
        .into_iter()
        .map(|size| Choice {
            value: size.as_str(),
            label: size.label(),
            selected: size == store.font_size(),
        })
        .collect();

    SettingsTemplate {
        ctx: PageContext::new(&store, Route::Settings),
        languages,
        font_sizes,
        dark_mode: store.dark_mode(),
        high_contrast: store.high_contrast(),
    }
}

/// Change one preference and return to the settings page.
#[instrument(skip_all, fields(action = ?form.action))]
pub async fn update(mut store: SessionStore, Form(form): Form<SettingsForm>) -> Result<Redirect> {
    match form.action {
        SettingsAction::Language => {
            let language = parse_supported_language(form.language.as_deref())?;
            store.set_language(language);
        }
        SettingsAction::DarkMode => store.toggle_dark_mode(),
        SettingsAction::HighContrast => store.toggle_high_contrast(),
        SettingsAction::FontSize => {
            let size: FontSize = form
                .font_size
                .as_deref()
                .unwrap_or_default()
                .parse()
                .map_err(|e: sherise_core::FontSizeError| AppError::BadRequest(e.to_string()))?;
            store.set_font_size(size);
        }
    }
    store.save().await?;

    let classes = store.preferences().root_classes();
    tracing::debug!(%classes, "Preferences updated");
    add_breadcrumb(
        "settings",
        "Changed preference",
        Some(&[("language", store.language().as_str()), ("classes", classes.as_str())]),
    );
    Ok(Redirect::to(Route::Settings.path()))
}
