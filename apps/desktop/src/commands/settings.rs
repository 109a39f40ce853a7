//! Settings commands.

use crate::db::SettingsRepository;
use crate::state::AppState;
use reader_core::{FontSize, ScriptFont, Settings, Theme};
use tracing::info;

use super::CommandError;

/// Apply `change` to a copy of the settings, save it, then commit.
fn update_settings(
    state: &AppState,
    change: impl FnOnce(&mut Settings),
) -> Result<Settings, CommandError> {
    let mut reader = state.reader.lock().expect("reader lock");

    let mut settings = reader.settings.clone();
    change(&mut settings);
    {
        let repo = state.repository.lock().expect("repository lock");
        repo.save_settings(&settings)?;
    }
    reader.settings = settings.clone();

    info!(
        theme = ?settings.theme,
        font_size = ?settings.font_size,
        rtl = settings.is_rtl,
        "saved settings"
    );
    Ok(settings)
}

/// Get display settings.
pub fn get_settings(state: &AppState) -> Result<Settings, CommandError> {
    let reader = state.reader.lock().expect("reader lock");
    Ok(reader.settings.clone())
}

/// Replace all display settings.
pub fn save_settings(settings: Settings, state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, |current| *current = settings)
}

pub fn set_theme(theme: Theme, state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, |s| s.set_theme(theme))
}

pub fn set_font_size(size: FontSize, state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, |s| s.set_font_size(size))
}

pub fn toggle_word_by_word(state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, Settings::toggle_word_by_word)
}

pub fn set_translation_language(
    language: String,
    state: &AppState,
) -> Result<Settings, CommandError> {
    update_settings(state, |s| s.set_translation_language(language))
}

pub fn set_script_font(font: ScriptFont, state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, |s| s.set_script_font(font))
}

pub fn toggle_rtl(state: &AppState) -> Result<Settings, CommandError> {
    update_settings(state, Settings::toggle_rtl)
}
