// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<&Path>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            insert_bundle(&mut bundles, filename, source);
        }

        if let Some(dir) = i18n_dir {
            load_directory(&mut bundles, dir);
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Formats `key` with a single numeric argument, so plural selectors
    /// match on the number.
    #[must_use]
    pub fn tr_with_count(&self, key: &str, name: &str, count: usize) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set(name, FluentValue::from(count));
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .filter(|bundle| bundle.has_message(key))
            .or_else(|| self.bundles.get(&DEFAULT_LOCALE));

        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Parses `source` as the bundle for the locale named by `filename`
/// (`<locale>.ftl`). Invalid files are logged and skipped.
fn insert_bundle(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    filename: &str,
    source: String,
) {
    let Some(locale) = filename
        .strip_suffix(".ftl")
        .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
    else {
        return;
    };

    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            log::warn!("skipping {filename}: {} syntax error(s)", errors.len());
            return;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Placeables are rendered into plain labels, isolation marks would show.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::warn!("skipping {filename}: {} duplicate message(s)", errors.len());
        return;
    }
    bundles.insert(locale, bundle);
}

fn load_directory(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    dir: &Path,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot read i18n directory {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(source) => insert_bundle(bundles, filename, source),
            Err(err) => log::warn!("cannot read {}: {err}", path.display()),
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(pick)
        .or_else(|| config.general.language.as_deref().and_then(pick))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(pick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_ignores_unknown_cli_language() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("fr")));
    }

    #[test]
    fn tr_returns_translation_or_missing_marker() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("tab-create"), "Create");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_substitutes_placeables() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let text = i18n.tr_with_args("backend-online", &[("device", "cuda")]);
        assert_eq!(text, "Model ready on cuda");
    }

    #[test]
    fn numeric_arguments_select_plural_forms() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr_with_count("gallery-count", "count", 1), "One image");
        assert_eq!(i18n.tr_with_count("gallery-count", "count", 4), "4 images");
    }

    #[test]
    fn string_arguments_are_not_reformatted_as_numbers() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        for filename in ["2024.10", "1e3", "nan"] {
            let text = i18n.tr_with_args("notification-download-success", &[("filename", filename)]);
            assert!(text.contains(filename), "{text} lost {filename}");
        }
    }

    #[test]
    fn french_locale_translates() {
        let i18n = I18n::new(Some("fr".to_string()), None, &Config::default());
        assert_eq!(i18n.current_locale(), &langid!("fr"));
        assert_eq!(i18n.tr("tab-create"), "Créer");
    }

    #[test]
    fn external_directory_adds_locale() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("de.ftl"), "tab-create = Erstellen\n")
            .expect("failed to write ftl");

        let i18n = I18n::new(Some("de".to_string()), Some(temp_dir.path()), &Config::default());
        assert_eq!(i18n.current_locale(), &langid!("de"));
        assert_eq!(i18n.tr("tab-create"), "Erstellen");
        // Keys missing from the external file fall back to en-US.
        assert_eq!(i18n.tr("tab-gallery"), "Gallery");
    }
}
