use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["es", "en"];
const FALLBACK_LANG: &str = "es";

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "en" => include_str!("resources/en.ftl"),
        _ => include_str!("resources/es.ftl"),
    }
}

fn parse_lang(lang_code: &str) -> LanguageIdentifier {
    lang_code
        .parse::<LanguageIdentifier>()
        .unwrap_or_default()
}

fn normalize_lang(mut code: String) -> String {
    code.make_ascii_lowercase();
    let sep = code.find(['-', '_']).unwrap_or(code.len());
    let short = &code[..sep];
    if SUPPORTED_LANGS.contains(&short) {
        short.to_string()
    } else {
        FALLBACK_LANG.to_string()
    }
}

fn detect_system_lang() -> String {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(sys)
}

struct LocalizationManager {
    current: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            let mut bundle: Bundle = FluentBundle::new(vec![parse_lang(code)]);
            // Labels are compared and painted verbatim; no bidi isolation marks.
            bundle.set_use_isolating(false);
            match FluentResource::try_new(load_ftl_source(code).to_string()) {
                Ok(res) => {
                    if let Err(errors) = bundle.add_resource(res) {
                        log::error!("FTL resource for {code} has conflicts: {errors:?}");
                    }
                }
                Err((res, errors)) => {
                    log::error!("FTL resource for {code} has syntax errors: {errors:?}");
                    let _ = bundle.add_resource(res);
                }
            }
            bundles.insert(code.to_string(), bundle);
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let short = code.to_ascii_lowercase();
        let short = short.split(['-', '_']).next().unwrap_or_default();
        if !self.bundles.contains_key(short) {
            return Err(LocalizationError::UnsupportedLanguage(code.to_string()));
        }
        self.current = short.to_string();
        Ok(())
    }

    fn set_auto(&mut self) {
        self.current = detect_system_lang();
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current.as_str(), FALLBACK_LANG] {
            let Some(bundle) = self.bundles.get(code) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(id).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let text = bundle.format_pattern(pattern, args, &mut errors).to_string();
            if !errors.is_empty() {
                log::warn!("formatting {id} ({code}) reported: {errors:?}");
            }
            return text;
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Initialize localization on the calling thread. `None` picks the system locale;
/// an unsupported code falls back to Spanish and is reported.
pub fn initialize_localization(preferred_lang: Option<&str>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(code) => {
                let res = mgr.set_current(code);
                if res.is_err() {
                    mgr.current = FALLBACK_LANG.to_string();
                }
                res
            }
            None => {
                mgr.set_auto();
                Ok(())
            }
        }
    })
}

/// Return current language code ("es", "en").
pub fn get_current_language() -> String {
    LOCALIZATION.with(|cell| cell.borrow().current.clone())
}

/// Translate a message without arguments. Returns owned String.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}
