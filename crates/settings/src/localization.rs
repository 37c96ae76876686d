use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::json;

/// Two-level translation table: language code, then message key.
/// （兩層翻譯表：先語言代碼，再訊息鍵。）
pub type TranslationTable = BTreeMap<String, BTreeMap<String, String>>;

/// Language-scoped string lookup with identity fallback.
/// （依語言查詢字串，查無時回傳鍵本身。）
///
/// A language is *defined* when its message map is non-empty. The active
/// language is always a defined one, or the empty string when none could be
/// applied. The table itself never changes after construction.
#[derive(Debug, Clone)]
pub struct LocalizationManager {
    translations: TranslationTable,
    defined_langs: Vec<String>,
    current_lang: String,
}

impl LocalizationManager {
    /// Loads the table from `path` when given, substituting `defaults` on any
    /// read or parse failure; with no path, `defaults` is used directly.
    /// `lang` goes through the same silent-rejection rule as
    /// [`set_active_language`](Self::set_active_language).
    /// （從檔案載入翻譯表，失敗時改用預設值；語言套用同靜默拒絕規則。）
    pub fn new(path: Option<&Path>, defaults: TranslationTable, lang: &str) -> Self {
        let translations = match path {
            Some(file) => match json::read(file) {
                Ok(table) => table,
                Err(err) => {
                    warn!("could not load translations, using defaults: {err}");
                    defaults
                }
            },
            None => defaults,
        };
        let defined_langs = translations
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(code, _)| code.clone())
            .collect();
        let mut manager = Self {
            translations,
            defined_langs,
            current_lang: String::new(),
        };
        manager.set_active_language(lang);
        manager
    }

    /// Retrieves the active language's text for `key`, or `key` itself when
    /// the language is unset or the key is missing. Total by design: the UI
    /// must always have something to render.
    /// （取得目前語言的字串；缺少時回傳鍵本身，永不失敗。）
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(&self.current_lang)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Switches the active language; undefined codes are ignored and leave
    /// the previous language in place. Returns whether the code was applied.
    /// （切換語言；未定義的代碼直接忽略並保留原語言。）
    pub fn set_active_language(&mut self, lang: &str) -> bool {
        if self.defined_langs.iter().any(|code| code == lang) {
            self.current_lang = lang.to_string();
            true
        } else {
            false
        }
    }

    /// Returns the active language code, empty when none was ever applied.
    /// （回傳目前語言代碼；從未成功設定時為空字串。）
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Language codes whose message map is non-empty, in table order.
    /// （訊息非空的語言代碼，依表內順序。）
    pub fn defined_languages(&self) -> &[String] {
        &self.defined_langs
    }

    /// Number of defined languages.
    /// （已定義語言的數量。）
    pub fn language_count(&self) -> usize {
        self.defined_langs.len()
    }
}
