//! 表示設定（言語・テーマ）の保存
//!
//! 保存先はキー/値ストアとして抽象化する。
//! ブラウザは localStorage、CLIは設定ファイルが実装する。

use crate::i18n::{Language, Theme};
use std::collections::HashMap;

/// 言語の保存キー（i18next の既定キーと同じ）
pub const LANGUAGE_KEY: &str = "i18nextLng";
/// テーマの保存キー
pub const THEME_KEY: &str = "theme";

/// キー/値ストア
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// メモリ上のストア（テスト・フォールバック用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// 表示設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// ストアから読み込む。壊れた値は既定値に戻す
    pub fn load(store: &impl PreferenceStore) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        let theme = store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self { language, theme }
    }

    pub fn save(&self, store: &mut impl PreferenceStore) {
        store.set(LANGUAGE_KEY, self.language.code());
        store.set(THEME_KEY, self.theme.as_str());
    }

    /// 言語を切り替えて即保存
    pub fn toggle_language(&mut self, store: &mut impl PreferenceStore) -> Language {
        self.language = self.language.toggled();
        self.save(store);
        self.language
    }

    /// テーマを切り替えて即保存
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        self.save(store);
        self.theme
    }
}
