//! ゲームごとのユーザー設定

use std::collections::BTreeMap;

/// 設定のキー・値マップ
pub type SettingsMap = BTreeMap<String, String>;

/// ゲームエントリが所有する設定
///
/// 単体では同期しない。アクセスはすべてゲームテーブルのロックの内側で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSettings {
    data: SettingsMap,
}

impl GameSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全設定のコピー
    pub fn all(&self) -> SettingsMap {
        self.data.clone()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// 全設定を `data` で置き換える
    pub fn replace(&mut self, data: SettingsMap) {
        self.data = data;
    }
}

impl From<SettingsMap> for GameSettings {
    fn from(data: SettingsMap) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_setting() {
        // テスト項目: 設定値を追加して取得できる
        // given (前提条件):
        let mut settings = GameSettings::new();

        // when (操作):
        settings.set("master_type", "q3m");

        // then (期待する結果):
        assert_eq!(settings.get("master_type"), Some("q3m"));
        assert_eq!(settings.get("missing"), None);
        assert_eq!(settings.all().len(), 1);
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        // テスト項目: 同じキーへの設定は上書きされ、キーは一意のまま
        // given (前提条件):
        let mut settings = GameSettings::new();
        settings.set("master_servers", "master.example.org");

        // when (操作):
        settings.set("master_servers", "master.quake3arena.com");

        // then (期待する結果):
        assert_eq!(settings.all().len(), 1);
        assert_eq!(settings.get("master_servers"), Some("master.quake3arena.com"));
    }

    #[test]
    fn test_remove_and_clear() {
        // テスト項目: 個別削除と全削除ができる
        // given (前提条件):
        let mut settings = GameSettings::new();
        settings.set("a", "1");
        settings.set("b", "2");
        settings.set("c", "3");

        // when (操作):
        settings.remove("a");
        settings.remove("not-there");

        // then (期待する結果):
        let keys: Vec<String> = settings.all().into_keys().collect();
        assert_eq!(keys, vec!["b".to_string(), "c".to_string()]);

        // when (操作):
        settings.clear();

        // then (期待する結果):
        assert!(settings.all().is_empty());
    }

    #[test]
    fn test_replace_discards_previous_keys() {
        // テスト項目: replace は既存の設定を捨てて新しい設定だけを残す
        // given (前提条件):
        let mut settings = GameSettings::new();
        settings.set("old", "1");

        // when (操作):
        settings.replace(SettingsMap::from([("new".to_string(), "2".to_string())]));

        // then (期待する結果):
        assert_eq!(settings.get("old"), None);
        assert_eq!(settings.get("new"), Some("2"));
    }

    #[test]
    fn test_all_returns_independent_copy() {
        // テスト項目: all() が返すマップは元の設定から独立している
        // given (前提条件):
        let mut settings = GameSettings::new();
        settings.set("a", "1");
        let copy = settings.all();

        // when (操作):
        settings.set("a", "2");

        // then (期待する結果):
        assert_eq!(copy.get("a").map(String::as_str), Some("1"));
    }
}
