//! ファイル保存のキー・バリューストア
//!
//! ブラウザのlocalStorageの代わりに、`{ key: value }` 形式のJSONファイルを使う。

use cart_form_common::{Error, KeyValueStore};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> cart_form_common::Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Storage(format!("read {}: {}", self.path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// 書込前の読込
    ///
    /// 壊れたJSONは空として上書きする。読めないファイルはエラーのまま返し、
    /// 他のキーを消さない。
    fn read_map_for_write(&self) -> cart_form_common::Result<Map<String, Value>> {
        match self.read_map() {
            Err(Error::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "破損した保存ファイルを上書きします");
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> cart_form_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("create {}: {}", parent.display(), e)))?;
        }
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::Storage(format!("write {}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> cart_form_common::Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn save(&mut self, key: &str, value: &str) -> cart_form_common::Result<()> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> cart_form_common::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
