use crate::error::{CartFormError, Result};
use cart_form_common::{CART_STORAGE_KEY, DEFAULT_CHECKOUT_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 保存先ファイルを上書きする環境変数
pub const STORAGE_ENV: &str = "CART_FORM_STORAGE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_file: Option<PathBuf>,
    pub storage_key: String,
    pub checkout_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_file: None,
            storage_key: CART_STORAGE_KEY.into(),
            checkout_url: DEFAULT_CHECKOUT_URL.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読込に失敗した場合は警告を出して既定値を使う
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "設定ファイルの場所が分からないため既定値を使用します");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "設定を読み込めないため既定値を使用します");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CartFormError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cart-form"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// カート保存先を決定
    ///
    /// 優先順: 引数 > 環境変数 > 設定ファイル > 既定パス
    pub fn storage_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(STORAGE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = &self.storage_file {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("storage.json"))
    }

    pub fn set_checkout_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(CartFormError::Config("チェックアウトURLが空です".into()));
        }
        self.checkout_url = url;
        self.save()
    }

    pub fn set_storage_file(&mut self, path: PathBuf) -> Result<()> {
        self.storage_file = Some(path);
        self.save()
    }
}
