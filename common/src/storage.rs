//! 永続化アダプタ
//!
//! カートはキー1つに `[{name, price, quantity}, ...]` のJSONとして保存する。
//! バックエンド（localStorage、ファイル、メモリ）は `KeyValueStore` で差し替える。

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{CartRecord, LineItem};

/// 既定の保存キー
pub const CART_STORAGE_KEY: &str = "cartItems";

/// キー・バリュー型ストア
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// カートをJSON文字列に変換
pub fn encode_cart(items: &[LineItem]) -> Result<String> {
    let records: Vec<CartRecord> = items.iter().map(LineItem::record).collect();
    Ok(serde_json::to_string(&records)?)
}

/// JSON文字列からレコード列を復元
pub fn decode_cart(raw: &str) -> Result<Vec<CartRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// 保存済みカートを読み込む
///
/// 未保存・読込失敗・不正データはいずれも空カートとして扱う。
pub fn load_records<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<CartRecord> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored cart, starting empty");
            return Vec::new();
        }
    };

    match decode_cart(&raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored cart");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    #[test]
    fn test_memory_store_basic() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert!(store.is_empty());
        // 存在しないキーの削除はエラーにならない
        store.remove("k").unwrap();
    }

    #[test]
    fn test_encode_layout() {
        let items = vec![LineItem {
            id: ItemId::new(1),
            name: "Rice".to_string(),
            price: 50.0,
            quantity: 2,
        }];
        let json = encode_cart(&items).expect("エンコード失敗");
        assert_eq!(json, r#"[{"name":"Rice","price":50.0,"quantity":2}]"#);
    }

    #[test]
    fn test_load_records_missing_key() {
        let store = MemoryStore::new();
        assert!(load_records(&store, CART_STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_load_records_malformed() {
        let mut store = MemoryStore::new();
        for bad in ["not json", "{\"name\":\"Rice\"}", "[{\"name\":1}]", ""] {
            store.save(CART_STORAGE_KEY, bad).unwrap();
            assert!(load_records(&store, CART_STORAGE_KEY).is_empty(), "input: {bad}");
        }
    }

    #[test]
    fn test_load_records_valid() {
        let mut store = MemoryStore::new();
        store
            .save(
                CART_STORAGE_KEY,
                r#"[{"name":"Rice","price":50,"quantity":2},{"name":"Egg","price":8.5,"quantity":12}]"#,
            )
            .unwrap();
        let records = load_records(&store, CART_STORAGE_KEY);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Egg");
        assert_eq!(records[1].quantity, 12);
    }
}
