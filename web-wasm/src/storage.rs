//! localStorageによるカート保存

use cart_form_common::{Error, KeyValueStore, Result};
use web_sys::Storage;

/// ブラウザのlocalStorage
///
/// 利用できない環境（プライベートモード等）では読込・書込ともエラーを返し、
/// コントローラ側で警告ログを出して続行する。`gloo::storage::LocalStorage::raw()`
/// はこの場合panicするため、`web_sys` から直接取得する。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage> {
        let window =
            web_sys::window().ok_or_else(|| Error::Storage("window unavailable".to_string()))?;
        window
            .local_storage()
            .map_err(|e| Error::Storage(format!("localStorage error: {:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage not available".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("getItem({}) failed: {:?}", key, e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("setItem({}) failed: {:?}", key, e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("removeItem({}) failed: {:?}", key, e)))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use cart_form_common::{CartController, FormField};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "cartItems-test";

    #[wasm_bindgen_test]
    fn wasm_local_storage_round_trip() {
        let mut store = LocalStorageStore;
        store.save(TEST_KEY, "[]").expect("save failed");
        assert_eq!(store.load(TEST_KEY).expect("load failed"), Some("[]".to_string()));

        store.remove(TEST_KEY).expect("remove failed");
        assert_eq!(store.load(TEST_KEY).expect("load failed"), None);
    }

    #[wasm_bindgen_test]
    fn wasm_controller_reloads_from_local_storage() {
        let mut cart = CartController::with_key(LocalStorageStore, TEST_KEY);
        cart.clear();
        cart.set_field(FormField::Name, "Rice");
        cart.set_field(FormField::Price, "50");
        cart.set_field(FormField::Quantity, "2");
        cart.commit().expect("commit failed");

        let reloaded = CartController::with_key(LocalStorageStore, TEST_KEY);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.items()[0].name, "Rice");

        let mut reloaded = reloaded;
        reloaded.clear();
        assert_eq!(LocalStorageStore.load(TEST_KEY).expect("load failed"), None);
    }

    #[wasm_bindgen_test]
    fn wasm_malformed_record_starts_empty() {
        let mut store = LocalStorageStore;
        store.save(TEST_KEY, "{broken").expect("save failed");

        let mut cart = CartController::with_key(LocalStorageStore, TEST_KEY);
        assert!(cart.is_empty());

        cart.set_field(FormField::Name, "Rice");
        cart.set_field(FormField::Price, "50");
        cart.set_field(FormField::Quantity, "2");
        cart.commit().expect("commit failed");
        assert_eq!(CartController::with_key(LocalStorageStore, TEST_KEY).len(), 1);

        cart.clear();
    }
}
