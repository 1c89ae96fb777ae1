//! CLIから使うカート操作
//!
//! フォームへの入力と確定をまとめて行う薄いラッパー。

use crate::config::Config;
use crate::error::{CartFormError, Result};
use crate::store::FileStore;
use cart_form_common::{CartController, CommitOutcome, FormField, LineItem};
use std::path::Path;

pub type FileCart = CartController<FileStore>;

/// 設定に従ってファイル保存のカートを開く
pub fn open_cart(config: &Config, storage: Option<&Path>) -> Result<FileCart> {
    let path = config.storage_path(storage)?;
    tracing::debug!(path = %path.display(), key = %config.storage_key, "opening cart");
    Ok(CartController::with_key(FileStore::new(path), config.storage_key.as_str())
        .with_checkout_url(config.checkout_url.as_str()))
}

/// 3項目を入力して確定
pub fn add_item(cart: &mut FileCart, name: &str, price: &str, quantity: &str) -> Result<CommitOutcome> {
    cart.set_field(FormField::Name, name);
    cart.set_field(FormField::Price, price);
    cart.set_field(FormField::Quantity, quantity);
    Ok(cart.commit()?)
}

/// 行番号（1始まり）の商品を更新
///
/// 指定のない項目は編集開始時に読み込んだ現在値を使う。
pub fn edit_row(
    cart: &mut FileCart,
    row: usize,
    name: Option<&str>,
    price: Option<&str>,
    quantity: Option<&str>,
) -> Result<CommitOutcome> {
    let index = row_index(cart, row)?;
    cart.begin_edit_at(index);

    for (field, value) in [
        (FormField::Name, name),
        (FormField::Price, price),
        (FormField::Quantity, quantity),
    ] {
        if let Some(value) = value {
            cart.set_field(field, value);
        }
    }

    match cart.commit() {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            cart.cancel_edit();
            Err(e.into())
        }
    }
}

/// 行番号（1始まり）の商品を削除
pub fn delete_row(cart: &mut FileCart, row: usize) -> Result<LineItem> {
    let index = row_index(cart, row)?;
    cart.remove_at(index).ok_or(CartFormError::RowNotFound(row))
}

fn row_index(cart: &FileCart, row: usize) -> Result<usize> {
    if row == 0 || row > cart.len() {
        return Err(CartFormError::RowNotFound(row));
    }
    Ok(row - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_cart(dir: &Path) -> FileCart {
        let config = Config::default();
        open_cart(&config, Some(dir.join("storage.json").as_path())).expect("カートを開けない")
    }

    #[test]
    fn test_edit_row_keeps_unspecified_fields() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut cart = temp_cart(dir.path());
        add_item(&mut cart, "Rice", "50", "2").unwrap();

        let outcome = edit_row(&mut cart, 1, None, None, Some("5")).expect("更新失敗");
        assert!(matches!(outcome, CommitOutcome::Updated(_)));
        assert_eq!(cart.items()[0].name, "Rice");
        assert_eq!(cart.items()[0].price, 50.0);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_edit_row_invalid_value_leaves_item() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut cart = temp_cart(dir.path());
        add_item(&mut cart, "Rice", "50", "2").unwrap();

        let err = edit_row(&mut cart, 1, None, Some("free"), None).unwrap_err();
        assert!(matches!(err, CartFormError::Form(_)));
        assert_eq!(cart.items()[0].price, 50.0);
        assert!(!cart.is_editing());
    }

    #[test]
    fn test_row_bounds() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut cart = temp_cart(dir.path());
        add_item(&mut cart, "Rice", "50", "2").unwrap();

        assert!(matches!(delete_row(&mut cart, 0), Err(CartFormError::RowNotFound(0))));
        assert!(matches!(delete_row(&mut cart, 2), Err(CartFormError::RowNotFound(2))));
        assert!(matches!(
            edit_row(&mut cart, 3, Some("x"), None, None),
            Err(CartFormError::RowNotFound(3))
        ));
        assert_eq!(delete_row(&mut cart, 1).unwrap().name, "Rice");
        assert!(cart.is_empty());
    }
}
