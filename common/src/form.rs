//! 入力フォームの状態
//!
//! 入力値は生の文字列のまま保持し、確定時に `FormState::parse` で検証する。

use crate::error::FormError;
use crate::types::{ItemId, LineItem};

/// フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Price, FormField::Quantity];

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Item Name",
            FormField::Price => "Item Price",
            FormField::Quantity => "Quantity",
        }
    }

    /// 入力要素のid
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Name => "txtName",
            FormField::Price => "txtPrice",
            FormField::Quantity => "txtQuantity",
        }
    }
}

/// 検証済みの入力値
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEntry {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// フォーム状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub edit_target: Option<ItemId>,
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Quantity => self.quantity = value,
        }
    }

    /// 既存明細を編集用に読み込む
    pub fn load_item(&mut self, item: &LineItem) {
        self.name = item.name.clone();
        self.price = item.price.to_string();
        self.quantity = item.quantity.to_string();
        self.edit_target = Some(item.id);
    }

    /// テキスト欄を空にする（編集対象は残す）
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.price.clear();
        self.quantity.clear();
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// 入力値を検証して明細値に変換
    ///
    /// 空欄チェックを先に全項目で行い、その後に数値チェックを行う。
    pub fn parse(&self) -> Result<ItemEntry, FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }

        Ok(ItemEntry {
            name: self.name.trim().to_string(),
            price: parse_price(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
        })
    }
}

/// 単価: 有限かつ正の数
pub fn parse_price(raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| FormError::InvalidPrice(raw.to_string()))
}

/// 数量: 正の整数
pub fn parse_quantity(raw: &str) -> Result<u32, FormError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| FormError::InvalidQuantity(raw.to_string()))
}
