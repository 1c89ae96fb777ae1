//! カート明細の型定義
//!
//! - LineItem: カート内の1行（ItemId付き）
//! - CartRecord: 永続化される形（name/price/quantityのみ）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 明細の識別子
///
/// コントローラ内で単調増加に採番され、永続化はされない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// カート明細
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    /// 単価 × 数量
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// 識別子を除いた永続化用レコード
    pub fn record(&self) -> CartRecord {
        CartRecord {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// 保存データの1要素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartRecord {
    pub fn into_item(self, id: ItemId) -> LineItem {
        LineItem {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem {
            id: ItemId::new(1),
            name: "Rice".to_string(),
            price: 50.0,
            quantity: 2,
        };
        assert_eq!(item.line_total(), 100.0);
    }

    #[test]
    fn test_record_drops_id() {
        let item = LineItem {
            id: ItemId::new(7),
            name: "Sugar".to_string(),
            price: 12.5,
            quantity: 4,
        };
        let json = serde_json::to_string(&item.record()).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"name":"Sugar","price":12.5,"quantity":4}"#);
    }

    #[test]
    fn test_record_deserialize_integer_price() {
        let record: CartRecord =
            serde_json::from_str(r#"{"name":"Rice","price":50,"quantity":2}"#).expect("パース失敗");
        assert_eq!(record.price, 50.0);

        let item = record.into_item(ItemId::new(3));
        assert_eq!(item.id.get(), 3);
        assert_eq!(item.name, "Rice");
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(12).to_string(), "#12");
    }
}
