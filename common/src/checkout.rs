//! 支払方法とチェックアウト
//!
//! チェックアウトは固定URLへの遷移のみ。カート内容は送信しない。

use std::fmt;
use std::str::FromStr;

use crate::totals::Totals;

/// 遷移先の既定値
pub const DEFAULT_CHECKOUT_URL: &str = "https://www.facebook.com";

/// 支払方法（選択値は保持するが、金額や遷移先には影響しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    GCash,
    CreditCard,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::GCash,
        PaymentMethod::CreditCard,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "gcash",
            PaymentMethod::CreditCard => "creditcard",
            PaymentMethod::CashOnDelivery => "Cash on delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gcash" => Ok(PaymentMethod::GCash),
            "creditcard" | "credit-card" | "card" => Ok(PaymentMethod::CreditCard),
            "cash on delivery" | "cod" => Ok(PaymentMethod::CashOnDelivery),
            _ => Err(format!(
                "Unknown payment method: {}. Use gcash, creditcard, or cod",
                s
            )),
        }
    }
}

/// チェックアウト時に表示・遷移に使う情報
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub destination: String,
    pub totals: Totals,
    pub item_count: usize,
    pub payment: Option<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_labels_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_payment_aliases() {
        assert_eq!("COD".parse::<PaymentMethod>(), Ok(PaymentMethod::CashOnDelivery));
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::CreditCard));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
