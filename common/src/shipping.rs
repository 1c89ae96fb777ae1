//! 配送先の町と送料テーブル

use std::fmt;
use std::str::FromStr;

/// 配送先の町
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Town {
    Tubigon,
    Calape,
    Tagbilaran,
    Luay,
}

impl Town {
    /// 選択肢の表示順
    pub const ALL: [Town; 4] = [Town::Tubigon, Town::Calape, Town::Tagbilaran, Town::Luay];

    pub fn name(&self) -> &'static str {
        match self {
            Town::Tubigon => "Tubigon",
            Town::Calape => "Calape",
            Town::Tagbilaran => "Tagbilaran",
            Town::Luay => "Luay",
        }
    }

    /// 固定送料
    pub fn fee(&self) -> f64 {
        match self {
            Town::Tubigon => 30.0,
            Town::Calape => 50.0,
            Town::Tagbilaran => 80.0,
            Town::Luay => 120.0,
        }
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Town {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Town::ALL
            .into_iter()
            .find(|town| town.name() == s)
            .ok_or_else(|| format!("Unknown town: {}. Use {}", s, town_names().join(", ")))
    }
}

/// 未選択なら送料0
pub fn shipping_fee(town: Option<Town>) -> f64 {
    town.map_or(0.0, |t| t.fee())
}

pub fn town_names() -> Vec<&'static str> {
    Town::ALL.iter().map(Town::name).collect()
}
