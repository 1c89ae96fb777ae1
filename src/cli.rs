use cart_form_common::{PaymentMethod, Town};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cart-form")]
#[command(about = "買い物カート（商品入力・送料計算・チェックアウト）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カート保存ファイル（省略時は設定/環境変数/既定パス）
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品をカートに追加
    Add {
        /// 商品名
        #[arg(short, long)]
        name: String,

        /// 単価
        #[arg(short, long)]
        price: String,

        /// 数量
        #[arg(short, long)]
        quantity: String,
    },

    /// 行番号を指定して商品を更新（省略した項目は現在値のまま）
    Edit {
        /// 行番号（1始まり）
        #[arg(required = true)]
        row: usize,

        /// 商品名
        #[arg(short, long)]
        name: Option<String>,

        /// 単価
        #[arg(short, long)]
        price: Option<String>,

        /// 数量
        #[arg(short, long)]
        quantity: Option<String>,
    },

    /// 行番号を指定して商品を削除
    Delete {
        /// 行番号（1始まり）
        #[arg(required = true)]
        row: usize,
    },

    /// カートを空にする
    Clear,

    /// カートと合計を表示
    List {
        /// 配送先の町 (Tubigon/Calape/Tagbilaran/Luay)
        #[arg(short, long)]
        town: Option<Town>,
    },

    /// 合計を表示してチェックアウト先を出力
    Checkout {
        /// 配送先の町 (Tubigon/Calape/Tagbilaran/Luay)
        #[arg(short, long)]
        town: Option<Town>,

        /// 支払方法 (gcash/creditcard/cod)
        #[arg(long)]
        payment: Option<PaymentMethod>,
    },

    /// 対話形式でカートを操作
    Shop,

    /// 設定を表示/編集
    Config {
        /// チェックアウトURLを設定
        #[arg(long)]
        set_checkout_url: Option<String>,

        /// カート保存ファイルを設定
        #[arg(long)]
        set_storage_file: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// `config` で設定を表示するか
    ///
    /// 変更項目の指定がなければ `--show` と同じ扱い。
    pub fn shows_config(&self) -> bool {
        match self {
            Commands::Config {
                set_checkout_url,
                set_storage_file,
                show,
            } => *show || (set_checkout_url.is_none() && set_storage_file.is_none()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["cart-form", "add", "-n", "Rice", "-p", "50", "-q", "2"])
            .expect("引数解析失敗");
        match cli.command {
            Commands::Add { name, price, quantity } => {
                assert_eq!(name, "Rice");
                assert_eq!(price, "50");
                assert_eq!(quantity, "2");
            }
            _ => panic!("Addとして解析されるべき"),
        }
    }

    #[test]
    fn test_parse_checkout_town_and_payment() {
        let cli = Cli::try_parse_from([
            "cart-form", "checkout", "--town", "Calape", "--payment", "cod", "--verbose",
        ])
        .expect("引数解析失敗");
        assert!(cli.verbose);
        match cli.command {
            Commands::Checkout { town, payment } => {
                assert_eq!(town, Some(Town::Calape));
                assert_eq!(payment, Some(PaymentMethod::CashOnDelivery));
            }
            _ => panic!("Checkoutとして解析されるべき"),
        }
    }

    #[test]
    fn test_unknown_town_is_rejected() {
        assert!(Cli::try_parse_from(["cart-form", "list", "--town", "Manila"]).is_err());
    }

    #[test]
    fn test_edit_requires_row() {
        assert!(Cli::try_parse_from(["cart-form", "edit"]).is_err());
        let cli = Cli::try_parse_from(["cart-form", "edit", "2", "-q", "5"]).expect("引数解析失敗");
        assert!(matches!(cli.command, Commands::Edit { row: 2, .. }));
    }

    #[test]
    fn test_bare_config_shows_settings() {
        let cli = Cli::try_parse_from(["cart-form", "config"]).expect("引数解析失敗");
        assert!(cli.command.shows_config());

        let cli = Cli::try_parse_from(["cart-form", "config", "--set-checkout-url", "https://a.example"])
            .expect("引数解析失敗");
        assert!(!cli.command.shows_config());

        let cli = Cli::try_parse_from([
            "cart-form", "config", "--set-checkout-url", "https://a.example", "--show",
        ])
        .expect("引数解析失敗");
        assert!(cli.command.shows_config());

        let cli = Cli::try_parse_from(["cart-form", "list"]).expect("引数解析失敗");
        assert!(!cli.command.shows_config());
    }
}
