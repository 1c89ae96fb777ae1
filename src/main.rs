use cart_form::{cli, config, error, ops, render, shop};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // 設定ファイルが壊れていてもカート操作は既定値で続行する
    let config = match cli.command {
        Commands::Config { .. } => Config::load()?,
        _ => Config::load_or_default(),
    };
    let show_config = cli.command.shows_config();

    match cli.command {
        Commands::Add { name, price, quantity } => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            ops::add_item(&mut cart, &name, &price, &quantity)?;
            println!("✔ カートに追加しました\n");
            println!("{}", render::render_cart(cart.items()));
        }

        Commands::Edit { row, name, price, quantity } => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            ops::edit_row(
                &mut cart,
                row,
                name.as_deref(),
                price.as_deref(),
                quantity.as_deref(),
            )?;
            println!("✔ {}行目を更新しました\n", row);
            println!("{}", render::render_cart(cart.items()));
        }

        Commands::Delete { row } => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            let item = ops::delete_row(&mut cart, row)?;
            println!("✔ 削除しました: {}\n", item.name);
            println!("{}", render::render_cart(cart.items()));
        }

        Commands::Clear => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            cart.clear();
            println!("✔ カートを空にしました");
        }

        Commands::List { town } => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            cart.set_town(town);
            println!("{}", render::render_cart(cart.items()));
            if !cart.is_empty() {
                println!("---");
                println!("{}", render::render_totals(&cart.totals(), cart.town()));
            }
        }

        Commands::Checkout { town, payment } => {
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            cart.set_town(town);
            cart.set_payment(payment);
            println!("{}", render::render_cart(cart.items()));
            println!("---");
            println!("{}", render::render_checkout(&cart.checkout(), cart.town()));
        }

        Commands::Shop => {
            println!("🛒 cart-form - 対話モード\n");
            let mut cart = ops::open_cart(&config, cli.storage.as_deref())?;
            shop::run_shop(&mut cart)?;
        }

        Commands::Config { set_checkout_url, set_storage_file, .. } => {
            let mut config = config;

            if let Some(url) = set_checkout_url {
                config.set_checkout_url(url)?;
                println!("✔ チェックアウトURLを設定しました");
            }

            if let Some(path) = set_storage_file {
                config.set_storage_file(path)?;
                println!("✔ 保存ファイルを設定しました");
            }

            if show_config {
                println!("設定:");
                println!("  保存ファイル: {}", config.storage_path(cli.storage.as_deref())?.display());
                println!("  保存キー: {}", config.storage_key);
                println!("  チェックアウトURL: {}", config.checkout_url);
            }
        }
    }

    Ok(())
}
