//! 対話式カート操作モジュール
//!
//! ブラウザ版のフォームと同じ操作（追加・編集・削除・クリア・配送先・支払方法・
//! チェックアウト）を端末で行う。

use crate::error::{CartFormError, Result};
use crate::ops::FileCart;
use crate::render::{render_cart, render_checkout, render_totals};
use cart_form_common::{FormField, PaymentMethod, Town};
use dialoguer::{Confirm, Input, Select};

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    /// 入力して確定（編集中なら更新）
    Commit,
    Edit,
    Delete,
    Clear,
    CancelEdit,
    SelectTown,
    SelectPayment,
    Checkout,
    Quit,
}

impl ShopAction {
    pub fn label(&self, editing: bool) -> &'static str {
        match self {
            ShopAction::Commit if editing => "Update Item",
            ShopAction::Commit => "Add to Cart",
            ShopAction::Edit => "Edit",
            ShopAction::Delete => "Delete",
            ShopAction::Clear => "Clear",
            ShopAction::CancelEdit => "Cancel Edit",
            ShopAction::SelectTown => "Town",
            ShopAction::SelectPayment => "Payment Method",
            ShopAction::Checkout => "Checkout",
            ShopAction::Quit => "Quit",
        }
    }
}

/// 現在の状態で選べる操作
///
/// カートが空なら行操作・配送先・チェックアウトは出さない。
pub fn available_actions(cart: &FileCart) -> Vec<ShopAction> {
    let mut actions = vec![ShopAction::Commit];
    if cart.is_editing() {
        actions.push(ShopAction::CancelEdit);
    }
    if !cart.is_empty() {
        actions.extend([
            ShopAction::Edit,
            ShopAction::Delete,
            ShopAction::Clear,
            ShopAction::SelectTown,
            ShopAction::SelectPayment,
            ShopAction::Checkout,
        ]);
    }
    actions.push(ShopAction::Quit);
    actions
}

/// 対話セッションを実行
pub fn run_shop(cart: &mut FileCart) -> Result<()> {
    loop {
        println!("\n{}", render_cart(cart.items()));
        if !cart.is_empty() {
            println!("---\n{}", render_totals(&cart.totals(), cart.town()));
        }

        let actions = available_actions(cart);
        let labels: Vec<&str> = actions.iter().map(|a| a.label(cart.is_editing())).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(cli_error)?;

        match actions[choice] {
            ShopAction::Commit => prompt_and_commit(cart)?,
            ShopAction::Edit => {
                if let Some(index) = pick_row(cart, "編集する行")? {
                    cart.begin_edit_at(index);
                    prompt_and_commit(cart)?;
                }
            }
            ShopAction::Delete => {
                if let Some(index) = pick_row(cart, "削除する行")? {
                    if let Some(item) = cart.remove_at(index) {
                        println!("✔ 削除しました: {}", item.name);
                    }
                }
            }
            ShopAction::Clear => {
                let confirmed = Confirm::new()
                    .with_prompt("カートを空にしますか？")
                    .default(false)
                    .interact()
                    .map_err(cli_error)?;
                if confirmed {
                    cart.clear();
                    println!("✔ カートを空にしました");
                }
            }
            ShopAction::CancelEdit => cart.cancel_edit(),
            ShopAction::SelectTown => {
                let names: Vec<&str> = Town::ALL.iter().map(Town::name).collect();
                let default = cart
                    .town()
                    .and_then(|t| Town::ALL.iter().position(|x| *x == t))
                    .unwrap_or(0);
                let index = Select::new()
                    .with_prompt("Town")
                    .items(&names)
                    .default(default)
                    .interact()
                    .map_err(cli_error)?;
                cart.select_town(names[index]);
            }
            ShopAction::SelectPayment => {
                let labels: Vec<&str> = PaymentMethod::ALL.iter().map(PaymentMethod::label).collect();
                let index = Select::new()
                    .with_prompt("Payment Method")
                    .items(&labels)
                    .default(0)
                    .interact()
                    .map_err(cli_error)?;
                cart.select_payment(labels[index]);
            }
            ShopAction::Checkout => {
                println!("\n{}", render_checkout(&cart.checkout(), cart.town()));
                return Ok(());
            }
            ShopAction::Quit => return Ok(()),
        }
    }
}

/// 3項目を入力させて確定
///
/// 入力エラー時は内容を表示し、入力値はフォームに残して次回の初期値にする。
fn prompt_and_commit(cart: &mut FileCart) -> Result<()> {
    for field in FormField::ALL {
        let value: String = Input::new()
            .with_prompt(field.label())
            .with_initial_text(cart.form().field(field).to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(cli_error)?;
        cart.set_field(field, value);
    }

    match cart.commit() {
        Ok(outcome) => {
            if let Some(item) = cart.item(outcome.id()) {
                println!("✔ {} x{}", item.name, item.quantity);
            }
        }
        Err(e) => println!("✗ {}", e),
    }
    Ok(())
}

fn pick_row(cart: &FileCart, prompt: &str) -> Result<Option<usize>> {
    if cart.is_empty() {
        return Ok(None);
    }
    let rows: Vec<String> = cart
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.name))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&rows)
        .default(0)
        .interact_opt()
        .map_err(cli_error)?;
    Ok(index)
}

fn cli_error(e: dialoguer::Error) -> CartFormError {
    CartFormError::CliExecution(e.to_string())
}
