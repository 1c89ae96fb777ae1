//! cart-form: 買い物カートCLI
//!
//! 状態遷移は `cart_form_common::CartController` に任せ、
//! ここではファイル保存・設定・端末表示・対話入力を扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod ops;
pub mod render;
pub mod shop;
pub mod store;
