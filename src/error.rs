use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartFormError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("行が見つかりません: {0}（`cart-form list` で行番号を確認してください）")]
    RowNotFound(usize),

    #[error("入力エラー: {0}")]
    Form(#[from] cart_form_common::FormError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error(transparent)]
    Common(#[from] cart_form_common::Error),
}

pub type Result<T> = std::result::Result<T, CartFormError>;
