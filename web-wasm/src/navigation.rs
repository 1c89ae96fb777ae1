//! チェックアウト遷移

/// 指定URLへページ遷移する。失敗はコンソールに出すのみ。
pub fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        gloo::console::error!("チェックアウト失敗: window unavailable");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        gloo::console::error!(format!("チェックアウト失敗: {:?}", e));
    }
}
