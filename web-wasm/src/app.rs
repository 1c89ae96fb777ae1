//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use cart_form_common::{CartController, ItemId};
use crate::components::{
    header::Header,
    item_form::ItemForm,
    cart_table::CartTable,
    shipping_panel::ShippingPanel,
    totals_panel::TotalsPanel,
};
use crate::navigation;
use crate::storage::LocalStorageStore;

/// localStorageに保存するカート
pub type WebCart = CartController<LocalStorageStore>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 起動時にlocalStorageから読み込む
    let cart = RwSignal::new(WebCart::new(LocalStorageStore));
    let (form_error, set_form_error) = signal(None::<String>);

    // 追加/更新ハンドラ
    let on_commit = move |_: ()| match cart.try_update(|c| c.commit()) {
        Some(Ok(_)) => set_form_error.set(None),
        Some(Err(e)) => set_form_error.set(Some(e.to_string())),
        None => {}
    };

    let on_cancel_edit = move |_: ()| {
        cart.update(|c| c.cancel_edit());
        set_form_error.set(None);
    };

    let on_edit = move |id: ItemId| {
        cart.update(|c| {
            c.begin_edit(id);
        });
        set_form_error.set(None);
    };

    let on_delete = move |id: ItemId| {
        cart.update(|c| {
            c.remove(id);
        });
    };

    let on_clear = move |_: ()| {
        cart.update(|c| c.clear());
    };

    let on_checkout = move |_: ()| {
        let summary = cart.with_untracked(|c| c.checkout());
        gloo::console::log!(format!(
            "checkout: {} items, grand total {}",
            summary.item_count, summary.totals.grand_total
        ));
        navigation::redirect(&summary.destination);
    };

    view! {
        <div class="main-container">
            <Header />

            <ItemForm
                cart=cart
                form_error=form_error
                on_commit=on_commit
                on_cancel_edit=on_cancel_edit
            />

            <Show when=move || cart.with(|c| !c.is_empty())>
                <div class="item-container">
                    <h3 class="text-center">"CART ITEMS"</h3>
                    <CartTable
                        cart=cart
                        on_edit=on_edit
                        on_delete=on_delete
                        on_clear=on_clear
                    />
                    <ShippingPanel cart=cart />
                    <TotalsPanel cart=cart on_checkout=on_checkout />
                </div>
            </Show>
        </div>
    }
}
