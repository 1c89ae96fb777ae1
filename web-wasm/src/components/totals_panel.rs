//! 合計表示・チェックアウトコンポーネント

use leptos::prelude::*;
use cart_form_common::format_currency;
use crate::app::WebCart;

#[component]
pub fn TotalsPanel<F>(cart: RwSignal<WebCart>, on_checkout: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    // 表示のたびに明細全体から再計算
    let totals = move || cart.with(|c| c.totals());

    view! {
        <div class="totals-panel">
            <h4>"Subtotal: "{move || format_currency(totals().subtotal)}</h4>
            <h4>"Shipping Fee: "{move || format_currency(totals().shipping_fee)}</h4>
            <h2>"Grand Total: "{move || format_currency(totals().grand_total)}</h2>
            <div class="checkout-actions">
                <button
                    class="btn btn-success"
                    on:click={
                        let on_checkout = on_checkout.clone();
                        move |_| on_checkout(())
                    }
                >
                    "Checkout"
                </button>
            </div>
        </div>
    }
}
