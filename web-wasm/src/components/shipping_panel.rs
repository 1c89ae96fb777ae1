//! 配送先・支払方法の選択コンポーネント

use leptos::prelude::*;
use cart_form_common::{PaymentMethod, Town};
use crate::app::WebCart;

#[component]
pub fn ShippingPanel(cart: RwSignal<WebCart>) -> impl IntoView {
    view! {
        <div class="shipping-panel">
            <div class="form-group">
                <label for="drpTown">"Town"</label>
                <select
                    id="drpTown"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        // 未選択（空文字）は直前の選択を維持
                        cart.update(|c| {
                            c.select_town(&value);
                        });
                    }
                >
                    <option value="" selected=move || cart.with(|c| c.town().is_none())>
                        "Select town"
                    </option>
                    {Town::ALL
                        .into_iter()
                        .map(|town| view! {
                            <option
                                value=town.name()
                                selected=move || cart.with(|c| c.town() == Some(town))
                            >
                                {town.name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="drpPayment">"Payment Method"</label>
                <select
                    id="drpPayment"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        cart.update(|c| {
                            c.select_payment(&value);
                        });
                    }
                >
                    <option value="" selected=move || cart.with(|c| c.payment().is_none())>
                        "Select payment"
                    </option>
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|method| view! {
                            <option
                                value=method.label()
                                selected=move || cart.with(|c| c.payment() == Some(method))
                            >
                                {method.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
