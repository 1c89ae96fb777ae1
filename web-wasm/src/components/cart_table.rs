//! カート明細テーブルコンポーネント

use leptos::prelude::*;
use cart_form_common::{format_currency, ItemId, LineItem};
use crate::app::WebCart;

/// 表示用の1行
///
/// 内容が変われば別キーになり、行が再描画される。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartRow {
    pub id: ItemId,
    pub number: usize,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub total: String,
}

pub fn cart_rows(items: &[LineItem]) -> Vec<CartRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CartRow {
            id: item.id,
            number: index + 1,
            name: item.name.clone(),
            price: format_currency(item.price),
            quantity: item.quantity,
            total: format_currency(item.line_total()),
        })
        .collect()
}

#[component]
pub fn CartTable<FE, FD, FC>(
    cart: RwSignal<WebCart>,
    on_edit: FE,
    on_delete: FD,
    on_clear: FC,
) -> impl IntoView
where
    FE: Fn(ItemId) + 'static + Clone + Send + Sync,
    FD: Fn(ItemId) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="cart-actions">
            <button
                class="btn btn-dark btn-small"
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "Clear"
            </button>
        </div>
        <table class="cart-table">
            <thead>
                <tr>
                    <th>"Item #"</th>
                    <th>"Item Name"</th>
                    <th>"Price"</th>
                    <th>"Quantity"</th>
                    <th>"Total"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || cart.with(|c| cart_rows(c.items()))
                    key=|row| row.clone()
                    children=move |row| {
                        let id = row.id;
                        let on_edit = on_edit.clone();
                        let on_delete = on_delete.clone();
                        view! {
                            <tr class:editing=move || cart.with(|c| c.edit_target() == Some(id))>
                                <td>{row.number}</td>
                                <td>{row.name}</td>
                                <td>{row.price}</td>
                                <td>{row.quantity}</td>
                                <td>{row.total}</td>
                                <td class="text-center">
                                    <button
                                        class="btn btn-success btn-small"
                                        on:click=move |_| on_edit(id)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-danger btn-small"
                                        on:click=move |_| on_delete(id)
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
