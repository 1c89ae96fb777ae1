//! 商品入力フォームコンポーネント

use leptos::prelude::*;
use cart_form_common::FormField;
use crate::app::WebCart;

/// 確定ボタンの表示
pub fn commit_label(editing: bool) -> &'static str {
    if editing {
        "Update Item"
    } else {
        "Add to Cart"
    }
}

fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Name => "text",
        FormField::Price | FormField::Quantity => "number",
    }
}

#[component]
pub fn ItemForm<FC, FX>(
    cart: RwSignal<WebCart>,
    form_error: ReadSignal<Option<String>>,
    on_commit: FC,
    on_cancel_edit: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_editing = move || cart.with(|c| c.is_editing());

    view! {
        <div class="sub-container">
            {FormField::ALL
                .into_iter()
                .map(|field| view! { <FormInput cart=cart field=field /> })
                .collect_view()}

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_commit = on_commit.clone();
                        move |_| on_commit(())
                    }
                >
                    {move || commit_label(is_editing())}
                </button>
                <Show when=is_editing>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_cancel_edit = on_cancel_edit.clone();
                            move |_| on_cancel_edit(())
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>

            {move || form_error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </div>
    }
}

#[component]
fn FormInput(cart: RwSignal<WebCart>, field: FormField) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.input_id()>{field.label()}</label>
            <input
                type=input_type(field)
                id=field.input_id()
                prop:value=move || cart.with(|c| c.form().field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    cart.update(|c| c.set_field(field, value));
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_label() {
        assert_eq!(commit_label(false), "Add to Cart");
        assert_eq!(commit_label(true), "Update Item");
    }

    #[test]
    fn test_numeric_fields_use_number_inputs() {
        assert_eq!(input_type(FormField::Name), "text");
        assert_eq!(input_type(FormField::Price), "number");
        assert_eq!(input_type(FormField::Quantity), "number");
    }
}
