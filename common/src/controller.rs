//! カートコントローラ
//!
//! フォーム・カート・送料・支払方法の状態を一手に持ち、状態遷移を提供する。
//! 変更のたびにストアへ書き込むが、書き込み失敗はログに残して処理を続ける。

use crate::checkout::{CheckoutSummary, PaymentMethod, DEFAULT_CHECKOUT_URL};
use crate::error::FormError;
use crate::form::{FormField, FormState, ItemEntry};
use crate::shipping::{shipping_fee, Town};
use crate::storage::{encode_cart, load_records, KeyValueStore, CART_STORAGE_KEY};
use crate::totals::Totals;
use crate::types::{ItemId, LineItem};

/// 確定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Added(ItemId),
    Updated(ItemId),
}

impl CommitOutcome {
    pub fn id(&self) -> ItemId {
        match self {
            CommitOutcome::Added(id) | CommitOutcome::Updated(id) => *id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CartController<S> {
    store: S,
    storage_key: String,
    checkout_url: String,
    items: Vec<LineItem>,
    next_id: u64,
    form: FormState,
    town: Option<Town>,
    payment: Option<PaymentMethod>,
}

impl<S: KeyValueStore> CartController<S> {
    /// 既定キーで保存済みカートを読み込んで生成
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let mut controller = Self {
            store,
            storage_key,
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            items: Vec::new(),
            next_id: 1,
            form: FormState::default(),
            town: None,
            payment: None,
        };

        let records = load_records(&controller.store, &controller.storage_key);
        for record in records {
            let id = controller.allocate_id();
            controller.items.push(record.into_item(id));
        }
        tracing::debug!(count = controller.items.len(), "cart loaded");
        controller
    }

    pub fn with_checkout_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_url = url.into();
        self
    }

    // ---- 参照 ----

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn edit_target(&self) -> Option<ItemId> {
        self.form.edit_target
    }

    pub fn town(&self) -> Option<Town> {
        self.town
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn shipping_fee(&self) -> f64 {
        shipping_fee(self.town)
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items, self.shipping_fee())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ---- フォーム ----

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// 町名で配送先を選択
    ///
    /// 未知の町名は無視し、直前の選択（と送料）を維持する。
    pub fn select_town(&mut self, name: &str) -> bool {
        match name.parse::<Town>() {
            Ok(town) => {
                self.town = Some(town);
                tracing::debug!(%town, fee = town.fee(), "town selected");
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_town(&mut self, town: Option<Town>) {
        self.town = town;
    }

    pub fn select_payment(&mut self, label: &str) -> bool {
        match label.parse::<PaymentMethod>() {
            Ok(method) => {
                self.payment = Some(method);
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_payment(&mut self, payment: Option<PaymentMethod>) {
        self.payment = payment;
    }

    // ---- 状態遷移 ----

    /// フォーム内容を確定（追加または更新）
    ///
    /// 検証エラー時はカートもフォームも変更しない。
    pub fn commit(&mut self) -> Result<CommitOutcome, FormError> {
        let entry = self.form.parse()?;

        let outcome = match self.form.edit_target.take().and_then(|id| self.position(id)) {
            Some(index) => {
                let item = &mut self.items[index];
                item.name = entry.name;
                item.price = entry.price;
                item.quantity = entry.quantity;
                CommitOutcome::Updated(item.id)
            }
            None => CommitOutcome::Added(self.append(entry)),
        };

        self.form.reset_fields();
        self.persist();
        tracing::debug!(?outcome, count = self.items.len(), "form committed");
        Ok(outcome)
    }

    /// 明細を編集対象としてフォームに読み込む
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item(id).cloned() else {
            return false;
        };
        self.form.load_item(&item);
        true
    }

    pub fn begin_edit_at(&mut self, index: usize) -> bool {
        match self.items.get(index).map(|item| item.id) {
            Some(id) => self.begin_edit(id),
            None => false,
        }
    }

    /// 編集を取りやめ、フォームを空にする
    pub fn cancel_edit(&mut self) {
        self.form.reset_fields();
        self.form.edit_target = None;
    }

    pub fn remove(&mut self, id: ItemId) -> Option<LineItem> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// 行位置で削除。以降の行は1つ前に詰まる。
    pub fn remove_at(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        if self.form.edit_target == Some(removed.id) {
            self.form.edit_target = None;
        }
        self.persist();
        tracing::debug!(id = %removed.id, index, "item removed");
        Some(removed)
    }

    /// カートを空にし、保存データも削除する
    pub fn clear(&mut self) {
        self.items.clear();
        self.form.edit_target = None;
        if let Err(e) = self.store.remove(&self.storage_key) {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to remove stored cart");
        }
        tracing::debug!("cart cleared");
    }

    pub fn checkout(&self) -> CheckoutSummary {
        CheckoutSummary {
            destination: self.checkout_url.clone(),
            totals: self.totals(),
            item_count: self.items.len(),
            payment: self.payment,
        }
    }

    fn append(&mut self, entry: ItemEntry) -> ItemId {
        let id = self.allocate_id();
        self.items.push(LineItem {
            id,
            name: entry.name,
            price: entry.price,
            quantity: entry.quantity,
        });
        id
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn persist(&mut self) {
        let result = encode_cart(&self.items)
            .and_then(|encoded| self.store.save(&self.storage_key, &encoded));
        if let Err(e) = result {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
    }
}
