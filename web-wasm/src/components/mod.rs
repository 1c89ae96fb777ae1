pub mod header;
pub mod item_form;
pub mod cart_table;
pub mod shipping_panel;
pub mod totals_panel;
