pub mod catalog;
pub mod contact_form;
pub mod icon;
pub mod price_table;
pub mod template;
pub mod toast;
