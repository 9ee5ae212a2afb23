//! Forms backing the %%GRAVE%%{{ name_upper_first }}%%GRAVE%% pages.

mod concrete_list_form;
mod concrete_single_item_form;
#[cfg(test)]
mod concrete_single_item_form_test;
mod list_form;
mod single_item_form;

pub use concrete_list_form::Concrete{{ name_upper_first }}ListForm;
pub use concrete_single_item_form::Concrete{{ name_upper_first }}SingleItemForm;
pub use list_form::{{ name_upper_first }}ListForm;
pub use single_item_form::{{ name_upper_first }}SingleItemForm;
