use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};

/// Listing of every %%GRAVE%%{{ name_upper_first }}%%GRAVE%%.
pub trait {{ name_upper_first }}ListForm {
    fn items(&self) -> &[Concrete{{ name_upper_first }}];

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
