use std::collections::BTreeMap;

use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};

/// Create/edit form of one %%GRAVE%%{{ name_upper_first }}%%GRAVE%%.
pub trait {{ name_upper_first }}SingleItemForm {
    /// Field name to message, for every rejected input.
    fn errors(&self) -> &BTreeMap<String, String>;

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Check the submitted input and build the model from it.
    ///
    /// %%GRAVE%%None%%GRAVE%% when any field is rejected; %%GRAVE%%errors%%GRAVE%% says which.
    fn validate(&mut self) -> Option<Concrete{{ name_upper_first }}>;
}
