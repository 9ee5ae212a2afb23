use serde::Serialize;

use super::{{ name_upper_first }}ListForm;
use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Concrete{{ name_upper_first }}ListForm {
    pub items: Vec<Concrete{{ name_upper_first }}>,
}

impl Concrete{{ name_upper_first }}ListForm {
    pub fn new(items: Vec<Concrete{{ name_upper_first }}>) -> Self {
        Self { items }
    }
}

impl {{ name_upper_first }}ListForm for Concrete{{ name_upper_first }}ListForm {
    fn items(&self) -> &[Concrete{{ name_upper_first }}] {
        &self.items
    }
}
