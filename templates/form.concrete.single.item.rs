use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{{ name_upper_first }}SingleItemForm;
use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};
{% set ns = namespace(parsed=false) %}
{% for f in fields %}
{% if f.type not in ["string", "bool"] %}
{% set ns.parsed = true %}
{% endif %}
{% endfor %}
{% if ns.parsed %}
use crate::crud::utilities::parse_input;
{% endif %}

/// Raw submitted values, kept as typed so the page can be redisplayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concrete{{ name_upper_first }}SingleItemForm {
    pub id: i64,
{% for f in fields %}
{% if f.type == "bool" %}
    /// Checkbox; present when ticked.
    pub {{ f.name_all_lower }}: Option<String>,
{% else %}
    pub {{ f.name_all_lower }}: String,
{% endif %}
{% endfor %}
    #[serde(skip_deserializing)]
    pub errors: BTreeMap<String, String>,
}

impl Concrete{{ name_upper_first }}SingleItemForm {
    pub fn from_model(model: &Concrete{{ name_upper_first }}) -> Self {
        Self {
            id: model.id,
{% for f in fields %}
{% if f.type == "bool" %}
            {{ f.name_all_lower }}: model.{{ f.name_all_lower }}.then(|| "on".to_string()),
{% else %}
            {{ f.name_all_lower }}: model.{{ f.name_all_lower }}.to_string(),
{% endif %}
{% endfor %}
            errors: BTreeMap::new(),
        }
    }
}

impl {{ name_upper_first }}SingleItemForm for Concrete{{ name_upper_first }}SingleItemForm {
    fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    fn validate(&mut self) -> Option<Concrete{{ name_upper_first }}> {
        self.errors.clear();
        let mut model = Concrete{{ name_upper_first }} {
            id: self.id,
            ..Default::default()
        };
{% for f in fields %}

{% if f.type == "bool" %}
        model.{{ f.name_all_lower }} = self.{{ f.name_all_lower }}.is_some();
{% elif f.type == "string" %}
        model.{{ f.name_all_lower }} = self.{{ f.name_all_lower }}.trim().to_string();
{% if f.mandatory %}
        if model.{{ f.name_all_lower }}.is_empty() {
            self.errors
                .insert("{{ f.name_all_lower }}".to_string(), "{{ f.name_upper_first }} is required".to_string());
        }
{% endif %}
{% else %}
        match parse_input::<{{ f.host_type }}>("{{ f.name_upper_first }}", &self.{{ f.name_all_lower }}) {
            Ok(Some(value)) => model.{{ f.name_all_lower }} = value,
{% if f.mandatory %}
            Ok(None) => {
                self.errors
                    .insert("{{ f.name_all_lower }}".to_string(), "{{ f.name_upper_first }} is required".to_string());
            }
{% else %}
            Ok(None) => {}
{% endif %}
            Err(message) => {
                self.errors.insert("{{ f.name_all_lower }}".to_string(), message);
            }
        }
{% endif %}
{% endfor %}

        self.errors.is_empty().then_some(model)
    }
}
