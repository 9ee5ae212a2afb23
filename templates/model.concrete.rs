use serde::{Deserialize, Serialize};

use super::{{ name_upper_first }};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concrete{{ name_upper_first }} {
    pub id: i64,
{% for f in fields %}
    pub {{ f.name_all_lower }}: {{ f.host_type }},
{% endfor %}
}

impl Concrete{{ name_upper_first }} {
    pub fn new(
{% for f in fields %}
        {{ f.name_all_lower }}: {{ f.host_type }},
{% endfor %}
    ) -> Self {
        Self {
            id: 0,
{% for f in fields %}
            {{ f.name_all_lower }},
{% endfor %}
        }
    }
}

impl {{ name_upper_first }} for Concrete{{ name_upper_first }} {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
{% for f in fields %}

{% if f.type == "string" %}
    fn {{ f.name_all_lower }}(&self) -> &str {
        &self.{{ f.name_all_lower }}
    }
{% else %}
    fn {{ f.name_all_lower }}(&self) -> {{ f.host_type }} {
        self.{{ f.name_all_lower }}
    }
{% endif %}

    fn set_{{ f.name_all_lower }}(&mut self, value: {{ f.host_type }}) {
        self.{{ f.name_all_lower }} = value;
    }
{% endfor %}
}
