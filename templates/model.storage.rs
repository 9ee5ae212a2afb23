//! Row mapping of %%GRAVE%%{{ name_upper_first }}%%GRAVE%% for table %%GRAVE%%{{ table_name }}%%GRAVE%%.

#[cfg(test)]
mod concrete_test;

use super::Concrete{{ name_upper_first }};

pub const TABLE: &str = "{{ table_name }}";

/// Every column, in declaration order, %%GRAVE%%id%%GRAVE%% first.
pub const COLUMNS: &[&str] = &[
    "id",
{% for f in fields %}
    "{{ f.name_all_lower }}",
{% endfor %}
];

#[derive(Debug, Clone, PartialEq, ::sqlx::FromRow)]
pub struct {{ name_upper_first }}Row {
    pub id: i64,
{% for f in fields %}
{% if f.mandatory %}
    pub {{ f.name_all_lower }}: {{ f.storage_type }},
{% else %}
    pub {{ f.name_all_lower }}: Option<{{ f.storage_type }}>,
{% endif %}
{% endfor %}
}

impl From<{{ name_upper_first }}Row> for Concrete{{ name_upper_first }} {
    fn from(row: {{ name_upper_first }}Row) -> Self {
        Self {
            id: row.id,
{% for f in fields %}
{% if f.storage_type != f.host_type %}
{% if f.mandatory %}
            {{ f.name_all_lower }}: {{ f.host_type }}::try_from(row.{{ f.name_all_lower }}).unwrap_or_default(),
{% else %}
            {{ f.name_all_lower }}: row
                .{{ f.name_all_lower }}
                .and_then(|v| {{ f.host_type }}::try_from(v).ok())
                .unwrap_or_default(),
{% endif %}
{% elif f.mandatory %}
            {{ f.name_all_lower }}: row.{{ f.name_all_lower }},
{% else %}
            {{ f.name_all_lower }}: row.{{ f.name_all_lower }}.unwrap_or_default(),
{% endif %}
{% endfor %}
        }
    }
}
