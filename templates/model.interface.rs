//! %%GRAVE%%{{ name_upper_first }}%%GRAVE%% model, stored in table %%GRAVE%%{{ table_name }}%%GRAVE%%.

mod concrete;
#[cfg(test)]
mod concrete_test;
pub mod sqlx;

pub use concrete::Concrete{{ name_upper_first }};

/// Accessors of one %%GRAVE%%{{ name_upper_first }}%%GRAVE%% record.
pub trait {{ name_upper_first }}: Send + Sync {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
{% for f in fields %}
{% if f.type == "string" %}
    fn {{ f.name_all_lower }}(&self) -> &str;
{% else %}
    fn {{ f.name_all_lower }}(&self) -> {{ f.host_type }};
{% endif %}
    fn set_{{ f.name_all_lower }}(&mut self, value: {{ f.host_type }});
{% endfor %}
}
