{% set ns = namespace(required=false) %}
{% for f in fields %}
{% if f.mandatory and f.type != "bool" %}
{% set ns.required = true %}
{% endif %}
{% endfor %}
use super::{Concrete{{ name_upper_first }}SingleItemForm, {{ name_upper_first }}SingleItemForm};
use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};

fn filled(index: usize) -> Concrete{{ name_upper_first }}SingleItemForm {
    let values = [
        Concrete{{ name_upper_first }}SingleItemForm {
            id: 3,
{% for f in fields %}
{% if f.type == "bool" %}
            {{ f.name_all_lower }}: {% if f.test_values[0] == "true" %}Some("on".to_string()){% else %}None{% endif %},
{% elif f.type == "string" %}
            {{ f.name_all_lower }}: {{ f.test_literals[0] }}.to_string(),
{% else %}
            {{ f.name_all_lower }}: "{{ f.test_values[0] }}".to_string(),
{% endif %}
{% endfor %}
            ..Default::default()
        },
        Concrete{{ name_upper_first }}SingleItemForm {
            id: 3,
{% for f in fields %}
{% if f.type == "bool" %}
            {{ f.name_all_lower }}: {% if f.test_values[1] == "true" %}Some("on".to_string()){% else %}None{% endif %},
{% elif f.type == "string" %}
            {{ f.name_all_lower }}: {{ f.test_literals[1] }}.to_string(),
{% else %}
            {{ f.name_all_lower }}: "{{ f.test_values[1] }}".to_string(),
{% endif %}
{% endfor %}
            ..Default::default()
        },
    ];
    values[index].clone()
}

#[test]
fn test_{{ name_all_lower }}_form_accepts_valid_input() {
    for index in 0..2 {
        let mut form = filled(index);
        let model = form.validate().expect("valid input");
        assert!(form.is_valid());
        assert_eq!(model.id, 3);
        assert_eq!(Concrete{{ name_upper_first }}SingleItemForm::from_model(&model).validate(), Some(model));
    }
}

#[test]
fn test_{{ name_all_lower }}_form_keeps_values_from_model() {
    let mut form = filled(0);
    let model = form.validate().expect("valid input");
    let again = Concrete{{ name_upper_first }}SingleItemForm::from_model(&model);
{% for f in fields %}
{% if f.type == "string" %}
    assert_eq!(again.{{ f.name_all_lower }}, form.{{ f.name_all_lower }}.trim());
{% elif f.type == "bool" %}
    assert_eq!(again.{{ f.name_all_lower }}, form.{{ f.name_all_lower }});
{% endif %}
{% endfor %}
}
{% if ns.required %}

#[test]
fn test_{{ name_all_lower }}_form_rejects_missing_mandatory_values() {
    let mut form = Concrete{{ name_upper_first }}SingleItemForm::default();
    assert!(form.validate().is_none());
{% for f in fields %}
{% if f.mandatory and f.type != "bool" %}
    assert!(form.errors().contains_key("{{ f.name_all_lower }}"));
{% endif %}
{% endfor %}
}
{% endif %}
