use crate::crud::models::{{ name_all_lower }}::{ {{- name_upper_first }}, Concrete{{ name_upper_first -}} };

#[test]
fn test_{{ name_all_lower }}_new_sets_every_field() {
    let model = Concrete{{ name_upper_first }}::new(
{% for f in fields %}
        {{ f.test_literals[0] }}{% if f.type == "string" %}.to_string(){% endif %},
{% endfor %}
    );
    assert_eq!(model.id(), 0);
{% for f in fields %}
    assert_eq!(model.{{ f.name_all_lower }}(), {{ f.test_literals[0] }});
{% endfor %}
}

#[test]
fn test_{{ name_all_lower }}_setters() {
    let mut model = Concrete{{ name_upper_first }}::default();
    model.set_id(7);
    assert_eq!(model.id(), 7);
{% for f in fields %}
    model.set_{{ f.name_all_lower }}({{ f.test_literals[1] }}{% if f.type == "string" %}.to_string(){% endif %});
    assert_eq!(model.{{ f.name_all_lower }}(), {{ f.test_literals[1] }});
{% endfor %}
}
