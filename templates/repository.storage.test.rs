//! Round trips against a live database. Run with
//! %%GRAVE%%DATABASE_URL=... cargo test -- --ignored%%GRAVE%% after %%GRAVE%%install.sh%%GRAVE%%.

use super::Sqlx{{ name_upper_first }}Repository;
use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};
use crate::crud::repositories::{{ name_all_lower }}::{{ name_upper_first }}Repository;
use crate::crud::utilities::{connect_lazy, Error};

fn repository() -> Sqlx{{ name_upper_first }}Repository {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "{{ db.url }}".to_string());
    Sqlx{{ name_upper_first }}Repository::new(connect_lazy(&url).unwrap())
}

fn sample() -> Concrete{{ name_upper_first }} {
    Concrete{{ name_upper_first }}::new(
{% for f in fields %}
        {{ f.test_literals[0] }}{% if f.type == "string" %}.to_string(){% endif %},
{% endfor %}
    )
}

#[tokio::test]
#[ignore = "needs a database"]
async fn test_{{ name_all_lower }}_create_find_update_delete() {
    let repo = repository();

    let created = repo.create(sample()).await.unwrap();
    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);

    let mut changed = found.clone();
{% for f in fields %}
    changed.{{ f.name_all_lower }} = {{ f.test_literals[1] }}{% if f.type == "string" %}.to_string(){% endif %};
{% endfor %}
    repo.update(&changed).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), changed);

    let all = repo.find_all().await.unwrap();
    assert!(all.iter().any(|m| m.id == created.id));

    repo.delete(created.id).await.unwrap();
    assert!(matches!(repo.find_by_id(created.id).await, Err(Error::NotFound)));
}

#[tokio::test]
#[ignore = "needs a database"]
async fn test_{{ name_all_lower }}_delete_missing_is_not_found() {
    let repo = repository();
    assert!(matches!(repo.delete(i64::MAX).await, Err(Error::NotFound)));
}
