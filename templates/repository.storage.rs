{% set pg = db.kind in ["postgres", "postgresql"] %}
#[cfg(test)]
mod repository_test;

use crate::crud::models::{{ name_all_lower }}::sqlx::{{ name_upper_first }}Row;
use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};
use crate::crud::repositories::{{ name_all_lower }}::{{ name_upper_first }}Repository;
use crate::crud::utilities::{Error, Pool};

const SELECT_ALL: &str = "SELECT id{% for f in fields %}, {{ f.name_all_lower }}{% endfor %} FROM {{ table_name }} ORDER BY id";
{% if pg %}
const SELECT_ONE: &str = "SELECT id{% for f in fields %}, {{ f.name_all_lower }}{% endfor %} FROM {{ table_name }} WHERE id = $1";
{% if fields %}
const INSERT: &str = "INSERT INTO {{ table_name }} ({% for f in fields %}{{ f.name_all_lower }}{% if not f.last_item %}, {% endif %}{% endfor %}) VALUES ({% for f in fields %}${{ loop.index }}{% if not f.last_item %}, {% endif %}{% endfor %}) RETURNING id";
const UPDATE: &str = "UPDATE {{ table_name }} SET {% for f in fields %}{{ f.name_all_lower }} = ${{ loop.index }}{% if not f.last_item %}, {% endif %}{% endfor %} WHERE id = ${{ fields | length + 1 }}";
{% else %}
const INSERT: &str = "INSERT INTO {{ table_name }} DEFAULT VALUES RETURNING id";
{% endif %}
const DELETE: &str = "DELETE FROM {{ table_name }} WHERE id = $1";
{% else %}
const SELECT_ONE: &str = "SELECT id{% for f in fields %}, {{ f.name_all_lower }}{% endfor %} FROM {{ table_name }} WHERE id = ?";
{% if fields %}
const INSERT: &str = "INSERT INTO {{ table_name }} ({% for f in fields %}{{ f.name_all_lower }}{% if not f.last_item %}, {% endif %}{% endfor %}) VALUES ({% for f in fields %}?{% if not f.last_item %}, {% endif %}{% endfor %})";
const UPDATE: &str = "UPDATE {{ table_name }} SET {% for f in fields %}{{ f.name_all_lower }} = ?{% if not f.last_item %}, {% endif %}{% endfor %} WHERE id = ?";
{% else %}
const INSERT: &str = "INSERT INTO {{ table_name }} () VALUES ()";
{% endif %}
const DELETE: &str = "DELETE FROM {{ table_name }} WHERE id = ?";
{% endif %}

{% set signed = namespace(needed=false) %}
{% for f in fields %}{% if f.storage_type != f.host_type %}{% set signed.needed = true %}{% endif %}{% endfor %}
{% if signed.needed %}
/// Unsigned values travel as %%GRAVE%%i64%%GRAVE%%; anything above %%GRAVE%%i64::MAX%%GRAVE%% is refused.
fn to_column(value: u64) -> Result<i64, Error> {
    i64::try_from(value).map_err(|e| Error::from(::sqlx::Error::Encode(Box::new(e))))
}

{% endif %}
/// %%GRAVE%%{{ name_upper_first }}Repository%%GRAVE%% over a sqlx pool.
#[derive(Debug, Clone)]
pub struct Sqlx{{ name_upper_first }}Repository {
    pool: Pool,
}

impl Sqlx{{ name_upper_first }}Repository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl {{ name_upper_first }}Repository for Sqlx{{ name_upper_first }}Repository {
    async fn find_all(&self) -> Result<Vec<Concrete{{ name_upper_first }}>, Error> {
        let rows: Vec<{{ name_upper_first }}Row> = ::sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Concrete{{ name_upper_first }}, Error> {
        let row: {{ name_upper_first }}Row = ::sqlx::query_as(SELECT_ONE)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn create(&self, mut model: Concrete{{ name_upper_first }}) -> Result<Concrete{{ name_upper_first }}, Error> {
{% if pg %}
        let (id,): (i64,) = ::sqlx::query_as(INSERT)
{% for f in fields %}
{% if f.storage_type != f.host_type %}
            .bind(to_column(model.{{ f.name_all_lower }})?)
{% else %}
            .bind(&model.{{ f.name_all_lower }})
{% endif %}
{% endfor %}
            .fetch_one(&self.pool)
            .await?;
        model.id = id;
{% else %}
        let result = ::sqlx::query(INSERT)
{% for f in fields %}
{% if f.storage_type != f.host_type %}
            .bind(to_column(model.{{ f.name_all_lower }})?)
{% else %}
            .bind(&model.{{ f.name_all_lower }})
{% endif %}
{% endfor %}
            .execute(&self.pool)
            .await?;
        model.id = result.last_insert_id() as i64;
{% endif %}
        Ok(model)
    }

{% if fields %}
    async fn update(&self, model: &Concrete{{ name_upper_first }}) -> Result<(), Error> {
        let result = ::sqlx::query(UPDATE)
{% for f in fields %}
{% if f.storage_type != f.host_type %}
            .bind(to_column(model.{{ f.name_all_lower }})?)
{% else %}
            .bind(&model.{{ f.name_all_lower }})
{% endif %}
{% endfor %}
            .bind(model.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
{% else %}
    async fn update(&self, model: &Concrete{{ name_upper_first }}) -> Result<(), Error> {
        self.find_by_id(model.id).await.map(|_| ())
    }
{% endif %}

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let result = ::sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
