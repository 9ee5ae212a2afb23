use std::path::Path;

use super::Services;
use crate::crud::utilities::{connect_lazy, Error, Pool};
use crate::crud::views::Views;
{% for r in references.storage_repositories %}
use {{ r.path }} as {{ r.alias }};
{% endfor %}

pub struct ConcreteServices {
    pool: Pool,
    views: Views,
{% for r in references.storage_repositories %}
    {{ resources[loop.index0].name_all_lower }}: {{ r.alias }}::Sqlx{{ resources[loop.index0].name_upper_first }}Repository,
{% endfor %}
}

impl ConcreteServices {
    /// Build every service over a lazily connected pool.
    pub async fn connect(database_url: &str, views_root: impl AsRef<Path>) -> Result<Self, Error> {
        let pool = connect_lazy(database_url)?;
        Ok(Self {
{% for r in references.storage_repositories %}
            {{ resources[loop.index0].name_all_lower }}: {{ r.alias }}::Sqlx{{ resources[loop.index0].name_upper_first }}Repository::new(pool.clone()),
{% endfor %}
            views: Views::new(views_root)?,
            pool,
        })
    }
{% for r in references.storage_repositories %}

    pub fn {{ resources[loop.index0].name_all_lower }}_repository(&self) -> &{{ r.alias }}::Sqlx{{ resources[loop.index0].name_upper_first }}Repository {
        &self.{{ resources[loop.index0].name_all_lower }}
    }
{% endfor %}
}

impl Services for ConcreteServices {
    fn pool(&self) -> &Pool {
        &self.pool
    }

    fn views(&self) -> &Views {
        &self.views
    }
}
