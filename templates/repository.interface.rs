//! Persistence of %%GRAVE%%{{ name_upper_first }}%%GRAVE%% records.

pub mod sqlx;

use std::future::Future;

use crate::crud::models::{{ name_all_lower }}::Concrete{{ name_upper_first }};
use crate::crud::utilities::Error;

pub trait {{ name_upper_first }}Repository: Send + Sync {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Concrete{{ name_upper_first }}>, Error>> + Send;

    /// %%GRAVE%%Error::NotFound%%GRAVE%% when no row has this id.
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Concrete{{ name_upper_first }}, Error>> + Send;

    /// Insert %%GRAVE%%model%%GRAVE%% and return it with its new id.
    fn create(
        &self,
        model: Concrete{{ name_upper_first }},
    ) -> impl Future<Output = Result<Concrete{{ name_upper_first }}, Error>> + Send;

    fn update(&self, model: &Concrete{{ name_upper_first }}) -> impl Future<Output = Result<(), Error>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), Error>> + Send;
}
