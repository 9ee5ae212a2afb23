//! Application services shared by every controller.

mod concrete_services;

use std::sync::Arc;

pub use concrete_services::ConcreteServices;

use super::utilities::Pool;
use super::views::Views;

/// Router state.
pub type AppState = Arc<ConcreteServices>;

pub trait Services: Send + Sync {
    fn pool(&self) -> &Pool;
    fn views(&self) -> &Views;
}
