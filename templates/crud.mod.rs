//! CRUD module tree for {{ name }}.
//!
//! Generated by scaffolder from the project declaration. Regenerating the
//! project rewrites every file under %%GRAVE%%generated/%%GRAVE%%.

pub mod services;
pub mod utilities;
pub mod views;

pub mod models {
{% for r in resources %}
    pub mod {{ r.name_all_lower }};
{% endfor %}
}

pub mod repositories {
{% for r in resources %}
    pub mod {{ r.name_all_lower }};
{% endfor %}
}

pub mod forms {
{% for r in resources %}
    pub mod {{ r.name_all_lower }};
{% endfor %}
}

pub mod controllers {
{% for r in resources %}
    pub mod {{ r.name_all_lower }};
{% endfor %}
}

use axum::extract::State;
use axum::response::Response;
use axum::Router;
use minijinja::context;
use serde::Serialize;

use self::services::{AppState, Services};
use self::utilities::Error;
{% for c in references.controllers %}
use {{ c.path }} as {{ c.alias }};
{% endfor %}

/// One entry of the landing page menu.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuEntry {
    pub name: &'static str,
    pub path: &'static str,
}

/// Every resource, in declaration order.
pub const MENU: &[MenuEntry] = &[
{% for r in resources %}
    MenuEntry {
        name: "{{ r.plural_upper_first }}",
        path: {{ references.controllers[loop.index0].alias }}::PATH,
    },
{% endfor %}
];

/// Routes of every resource controller.
pub fn routes() -> Router<AppState> {
    Router::new()
{% for c in references.controllers %}
        .merge({{ c.alias }}::routes())
{% endfor %}
}

/// Landing page.
pub async fn index(State(services): State<AppState>) -> Response {
    let page = services.views().render(
        "html/index.html",
        context! { title => "{{ name_upper_first }}", menu => MENU },
    );
    services.views().respond(page)
}

pub async fn not_found(State(services): State<AppState>) -> Response {
    services.views().error_page(Error::NotFound)
}
