//! HTTP handlers of the %%GRAVE%%{{ name_upper_first }}%%GRAVE%% pages.

#[cfg(test)]
mod controller_test;

use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use minijinja::context;

use crate::crud::forms::{{ name_all_lower }}::{
    Concrete{{ name_upper_first }}ListForm, Concrete{{ name_upper_first }}SingleItemForm, {{ name_upper_first }}SingleItemForm,
};
use crate::crud::repositories::{{ name_all_lower }}::{{ name_upper_first }}Repository;
use crate::crud::services::{AppState, ConcreteServices, Services};
use crate::crud::utilities::Error;

pub const PATH: &str = "/{{ plural | lower }}";
const TEMPLATES: &str = "generated/crud/templates/{{ name_all_lower }}";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(PATH, get(index))
        .route(&format!("{PATH}/create"), get(new).post(create))
        .route(&format!("{PATH}/:id"), get(show))
        .route(&format!("{PATH}/:id/edit"), get(edit).post(update))
        .route(&format!("{PATH}/:id/delete"), post(delete))
}

pub async fn index(State(services): State<AppState>) -> Response {
    let result = list(&services).await;
    services.views().respond(result)
}

pub async fn new(State(services): State<AppState>) -> Response {
    let form = Concrete{{ name_upper_first }}SingleItemForm::default();
    let result = render_form(&services, "create.html", &form);
    services.views().respond(result)
}

pub async fn create(
    State(services): State<AppState>,
    Form(form): Form<Concrete{{ name_upper_first }}SingleItemForm>,
) -> Response {
    let result = create_item(&services, form).await;
    services.views().respond(result)
}

pub async fn show(State(services): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = show_item(&services, id).await;
    services.views().respond(result)
}

pub async fn edit(State(services): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = edit_item(&services, id).await;
    services.views().respond(result)
}

pub async fn update(
    State(services): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<Concrete{{ name_upper_first }}SingleItemForm>,
) -> Response {
    let result = update_item(&services, id, form).await;
    services.views().respond(result)
}

pub async fn delete(State(services): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = services.{{ name_all_lower }}_repository().delete(id).await.map(|()| Redirect::to(PATH));
    services.views().respond(result)
}

async fn list(services: &ConcreteServices) -> Result<Response, Error> {
    let items = services.{{ name_all_lower }}_repository().find_all().await?;
    let form = Concrete{{ name_upper_first }}ListForm::new(items);
    let page = services.views().render(
        &format!("{TEMPLATES}/index.html"),
        context! { path => PATH, form => form },
    )?;
    Ok(page.into_response())
}

async fn create_item(
    services: &ConcreteServices,
    mut form: Concrete{{ name_upper_first }}SingleItemForm,
) -> Result<Response, Error> {
    form.id = 0;
    match form.validate() {
        Some(model) => {
            let created = services.{{ name_all_lower }}_repository().create(model).await?;
            Ok(Redirect::to(&format!("{PATH}/{}", created.id)).into_response())
        }
        None => render_form(services, "create.html", &form),
    }
}

async fn show_item(services: &ConcreteServices, id: i64) -> Result<Response, Error> {
    let item = services.{{ name_all_lower }}_repository().find_by_id(id).await?;
    let page = services.views().render(
        &format!("{TEMPLATES}/show.html"),
        context! { path => PATH, item => item },
    )?;
    Ok(page.into_response())
}

async fn edit_item(services: &ConcreteServices, id: i64) -> Result<Response, Error> {
    let item = services.{{ name_all_lower }}_repository().find_by_id(id).await?;
    let form = Concrete{{ name_upper_first }}SingleItemForm::from_model(&item);
    render_form(services, "edit.html", &form)
}

async fn update_item(
    services: &ConcreteServices,
    id: i64,
    mut form: Concrete{{ name_upper_first }}SingleItemForm,
) -> Result<Response, Error> {
    form.id = id;
    match form.validate() {
        Some(model) => {
            services.{{ name_all_lower }}_repository().update(&model).await?;
            Ok(Redirect::to(&format!("{PATH}/{id}")).into_response())
        }
        None => render_form(services, "edit.html", &form),
    }
}

fn render_form(
    services: &ConcreteServices,
    page: &str,
    form: &Concrete{{ name_upper_first }}SingleItemForm,
) -> Result<Response, Error> {
    let page = services.views().render(
        &format!("{TEMPLATES}/{page}"),
        context! { path => PATH, form => form },
    )?;
    Ok(page.into_response())
}
