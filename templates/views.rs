//! HTML rendering for the generated controllers.
//!
//! Pages live under %%GRAVE%%views/%%GRAVE%% and use %%GRAVE%%[[ ]]%%GRAVE%% / %%GRAVE%%[% %]%%GRAVE%% delimiters.

use std::path::Path;

use axum::response::{Html, IntoResponse, Response};
use minijinja::syntax::SyntaxConfig;
use minijinja::{context, path_loader, Environment};
use serde::Serialize;

use super::utilities::Error;

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters("[%", "%]")
                .variable_delimiters("[[", "]]")
                .comment_delimiters("[#", "#]")
                .build()?,
        );
        env.set_loader(path_loader(root.as_ref()));
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, Error> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }

    /// Turn a handler result into a response, rendering failures with the
    /// error page.
    pub fn respond<R: IntoResponse>(&self, result: Result<R, Error>) -> Response {
        match result {
            Ok(r) => r.into_response(),
            Err(e) => self.error_page(e),
        }
    }

    pub fn error_page(&self, err: Error) -> Response {
        tracing::warn!(error = %err, "request failed");
        let status = err.status();
        match self.render(
            "html/error.html",
            context! { status => status.as_u16(), message => err.to_string() },
        ) {
            Ok(page) => (status, page).into_response(),
            Err(_) => err.into_response(),
        }
    }
}
