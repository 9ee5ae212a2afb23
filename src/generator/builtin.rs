//! Template sources compiled into the binary from `templates/`.

/// Built-in source for a catalog name.
pub fn builtin_source(name: &str) -> Option<&'static str> {
    let source = match name {
        "script.install.sh" => include_str!("../../templates/script.install.sh"),
        "script.test.sh" => include_str!("../../templates/script.test.sh"),
        "script.install.bat" => include_str!("../../templates/script.install.bat"),
        "script.test.bat" => include_str!("../../templates/script.test.bat"),
        "cargo.toml.txt" => include_str!("../../templates/cargo.toml.txt"),
        "main.rs" => include_str!("../../templates/main.rs"),
        "view.stylesheets.scaffold.css" => include_str!("../../templates/view.stylesheets.scaffold.css"),
        "view.index.html" => include_str!("../../templates/view.index.html"),
        "view.error.html" => include_str!("../../templates/view.error.html"),
        "view.base.html" => include_str!("../../templates/view.base.html"),
        "sql.create.db" => include_str!("../../templates/sql.create.db"),
        "crud.mod.rs" => include_str!("../../templates/crud.mod.rs"),
        "utilities.rs" => include_str!("../../templates/utilities.rs"),
        "views.rs" => include_str!("../../templates/views.rs"),
        "services.rs" => include_str!("../../templates/services.rs"),
        "services.concrete.rs" => include_str!("../../templates/services.concrete.rs"),
        "model.interface.rs" => include_str!("../../templates/model.interface.rs"),
        "model.concrete.rs" => include_str!("../../templates/model.concrete.rs"),
        "model.concrete.test.rs" => include_str!("../../templates/model.concrete.test.rs"),
        "model.storage.rs" => include_str!("../../templates/model.storage.rs"),
        "repository.interface.rs" => include_str!("../../templates/repository.interface.rs"),
        "repository.storage.rs" => include_str!("../../templates/repository.storage.rs"),
        "repository.storage.test.rs" => include_str!("../../templates/repository.storage.test.rs"),
        "form.mod.rs" => include_str!("../../templates/form.mod.rs"),
        "form.single.item.rs" => include_str!("../../templates/form.single.item.rs"),
        "form.concrete.single.item.rs" => include_str!("../../templates/form.concrete.single.item.rs"),
        "form.concrete.single.item.test.rs" => include_str!("../../templates/form.concrete.single.item.test.rs"),
        "form.list.rs" => include_str!("../../templates/form.list.rs"),
        "form.concrete.list.rs" => include_str!("../../templates/form.concrete.list.rs"),
        "controller.rs" => include_str!("../../templates/controller.rs"),
        "controller.test.rs" => include_str!("../../templates/controller.test.rs"),
        "view.resource.index.html" => include_str!("../../templates/view.resource.index.html"),
        "view.resource.create.html" => include_str!("../../templates/view.resource.create.html"),
        "view.resource.edit.html" => include_str!("../../templates/view.resource.edit.html"),
        "view.resource.show.html" => include_str!("../../templates/view.resource.show.html"),
        _ => return None,
    };
    Some(source)
}
