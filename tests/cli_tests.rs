mod common;

use std::fs;
use std::process::Command;

use common::fixture;

fn scaffolder() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scaffolder"));
    cmd.env_remove("SCAFFOLDER_TEMPLATE_DIR")
        .env_remove("SCAFFOLDER_WORKSPACE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_generates_project() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("animals");
    let status = scaffolder()
        .arg(fixture("animals.json"))
        .arg("--output")
        .arg(&out)
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(out.join("Cargo.toml").is_file());
    assert!(out.join("generated/crud/controllers/cat/mod.rs").is_file());
}

#[test]
fn test_cli_default_declaration_in_current_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::copy(fixture("animals.json"), tmp.path().join("scaffold.json")).unwrap();
    let status = scaffolder()
        .current_dir(tmp.path())
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(tmp.path().join("animals.rs").is_file());
}

#[test]
fn test_cli_failure_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let output = scaffolder()
        .current_dir(tmp.path())
        .arg(fixture("unsupported_type.json"))
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("datetime"), "{stderr}");
    assert!(!tmp.path().join("Cargo.toml").exists());
}

#[test]
fn test_cli_overwrite_flag_replaces_user_owned_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("animals");
    let run = |overwrite: bool| {
        let mut cmd = scaffolder();
        cmd.arg(fixture("animals.json")).arg("--output").arg(&out);
        if overwrite {
            cmd.arg("--overwrite");
        }
        assert!(cmd.status().expect("run cli").success());
    };

    run(false);
    let css = out.join("views/stylesheets/scaffold.css");
    fs::write(&css, "/* mine */").unwrap();
    run(false);
    assert_eq!(fs::read_to_string(&css).unwrap(), "/* mine */");
    run(true);
    assert_ne!(fs::read_to_string(&css).unwrap(), "/* mine */");
}

#[test]
fn test_cli_template_directory_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let templates = tmp.path().join("tpl");
    let status = scaffolder()
        .arg("--export-templates")
        .arg(&templates)
        .status()
        .expect("run cli");
    assert!(status.success());
    fs::write(templates.join("script.test.bat"), "rem custom {{ name }}\n").unwrap();

    let out = tmp.path().join("animals");
    let status = scaffolder()
        .env("SCAFFOLDER_TEMPLATE_DIR", &templates)
        .arg(fixture("animals.json"))
        .arg("--output")
        .arg(&out)
        .status()
        .expect("run cli");
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(out.join("test.bat")).unwrap(),
        "rem custom animals\n"
    );
}

#[test]
fn test_cli_verbose_dumps_model() {
    let tmp = tempfile::tempdir().unwrap();
    let output = scaffolder()
        .arg(fixture("animals.json"))
        .arg("--output")
        .arg(tmp.path())
        .arg("--verbose")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("declaration after enrichment"), "{stderr}");
    assert!(stderr.contains("nameUpperFirst"), "{stderr}");
}
