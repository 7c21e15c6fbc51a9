//! Integration tests for the `make module` command layer

use std::fs;
use std::path::Path;

use apiforge::ForgeConfig;
use apiforge_cli_lib::MakeModuleCommand;
use tempfile::TempDir;

fn write_stub(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture(temp: &TempDir) -> ForgeConfig {
    let templates = temp.path().join("stubs");
    for relative in [
        "controllers/site/getter.stub",
        "controllers/site/setter.stub",
        "controllers/site/admin.stub",
        "controllers/admin/admin.stub",
    ] {
        write_stub(&templates, relative, "controller ControllerNameController\n");
    }
    write_stub(&templates, "resources/resource.stub", "resource ResourceName [DATA_LIST]\n");
    write_stub(&templates, "models/model.stub", "model ModelName\n");
    write_stub(
        &templates,
        "repositories/repository.stub",
        "repository RepositoryNameRepository model=ModelPath resource=ResourcePath [DATA_LIST]\n",
    );

    ForgeConfig {
        templates_root: templates,
        output_root: temp.path().join("project"),
        ..ForgeConfig::default()
    }
}

fn command(module: &str) -> MakeModuleCommand {
    MakeModuleCommand {
        module_name: module.to_string(),
        controller: None,
        controller_type: "getter".to_string(),
        model: None,
        data: None,
        resource: None,
        repository: None,
        path: None,
        force: true,
        skip_existing: false,
    }
}

#[test]
fn force_run_generates_the_full_module() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    let mut cmd = command("Posts");
    cmd.data = Some("title,body".to_string());
    cmd.execute_with(&config).unwrap();

    assert!(config
        .output_root
        .join("src/controllers/site/Posts/PostsController.rs")
        .exists());
    assert!(config
        .output_root
        .join("src/controllers/admin/Posts/PostsController.rs")
        .exists());
    let resource =
        fs::read_to_string(config.output_root.join("src/resources/Posts/Post.rs")).unwrap();
    assert_eq!(resource, "resource Post ['id', 'title', 'body']\n");
}

#[test]
fn skip_existing_rerun_keeps_files_unchanged() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    command("Blog").execute_with(&config).unwrap();
    let model_path = config.output_root.join("src/models/Blog/Blog.rs");
    fs::write(&model_path, "locally edited\n").unwrap();

    let mut rerun = command("Blog");
    rerun.force = false;
    rerun.skip_existing = true;
    rerun.execute_with(&config).unwrap();

    assert_eq!(fs::read_to_string(&model_path).unwrap(), "locally edited\n");
}

#[test]
fn invalid_type_fails_without_touching_the_project() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    let mut cmd = command("Blog");
    cmd.controller_type = "bogus".to_string();
    let err = cmd.execute_with(&config).unwrap_err();

    assert!(format!("{err:#}").contains("bogus"));
    assert!(!config.output_root.exists());
}
