//! End-to-end tests for the module generation pipeline

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use apiforge::{AlwaysOverwrite, AlwaysSkip, ForgeConfig, ModuleGenerator, ModuleSpec, WriteOutcome};
use tempfile::TempDir;

fn write_stub(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A stub set exercising every token each template is entitled to.
fn fixture(temp: &TempDir) -> ForgeConfig {
    let templates = temp.path().join("stubs");
    write_stub(
        &templates,
        "controllers/site/getter.stub",
        "getter ControllerNameController at ControllerPath via RepoShortName\n",
    );
    write_stub(
        &templates,
        "controllers/site/setter.stub",
        "setter ControllerNameController at ControllerPath via RepoShortName\n",
    );
    write_stub(
        &templates,
        "controllers/site/admin.stub",
        "admin-kind ControllerNameController at ControllerPath via RepoShortName\n",
    );
    write_stub(
        &templates,
        "controllers/admin/admin.stub",
        "admin ControllerNameController at ControllerPath via RepoShortName\n",
    );
    write_stub(
        &templates,
        "resources/resource.stub",
        "resource ResourceName at ResourcePath exposing [DATA_LIST]\n",
    );
    write_stub(
        &templates,
        "models/model.stub",
        "model ModelName at ModelPath\n",
    );
    write_stub(
        &templates,
        "repositories/repository.stub",
        "repository RepositoryNameRepository at RepositoryPath (RepoShortName) \
         model=ModelPath resource=ResourcePath columns [DATA_LIST]\n",
    );

    ForgeConfig {
        templates_root: templates,
        output_root: temp.path().join("project"),
        ..ForgeConfig::default()
    }
}

/// Snapshot every file under the output root, keyed by relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
    fn walk(dir: &Path, root: &Path, into: &mut BTreeMap<PathBuf, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, into);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                into.insert(relative, fs::read_to_string(&path).unwrap());
            }
        }
    }
    let mut files = BTreeMap::new();
    walk(root, root, &mut files);
    files
}

#[test]
fn blog_defaults_place_every_artifact_under_the_module_directory() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    ModuleGenerator::new(&config)
        .generate(&ModuleSpec::new("Blog"), &mut AlwaysOverwrite)
        .unwrap();

    let files = snapshot(&config.output_root);
    let paths: Vec<_> = files.keys().cloned().collect();
    assert_eq!(
        paths,
        [
            PathBuf::from("src/controllers/admin/Blog/BlogController.rs"),
            PathBuf::from("src/controllers/site/Blog/BlogController.rs"),
            PathBuf::from("src/models/Blog/Blog.rs"),
            PathBuf::from("src/repositories/Blog/BlogRepository.rs"),
            PathBuf::from("src/resources/Blog/Blog.rs"),
        ]
    );
}

#[test]
fn plural_module_singularizes_model_and_resource_leaves_only() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    ModuleGenerator::new(&config)
        .generate(&ModuleSpec::new("Posts"), &mut AlwaysOverwrite)
        .unwrap();

    assert!(config
        .output_root
        .join("src/controllers/site/Posts/PostsController.rs")
        .exists());
    assert!(config.output_root.join("src/models/Post/Post.rs").exists());
    assert!(config.output_root.join("src/resources/Posts/Post.rs").exists());
    assert!(config
        .output_root
        .join("src/repositories/Posts/PostsRepository.rs")
        .exists());
}

#[test]
fn field_lists_render_asymmetrically() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Blog");
    spec.data = Some("id,title,body".to_string());

    ModuleGenerator::new(&config)
        .generate(&spec, &mut AlwaysOverwrite)
        .unwrap();

    let resource = fs::read_to_string(config.output_root.join("src/resources/Blog/Blog.rs")).unwrap();
    assert!(resource.contains("['id', 'title', 'body']"));

    let repository =
        fs::read_to_string(config.output_root.join("src/repositories/Blog/BlogRepository.rs"))
            .unwrap();
    assert!(repository.contains("['title', 'body']"));
}

#[test]
fn missing_id_is_prepended_for_the_resource_only() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Blog");
    spec.data = Some("title".to_string());

    ModuleGenerator::new(&config)
        .generate(&spec, &mut AlwaysOverwrite)
        .unwrap();

    let resource = fs::read_to_string(config.output_root.join("src/resources/Blog/Blog.rs")).unwrap();
    assert!(resource.contains("['id', 'title']"));

    let repository =
        fs::read_to_string(config.output_root.join("src/repositories/Blog/BlogRepository.rs"))
            .unwrap();
    assert!(repository.contains("columns ['title']"));
}

#[test]
fn empty_field_list_renders_empty_in_both_templates() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);

    ModuleGenerator::new(&config)
        .generate(&ModuleSpec::new("Blog"), &mut AlwaysOverwrite)
        .unwrap();

    let resource = fs::read_to_string(config.output_root.join("src/resources/Blog/Blog.rs")).unwrap();
    assert!(resource.contains("exposing []"));

    let repository =
        fs::read_to_string(config.output_root.join("src/repositories/Blog/BlogRepository.rs"))
            .unwrap();
    assert!(repository.contains("columns []"));
}

#[test]
fn bogus_controller_kind_aborts_before_any_side_effect() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Blog");
    spec.controller_kind = "bogus".to_string();

    let err = ModuleGenerator::new(&config)
        .generate(&spec, &mut AlwaysOverwrite)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("bogus"));
    assert!(message.contains("setter, getter, admin"));
    assert!(!config.output_root.exists());
}

#[test]
fn rerun_with_skip_keeps_the_first_run_byte_identical() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Blog");
    spec.data = Some("title,body".to_string());

    let generator = ModuleGenerator::new(&config);
    generator.generate(&spec, &mut AlwaysOverwrite).unwrap();
    let first = snapshot(&config.output_root);

    let report = generator.generate(&spec, &mut AlwaysSkip).unwrap();
    assert!(report
        .files
        .iter()
        .all(|file| file.outcome == WriteOutcome::Skipped));
    assert_eq!(snapshot(&config.output_root), first);
}

#[test]
fn rerun_with_overwrite_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Posts");
    spec.data = Some("title,body".to_string());
    spec.parent_path = Some("Content".to_string());

    let generator = ModuleGenerator::new(&config);
    generator.generate(&spec, &mut AlwaysOverwrite).unwrap();
    let first = snapshot(&config.output_root);

    let report = generator.generate(&spec, &mut AlwaysOverwrite).unwrap();
    assert!(report
        .files
        .iter()
        .all(|file| file.outcome == WriteOutcome::Written));
    assert_eq!(snapshot(&config.output_root), first);
}

#[test]
fn repository_override_embeds_paths_resolved_before_it() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Shop");
    spec.repository = Some("Catalog/Item".to_string());

    ModuleGenerator::new(&config)
        .generate(&spec, &mut AlwaysOverwrite)
        .unwrap();

    let repository =
        fs::read_to_string(config.output_root.join("src/repositories/Catalog/ItemRepository.rs"))
            .unwrap();
    assert!(repository.contains("repository ItemRepository at Catalog (item)"));
    assert!(repository.contains("model=Shop/Shop"));
    assert!(repository.contains("resource=Shop/Shop"));
}

#[test]
fn parent_path_moves_both_controller_subtrees() {
    let temp = TempDir::new().unwrap();
    let config = fixture(&temp);
    let mut spec = ModuleSpec::new("Blog");
    spec.parent_path = Some("Content".to_string());

    ModuleGenerator::new(&config)
        .generate(&spec, &mut AlwaysOverwrite)
        .unwrap();

    assert!(config
        .output_root
        .join("src/controllers/site/Content/Blog/BlogController.rs")
        .exists());
    assert!(config
        .output_root
        .join("src/controllers/admin/Content/Blog/BlogController.rs")
        .exists());
    // other artifacts stay put
    assert!(config.output_root.join("src/models/Blog/Blog.rs").exists());
}
