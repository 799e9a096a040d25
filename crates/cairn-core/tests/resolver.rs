use std::path::{Path, PathBuf};

use cairn_core::project::{PluginKind, Project};
use cairn_core::repository::RepositoryCatalog;
use cairn_core::resolver::{
    apply_namespace_default, declare_evaluation_order, inject_toolchain, register_clean_task,
    remap_output_directories, ConfigResolver, ResolveConfig, ToolchainMap, CLEAN_TASK,
};
use cairn_core::toolchain::{JavaCompatibility, JavaVersion, ToolchainSettings};
use cairn_core::tree::{BuildTree, EvaluationConstraint, TaskAction};
use cairn_util::errors::ConfigError;

fn settings(sdk: u32) -> ToolchainSettings {
    ToolchainSettings {
        java: JavaCompatibility::uniform(JavaVersion::new(17)),
        compile_sdk: sdk,
        build_tools: "35.0.0".to_string(),
        ndk: "28.2.13676358".to_string(),
    }
}

fn toolchains() -> ToolchainMap {
    let mut map = ToolchainMap::new();
    map.insert(PluginKind::Application, settings(35));
    map.insert(PluginKind::Library, settings(35));
    map
}

fn sample_tree() -> BuildTree {
    let root = Project::root("root", "com.example");
    let app = Project::subproject("app", &root, PluginKind::Application);
    let core = Project::subproject("core", &root, PluginKind::Library);
    BuildTree::new("/work/demo/android", root, vec![app, core]).unwrap()
}

fn sample_config() -> ResolveConfig {
    ResolveConfig {
        repositories: vec!["google".to_string(), "maven-central".to_string()],
        catalog: RepositoryCatalog::with_well_known(),
        new_base_output_dir: PathBuf::from("../../build"),
        toolchains: toolchains(),
        evaluation_depends_on: Some("app".to_string()),
    }
}

#[test]
fn remap_sets_root_and_subproject_dirs() {
    let mut tree = sample_tree();
    remap_output_directories(&mut tree, Path::new("../../build"));
    assert_eq!(tree.root.output_dir, PathBuf::from("../../build"));
    assert_eq!(
        tree.subproject("app").unwrap().output_dir,
        PathBuf::from("../../build/app")
    );
    assert_eq!(
        tree.subproject("core").unwrap().output_dir,
        PathBuf::from("../../build/core")
    );
}

#[test]
fn remap_is_idempotent() {
    let mut once = sample_tree();
    remap_output_directories(&mut once, Path::new("out"));
    let mut twice = once.clone();
    remap_output_directories(&mut twice, Path::new("out"));
    assert_eq!(once, twice);
}

#[test]
fn remap_gives_distinct_dirs_for_distinct_names() {
    let root = Project::root("root", "g");
    let subs = ["a", "b", "c", "d"]
        .iter()
        .map(|n| Project::subproject(*n, &root, PluginKind::None))
        .collect();
    let mut tree = BuildTree::new(".", root, subs).unwrap();
    remap_output_directories(&mut tree, Path::new("shared"));

    let mut dirs: Vec<&PathBuf> = tree.subprojects.iter().map(|p| &p.output_dir).collect();
    for sub in &tree.subprojects {
        assert_eq!(sub.output_dir, Path::new("shared").join(&sub.name));
    }
    dirs.sort();
    dirs.dedup();
    assert_eq!(dirs.len(), 4);
}

#[test]
fn namespace_default_fills_empty_from_group() {
    let root = Project::root("root", "com.example");
    let mut app = Project::subproject("app", &root, PluginKind::Application);
    apply_namespace_default(&mut app);
    assert_eq!(app.namespace, "com.example");
}

#[test]
fn namespace_default_never_overwrites() {
    let root = Project::root("root", "com.example");
    let mut app =
        Project::subproject("app", &root, PluginKind::Application).with_namespace("custom.ns");
    apply_namespace_default(&mut app);
    assert_eq!(app.namespace, "custom.ns");
}

#[test]
fn inject_toolchain_for_none_leaves_project_unset() {
    let root = Project::root("root", "com.example");
    let mut plain = Project::subproject("plain", &root, PluginKind::None);
    inject_toolchain(&mut plain, &toolchains()).unwrap();
    assert!(plain.toolchain.is_none());
    assert!(plain.namespace.is_empty());
}

#[test]
fn inject_toolchain_for_none_needs_no_entry() {
    let root = Project::root("root", "com.example");
    let mut plain = Project::subproject("plain", &root, PluginKind::None);
    assert!(inject_toolchain(&mut plain, &ToolchainMap::new()).is_ok());
}

#[test]
fn inject_toolchain_applies_kind_settings_and_namespace() {
    let root = Project::root("root", "com.example");
    let mut lib = Project::subproject("core", &root, PluginKind::Library);
    inject_toolchain(&mut lib, &toolchains()).unwrap();
    assert_eq!(lib.toolchain, Some(settings(35)));
    assert_eq!(lib.namespace, "com.example");
}

#[test]
fn inject_toolchain_rejects_empty_namespace() {
    let root = Project::root("root", "com.example");
    let mut app = Project::subproject("app", &root, PluginKind::Application).with_group("");
    let err = inject_toolchain(&mut app, &toolchains()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyNamespace("app".to_string()));
    assert!(app.toolchain.is_none());
}

#[test]
fn inject_toolchain_missing_kind_fails() {
    let root = Project::root("root", "com.example");
    let mut app = Project::subproject("app", &root, PluginKind::Application);
    let mut map = ToolchainMap::new();
    map.insert(PluginKind::Library, settings(35));
    let err = inject_toolchain(&mut app, &map).unwrap_err();
    assert_eq!(err, ConfigError::UnknownPluginKind("application".to_string()));
    assert!(app.toolchain.is_none());
}

#[test]
fn declare_evaluation_order_skips_target_itself() {
    let mut tree = sample_tree();
    declare_evaluation_order(&mut tree, "app");
    assert_eq!(
        tree.evaluation_order,
        vec![EvaluationConstraint {
            project: "core".to_string(),
            after: "app".to_string(),
        }]
    );
    declare_evaluation_order(&mut tree, "app");
    assert_eq!(tree.evaluation_order.len(), 1);
}

#[test]
fn register_clean_task_is_deferred_and_unique() {
    let mut tree = sample_tree();
    remap_output_directories(&mut tree, Path::new("../../build"));
    register_clean_task(&mut tree);
    register_clean_task(&mut tree);
    assert_eq!(tree.tasks.len(), 1);
    assert_eq!(
        tree.task(CLEAN_TASK).unwrap().action,
        TaskAction::Delete {
            paths: vec![PathBuf::from("../../build")]
        }
    );
}

#[test]
fn resolve_full_scenario() {
    let config = sample_config();
    let resolved = ConfigResolver::new(&config).resolve(&sample_tree()).unwrap();

    assert_eq!(resolved.root().output_dir, PathBuf::from("../../build"));
    let app = resolved.subproject("app").unwrap();
    assert_eq!(app.output_dir, PathBuf::from("../../build/app"));
    assert_eq!(app.namespace, "com.example");
    assert_eq!(app.toolchain.as_ref().unwrap().compile_sdk, 35);
    assert_eq!(
        resolved.subproject("core").unwrap().output_dir,
        PathBuf::from("../../build/core")
    );
    assert_eq!(resolved.repositories().len(), 2);
    assert_eq!(resolved.evaluation_order().len(), 1);
    assert!(resolved.task(CLEAN_TASK).is_some());
    assert_eq!(
        resolved.absolute_path(&resolved.root().output_dir),
        PathBuf::from("/work/demo/build")
    );
}

#[test]
fn resolve_missing_application_entry_fails() {
    let mut config = sample_config();
    config.toolchains.remove(&PluginKind::Application);
    let tree = sample_tree();
    let err = ConfigResolver::new(&config).resolve(&tree).unwrap_err();
    assert_eq!(err, ConfigError::UnknownPluginKind("application".to_string()));
    assert_eq!(err.subject(), "application");
}

#[test]
fn resolve_is_all_or_nothing() {
    let mut config = sample_config();
    config.toolchains.remove(&PluginKind::Library);
    let tree = sample_tree();
    let before = tree.clone();
    assert!(ConfigResolver::new(&config).resolve(&tree).is_err());
    assert_eq!(tree, before);
}

#[test]
fn resolve_unknown_repository_fails() {
    let mut config = sample_config();
    config.repositories.push("jcenter".to_string());
    let err = ConfigResolver::new(&config)
        .resolve(&sample_tree())
        .unwrap_err();
    assert_eq!(err, ConfigError::MissingRepository("jcenter".to_string()));
}

#[test]
fn resolve_empty_base_dir_fails() {
    let mut config = sample_config();
    config.new_base_output_dir = PathBuf::new();
    let err = ConfigResolver::new(&config)
        .resolve(&sample_tree())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath(_)));
}

#[test]
fn resolve_unknown_evaluation_target_fails() {
    let mut config = sample_config();
    config.evaluation_depends_on = Some("missing".to_string());
    let err = ConfigResolver::new(&config)
        .resolve(&sample_tree())
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownProject("missing".to_string()));
}

#[test]
fn resolve_twice_gives_same_fingerprint() {
    let config = sample_config();
    let resolver = ConfigResolver::new(&config);
    let a = resolver.resolve(&sample_tree()).unwrap();
    let b = resolver.resolve(&sample_tree()).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn resolve_root_is_not_given_a_toolchain() {
    let config = sample_config();
    let resolved = ConfigResolver::new(&config).resolve(&sample_tree()).unwrap();
    assert!(resolved.root().toolchain.is_none());
}
