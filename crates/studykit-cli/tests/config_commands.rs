use studykit_testing::TestWorld;

#[test]
fn test_config_path_reports_explicit_path() {
    let world = TestWorld::new();
    let json = world.run_json(&["config", "path"]).unwrap();

    assert_eq!(
        json["content"]["path"],
        world.config_path().display().to_string()
    );
    assert_eq!(json["content"]["exists"], false);
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let world = TestWorld::new();
    let json = world.run_json(&["config", "show"]).unwrap();

    let config = &json["content"]["config"];
    assert_eq!(config["default_type"], "ENFP");
    assert_eq!(config["schedule"]["focus_minutes"], 40);
    assert_eq!(config["bounds"]["break"]["max"], 15);
    assert_eq!(config["distribution"]["key_column"], "Country");
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success(), "{}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("use --force to overwrite"));

    let forced = world.run_json(&["config", "init", "--force"]).unwrap();
    assert_eq!(forced["content"]["overwritten"], true);
}

#[test]
fn test_written_config_round_trips() {
    let world = TestWorld::new();
    assert!(world.run(&["config", "init"]).unwrap().success());

    let result = world.run(&["config", "show"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("[schedule]"));
    assert!(result.stdout().contains("focus_minutes = 40"));
}

#[test]
fn test_invalid_config_fails_commands_but_not_init() {
    let world = TestWorld::new().with_config("[schedule]\nfocus_minutes = 90\n");

    let result = world.run(&["types"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("schedule.focus_minutes"));

    let init = world.run(&["config", "init", "--force"]).unwrap();
    assert!(init.success(), "{}", init.stderr());
    assert!(world.run(&["types"]).unwrap().success());
}

#[test]
fn test_unparseable_config_reports_path() {
    let world = TestWorld::new().with_config("default_type = [");
    let result = world.run(&["fortune"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to parse config"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let world = TestWorld::new().with_countries();
    let result = world
        .run(&["--log-level", "debug", "dist", "rows", "--file", "countries.csv"])
        .unwrap();

    assert!(result.success());
    assert!(result.stderr().contains("loaded table"));
    assert!(!result.stdout().contains("loaded table"));
}

#[test]
fn test_config_path_comes_from_env_without_flag() {
    let world = TestWorld::new().without_config_flag();
    let env_path = world.path("from-env/studykit.toml");
    let world = world.with_env("STUDYKIT_CONFIG", env_path.display().to_string());

    let json = world.run_json(&["config", "path"]).unwrap();
    assert_eq!(json["content"]["path"], env_path.display().to_string());
    assert_eq!(json["content"]["exists"], false);
}

#[test]
fn test_env_config_is_loaded() {
    let world = TestWorld::new().without_config_flag();
    let env_path = world.path("from-env/studykit.toml");
    std::fs::create_dir_all(env_path.parent().unwrap()).unwrap();
    std::fs::write(&env_path, "default_type = \"INFJ\"\n").unwrap();
    let world = world.with_env("STUDYKIT_CONFIG", env_path.display().to_string());

    let json = world.run_json(&["profile"]).unwrap();
    assert_eq!(json["content"]["code"], "INFJ");
}

#[test]
fn test_config_flag_wins_over_env() {
    let world = TestWorld::new().with_config("default_type = \"ESTP\"\n");
    let env_path = world.path("from-env/studykit.toml");
    std::fs::create_dir_all(env_path.parent().unwrap()).unwrap();
    std::fs::write(&env_path, "default_type = \"INFJ\"\n").unwrap();
    let world = world.with_env("STUDYKIT_CONFIG", env_path.display().to_string());

    let json = world.run_json(&["profile"]).unwrap();
    assert_eq!(json["content"]["code"], "ESTP");
}
