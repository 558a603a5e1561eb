use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn pybundle_cmd() -> Command {
    Command::cargo_bin("pybundle").expect("Failed to find pybundle binary")
}

#[test]
fn test_show_prints_full_command() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .arg("show")
        .arg("app.py")
        .arg("--onefile")
        .arg("--hidden-import")
        .arg("requests");

    cmd.assert()
        .success()
        .stdout(contains("-m PyInstaller"))
        .stdout(contains("--onefile"))
        .stdout(contains("--hidden-import requests"))
        .stdout(contains("--distpath"))
        .stdout(contains("app.py"));

    Ok(())
}

#[test]
fn test_missing_script_is_a_user_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path()).arg("show");

    cmd.assert().failure().stderr(contains("script"));

    Ok(())
}

#[test]
fn test_show_save_persists_config() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .arg("show")
        .arg("app.py")
        .arg("--encrypt")
        .arg("--save");
    cmd.assert().success();

    let saved = std::fs::read_to_string(dir.path().join("pybundle.json"))?;
    assert!(saved.contains("\"script\": \"app.py\""));
    assert!(saved.contains("\"encrypt\": true"));
    // The builder writes the resolved output directory back into the config
    assert!(saved.contains("output"));

    // A second invocation picks the script up from the saved config
    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path()).arg("show");
    cmd.assert().success().stdout(contains("app.py"));

    Ok(())
}

#[test]
fn test_pipeline_logs_resolved_config_path() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .env("RUST_LOG", "info")
        .arg("show")
        .arg("app.py");

    // Diagnostics go through the log facade to stderr, never into the
    // stdout stream the packager output shares
    cmd.assert()
        .success()
        .stderr(contains("Using config"))
        .stderr(contains("pybundle.json"));

    Ok(())
}

#[test]
fn test_corrupt_config_fails_loudly() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    std::fs::write(dir.path().join("pybundle.json"), "{definitely not json")?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path()).arg("show").arg("app.py");

    cmd.assert().failure().stderr(contains("not valid JSON"));

    Ok(())
}

#[test]
fn test_malformed_version_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .arg("show")
        .arg("app.py")
        .arg("--company")
        .arg("Acme")
        .arg("--file-version")
        .arg("1.x")
        .arg("--product-version")
        .arg("1.0");

    cmd.assert()
        .failure()
        .stderr(contains("Malformed version"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_build_streams_output_and_exit_code() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    // Stand in for the interpreter with a shell that echoes; the packager
    // module flag becomes a harmless argument to -c's script.
    let fake_python = dir.path().join("fake-python");
    std::fs::write(&fake_python, "#!/bin/sh\necho packaging line one\necho packaging line two\n")?;
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&fake_python, std::fs::Permissions::from_mode(0o755))?;
    }

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .arg("build")
        .arg("app.py")
        .arg("--python")
        .arg(fake_python.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(contains("packaging line one"))
        .stdout(contains("packaging line two"))
        .stdout(contains("Packaging finished."));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_build_propagates_packager_failure() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let fake_python = dir.path().join("fake-python");
    std::fs::write(&fake_python, "#!/bin/sh\necho boom\nexit 2\n")?;
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&fake_python, std::fs::Permissions::from_mode(0o755))?;
    }

    let mut cmd = pybundle_cmd();
    cmd.current_dir(dir.path())
        .arg("build")
        .arg("app.py")
        .arg("--python")
        .arg(fake_python.to_str().unwrap());

    cmd.assert()
        .code(2)
        .stdout(contains("boom"))
        .stdout(contains("Packaging failed:"));

    Ok(())
}
