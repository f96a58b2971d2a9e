mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::str::{contains, starts_with};

    use std::fs;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "jsendpoints";
    const USAGE: &str =
        "Please use one of -u for single js file URL or -l for .txt file contains js files URLs.";
    const API_PATTERN: &str = "/api/[a-zA-Z0-9_/.-]+\n";

    fn workspace(patterns: &str) -> Result<tempfile::TempDir, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("regex.tmp"), patterns)?;
        Ok(dir)
    }

    fn command(dir: &tempfile::TempDir) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg("--no-config");
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_mode_given() -> TestResult {
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.assert().failure().stdout(contains(USAGE));
        Ok(())
    }

    #[test]
    fn test_output__when_both_modes_given() -> TestResult {
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.arg("-l").arg("urls.txt").arg("-u").arg("http://127.0.0.1/app.js");

        cmd.assert().failure().stdout(contains(USAGE));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__single_url() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/app.js")
            .with_status(200)
            .with_body("fetch('/api/v1/users').then(x => x); fetch('/api/v1/users')")
            .create_async()
            .await;
        let url = server.url() + "/app.js";
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.arg("-u").arg(&url);

        cmd.assert()
            .success()
            .stdout(starts_with(format!("[ 1 ] {url}\n/api/v1/users\n")))
            .stdout(contains("Process took"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_404__prints_only_timing() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing.js")
            .with_status(404)
            .create_async()
            .await;
        let url = server.url() + "/missing.js";
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.arg("-u").arg(&url).arg("-o").arg("out.txt");

        cmd.assert()
            .success()
            .stdout(starts_with("Process took"));
        assert!(!dir.path().join("out.txt").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__silent_with_output_file() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/app.js")
            .with_status(200)
            .with_body("axios.get('/api/items')")
            .create_async()
            .await;
        let url = server.url() + "/app.js";
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.arg("-u").arg(&url).arg("-o").arg("out.txt").arg("-s");

        cmd.assert().success().stdout(starts_with("Process took"));
        assert_eq!(
            fs::read_to_string(dir.path().join("out.txt"))?,
            format!("[ 1 ] {url}\n/api/items\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_output__quote_wrapped_matches_are_kept_verbatim() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/app.js")
            .with_status(200)
            .with_body(r#"fetch("/api/v1/orders"); fetch("/api/v1/orders");"#)
            .create_async()
            .await;
        let url = server.url() + "/app.js";
        let dir = workspace("\"/api/[a-zA-Z0-9_/.-]+\"\n")?;
        let mut cmd = command(&dir)?;

        cmd.arg("-u").arg(&url).arg("-o").arg("out.txt").arg("-s");

        cmd.assert().success();
        assert_eq!(
            fs::read_to_string(dir.path().join("out.txt"))?,
            format!("[ 1 ] {url}\n\"/api/v1/orders\"\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_output__batch_mode_writes_every_block() -> TestResult {
        let mut server = Server::new_async().await;
        let _m1 = server
            .mock("GET", "/one.js")
            .with_status(200)
            .with_body("get('/api/one')")
            .create_async()
            .await;
        let _m2 = server
            .mock("GET", "/two.js")
            .with_status(200)
            .with_body("get('/api/two')")
            .create_async()
            .await;
        let url_one = server.url() + "/one.js";
        let url_two = server.url() + "/two.js";
        let dir = workspace(API_PATTERN)?;
        fs::write(
            dir.path().join("urls.txt"),
            format!("{url_one}\n\n{url_two}\n"),
        )?;
        let mut cmd = command(&dir)?;

        cmd.arg("-l").arg("urls.txt").arg("-o").arg("out.txt").arg("-s");

        cmd.assert().success();
        // Order is not deterministic so can't assert it
        let output = fs::read_to_string(dir.path().join("out.txt"))?;
        assert!(output.contains(&format!("] {url_one}\n/api/one\n")));
        assert!(output.contains(&format!("] {url_two}\n/api/two\n")));
        assert_eq!(output.lines().count(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_pattern_file_missing() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/app.js")
            .with_status(200)
            .with_body("get('/api/one')")
            .create_async()
            .await;
        let url = server.url() + "/app.js";
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg("--no-config")
            .arg("-u")
            .arg(&url);

        cmd.assert()
            .success()
            .stdout(contains("[ ! ] Failed to read regex patterns : "));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__custom_pattern_file_flag() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/app.js")
            .with_status(200)
            .with_body("route('/v2/things')")
            .create_async()
            .await;
        let url = server.url() + "/app.js";
        let dir = workspace(API_PATTERN)?;
        fs::write(dir.path().join("custom.txt"), "/v2/[a-z]+\n")?;
        let mut cmd = command(&dir)?;

        cmd.arg("-u").arg(&url).arg("--patterns").arg("custom.txt");

        cmd.assert()
            .success()
            .stdout(contains("/v2/things\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_url_list_missing() -> TestResult {
        let dir = workspace(API_PATTERN)?;
        let mut cmd = command(&dir)?;

        cmd.arg("-l").arg("does-not-exist.txt");

        cmd.assert()
            .failure()
            .stdout(starts_with("Error opening file:"));
        Ok(())
    }

    #[test]
    fn test_output__when_config_invalid() -> TestResult {
        let dir = workspace(API_PATTERN)?;
        fs::write(dir.path().join("bad.toml"), "timeout = 0\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg("--config")
            .arg("bad.toml")
            .arg("-u")
            .arg("http://127.0.0.1:1/app.js");

        cmd.assert().failure().stderr(contains("Error:"));
        Ok(())
    }
}
