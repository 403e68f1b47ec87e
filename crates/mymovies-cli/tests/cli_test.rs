#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_commands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mymovies");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movie"))
        .stdout(predicate::str::contains("favorites"));
}

#[test]
fn test_movie_details_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mymovies");
    cmd.args(["movie", "details", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"));
}

#[test]
fn test_movie_details_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mymovies");
    cmd.args(["movie", "details"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_discover_missing_token() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mymovies");
    cmd.env_remove("TMDB_API_TOKEN")
        .args(["--dir", dir.path().to_str().unwrap(), "discover"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB_API_TOKEN"));
}

#[test]
fn test_favorites_lifecycle() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    // Act & Assert
    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));

    cargo_bin_cmd!("mymovies")
        .args([
            "--dir",
            dir_arg,
            "favorites",
            "add",
            "--id",
            "27205",
            "--title",
            "Inception",
            "--poster",
            "/inception.jpg",
        ])
        .assert()
        .success();

    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains("/inception.jpg"));

    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "favorites", "contains", "--id", "27205"])
        .assert()
        .success()
        .stdout(predicate::str::contains("27205: yes"));

    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "favorites", "remove", "--id", "27205"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 27205"));

    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "favorites", "contains", "--id", "27205"])
        .assert()
        .success()
        .stdout(predicate::str::contains("27205: no"));
}

#[test]
fn test_config_set_then_show() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    // Act
    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "config", "set", "--language", "ja-JP"])
        .assert()
        .success();

    // Assert
    assert!(dir.path().join("config.toml").exists());
    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language = ja-JP"));
}

#[test]
fn test_config_set_rejects_invalid_base_url() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    cargo_bin_cmd!("mymovies")
        .args([
            "--dir",
            dir.path().to_str().unwrap(),
            "config",
            "set",
            "--base-url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base_url"));
}

#[tokio::test]
async fn test_search_against_mock_server() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    let json_body = include_str!("../../../fixtures/tmdb/search_movie_inception.json");
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/3/search/movie"))
        .and(wiremock::matchers::query_param("query", "Inception"))
        .and(wiremock::matchers::header("Authorization", "Bearer test-token"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[tmdb]\nbase_url = \"{}/3/\"\n", mock_server.uri()),
    )
    .unwrap();

    // Act & Assert
    cargo_bin_cmd!("mymovies")
        .env("TMDB_API_TOKEN", "test-token")
        .args([
            "--dir",
            dir.path().to_str().unwrap(),
            "search",
            "--query",
            "Inception",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("27205"))
        .stdout(predicate::str::contains("Total: 1 movies"));
}

#[tokio::test]
async fn test_movie_details_http_error_fails() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/3/movie/0"))
        .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(
            r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#,
        ))
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[tmdb]\nbase_url = \"{}/3/\"\n", mock_server.uri()),
    )
    .unwrap();

    // Act & Assert
    cargo_bin_cmd!("mymovies")
        .env("TMDB_API_TOKEN", "test-token")
        .args([
            "--dir",
            dir.path().to_str().unwrap(),
            "movie",
            "details",
            "--id",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}

#[tokio::test]
async fn test_config_base_url_without_trailing_slash() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    let json_body = include_str!("../../../fixtures/tmdb/movie_details_27205.json");
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/3/movie/27205"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    let base_url = format!("{}/3", mock_server.uri());
    cargo_bin_cmd!("mymovies")
        .args(["--dir", dir_arg, "config", "set", "--base-url", &base_url])
        .assert()
        .success();

    // Act & Assert
    cargo_bin_cmd!("mymovies")
        .env("TMDB_API_TOKEN", "test-token")
        .args(["--dir", dir_arg, "movie", "details", "--id", "27205"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Inception"));
}
