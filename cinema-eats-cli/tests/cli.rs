use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn cinema_eats(data_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("cinema-eats");
    cmd.env("CINEMA_EATS_DATA_DIR", data_dir.path())
        .env_remove("CINEMA_EATS_CATALOG")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn list_shows_the_first_page() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodfellas (1990)"))
        .stdout(predicate::str::contains("Showing 6 of 13 (more available)"));
}

#[test]
fn list_applies_filters_and_pages() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .args([
            "list", "--cuisine", "Italian", "--meal", "dinner", "--view",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Filters: cuisine:italian, meal:dinner",
        ))
        .stdout(predicate::str::contains("Showing 3 of 3"))
        .stdout(predicate::str::contains("Eat Pray Love").not());

    cinema_eats(&data)
        .args(["list", "--pages", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 13 of 13\n"));
}

#[test]
fn invalid_filter_values_fail() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .args(["list", "--decade", "nineties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --decade value"));
}

#[test]
fn search_prints_suggestions_and_matches() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .args(["search", "pasta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search \"pasta\": 3 scene(s)"))
        .stdout(predicate::str::contains("[Pasta]"));

    cinema_eats(&data)
        .args(["search", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 characters"));
}

#[test]
fn search_without_matches_says_so() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .args(["search", "xyzzy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenes found."));
}

#[test]
fn favorites_persist_between_runs() {
    let data = TempDir::new().unwrap();

    cinema_eats(&data)
        .args(["favorite", "tampopo-ramen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites: tampopo-ramen"));
    cinema_eats(&data)
        .args(["favorite", "x"])
        .assert()
        .success();

    cinema_eats(&data)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 favorite(s)"))
        .stdout(predicate::str::contains("Tampopo (1985)"));

    cinema_eats(&data)
        .args(["favorite", "tampopo-ramen"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed from favorites: tampopo-ramen",
        ));

    let stored =
        std::fs::read_to_string(data.path().join("foodInMoviesFavorites.json"))
            .unwrap();
    assert_eq!(stored, r#"["x"]"#);
}

#[test]
fn collections_and_facets_are_listed() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .arg("collections")
        .assert()
        .success()
        .stdout(predicate::str::contains("date-night"));

    cinema_eats(&data)
        .args(["collections", "oscar-winners"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spirited Away (2001)"));

    cinema_eats(&data)
        .args(["collections", "nope"])
        .assert()
        .failure();

    cinema_eats(&data)
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"drama\s+9").unwrap());
}

#[test]
fn interactive_session_reads_stdin() {
    let data = TempDir::new().unwrap();
    cinema_eats(&data)
        .arg("interactive")
        .write_stdin(
            "/filter cuisine japanese\n/fav spirited-away-feast\n/quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters: cuisine:japanese"))
        .stdout(predicate::str::contains(
            "Added to favorites: spirited-away-feast",
        ));
}
