//! Unit tests for the CLI runtime.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use iteminfo_catalog::CatalogError;
use iteminfo_config::Config;

use super::*;

const DEMO_OUTPUT: &str = "\
ASIN:1234BK|ListedPrice:15.97|Price:13.99|BookTitle:JAVA Blackbook|ISBN:1234567890|EOF

ASIN:5678MV|ListedPrice:15.97|Price:13.99|MovieTitle:Star War|MovieRating:PG-13|EOF

ASIN:013579|ListedPrice:15.97|Price:13.99|UNKNOWN|EOF
";

/// Loader returning a fixed configuration with logging disabled.
struct StubLoader {
    config: Config,
}

impl ConfigLoader for StubLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

struct FailingLoader;

impl ConfigLoader for FailingLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Err(AppError::Catalog(CatalogError::duplicate_identifier("X1")))
    }
}

#[fixture]
fn quiet_config() -> Config {
    Config {
        log_filter: "off".to_owned(),
        ..Config::default()
    }
}

struct Outcome {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str], loader: &impl ConfigLoader) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once("iteminfo")
        .chain(args.iter().copied())
        .map(OsString::from);
    let exit = run_with_loader(argv, &mut stdout, &mut stderr, loader);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
    }
}

#[rstest]
fn demo_identifiers_are_used_without_arguments(quiet_config: Config) {
    let outcome = invoke(&[], &StubLoader { config: quiet_config });
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, DEMO_OUTPUT);
    assert!(outcome.stderr.is_empty());
}

#[rstest]
fn explicit_identifiers_replace_the_demo(quiet_config: Config) {
    let outcome = invoke(&["5678MV"], &StubLoader { config: quiet_config });
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(
        outcome.stdout,
        "ASIN:5678MV|ListedPrice:15.97|Price:13.99|MovieTitle:Star War|MovieRating:PG-13|EOF\n"
    );
}

#[rstest]
fn empty_identifier_aborts_before_dispatch(quiet_config: Config) {
    let outcome = invoke(&["1234BK", " "], &StubLoader { config: quiet_config });
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stdout.is_empty());
    assert!(
        outcome
            .stderr
            .contains("invalid identifier at position 2: item identifier must not be empty"),
        "unexpected stderr: {}",
        outcome.stderr
    );
}

#[rstest]
fn table_catalogue_is_used_when_configured(quiet_config: Config) {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("catalog.json")).expect("UTF-8 path");
    fs::write(
        &path,
        r#"[{"id": "B-1", "category": "book", "title": "Rust", "isbn": "42",
             "price": "9.99", "list_price": "12.00"}]"#,
    )
    .expect("write catalogue");
    let config = Config {
        catalog_path: Some(path),
        ..quiet_config
    };

    let outcome = invoke(&["B-1", "Z-9"], &StubLoader { config });
    assert_eq!(outcome.exit, ExitCode::SUCCESS, "stderr: {}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        "ASIN:B-1|ListedPrice:12.00|Price:9.99|BookTitle:Rust|ISBN:42|EOF\n\n\
         ASIN:Z-9|ListedPrice:0.00|Price:0.00|UNKNOWN|EOF\n"
    );
}

#[rstest]
fn missing_catalogue_file_fails(quiet_config: Config) {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("UTF-8 path");
    let config = Config {
        catalog_path: Some(path),
        ..quiet_config
    };

    let outcome = invoke(&["1234BK"], &StubLoader { config });
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.starts_with("failed to load catalogue"));
}

#[test]
fn loader_errors_are_reported() {
    let outcome = invoke(&["1234BK"], &FailingLoader);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("duplicate catalogue identifier 'X1'"));
}

#[cfg(unix)]
#[test]
fn non_utf8_identifiers_are_rejected() {
    use std::os::unix::ffi::OsStringExt;

    let identifiers = vec![OsString::from_vec(vec![0x66, 0x6f, 0x80])];
    let error = parse_requests(identifiers).expect_err("identifier is not UTF-8");
    assert!(matches!(error, AppError::NonUtf8Identifier(_)));
}

#[test]
fn identifiers_keep_their_order() {
    let requests =
        parse_requests(vec![OsString::from("b"), OsString::from("a")]).expect("valid identifiers");
    let ids: Vec<&str> = requests.iter().map(ItemRequest::id).collect();
    assert_eq!(ids, ["b", "a"]);
}
