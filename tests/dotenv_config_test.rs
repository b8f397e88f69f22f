use std::io::Write;

use clap::Parser;
use notify_token::config::{GenerateArgs, GeneratorConfig};

#[test]
fn test_dotenv_values_sit_below_flags() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "TOKEN_SUBJECT=dotenv-subject").unwrap();
    writeln!(file, "TOKEN_VALIDITY_DAYS=30").unwrap();
    file.flush().unwrap();

    dotenv::from_path(file.path()).expect("load .env");

    let args = GenerateArgs::try_parse_from(["notify-token", "--secret", "s"]).unwrap();
    let config = GeneratorConfig::try_from(args).unwrap();
    assert_eq!(config.subject, "dotenv-subject");
    assert_eq!(config.validity, chrono::Duration::days(30));

    let args = GenerateArgs::try_parse_from([
        "notify-token",
        "--secret",
        "s",
        "--subject",
        "flag-subject",
    ])
    .unwrap();
    let config = GeneratorConfig::try_from(args).unwrap();
    assert_eq!(config.subject, "flag-subject");
}
