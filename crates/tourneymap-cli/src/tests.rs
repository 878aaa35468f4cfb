use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["tourneymap"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.data.is_none());
}

#[test]
fn parses_years_command() {
    let cli = Cli::try_parse_from(["tourneymap", "years"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Years)));
}

#[test]
fn parses_show_with_defaults() {
    let cli = Cli::try_parse_from(["tourneymap", "show"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            year: None,
            near: None,
            format: OutputFormat::Text
        })
    ));
}

#[test]
fn parses_show_with_year_near_and_json() {
    let cli = Cli::try_parse_from([
        "tourneymap",
        "show",
        "--year",
        "2024",
        "--near",
        "Austin, TX",
        "--format",
        "json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            year: Some(ref y),
            near: Some(ref n),
            format: OutputFormat::Json
        }) if y == "2024" && n == "Austin, TX"
    ));
}

#[test]
fn data_flag_is_global() {
    let cli = Cli::try_parse_from(["tourneymap", "years", "--data", "https://example.com/t.json"])
        .expect("expected valid cli args");
    assert_eq!(cli.data.as_deref(), Some("https://example.com/t.json"));
}

#[test]
fn parses_browse_command() {
    let cli = Cli::try_parse_from(["tourneymap", "browse", "--format", "json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Browse {
            format: OutputFormat::Json
        })
    ));
}

#[test]
fn rejects_unknown_format() {
    let result = Cli::try_parse_from(["tourneymap", "show", "--format", "xml"]);
    assert!(result.is_err());
}
