//! Library integration tests.

use homotypus::HomotypusError;

#[test]
fn error_types_are_public() {
    let err = HomotypusError::ToolUnavailable {
        tool: "Sass".into(),
    };
    assert_eq!(err.to_string(), "Could not call Sass");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> homotypus::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use homotypus::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["homotypus", "serve-pelican", "--port", "8080"]);
    if let Commands::ServePelican(args) = cli.command {
        assert_eq!(args.port, Some(8080));
    } else {
        panic!("Expected ServePelican command");
    }
}

#[test]
fn modes_round_trip_through_names() {
    use homotypus::mode::BuildMode;

    for mode in BuildMode::ALL {
        assert_eq!(mode.name().parse::<BuildMode>(), Ok(mode));
    }
}

#[test]
fn plan_validates_against_a_project() {
    use homotypus::config::ProjectConfig;
    use homotypus::mode::BuildMode;
    use homotypus::plan::BuildPlan;
    use homotypus::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let plan = BuildPlan::new(BuildMode::Serve)
        .resolve(temp.path(), &ProjectConfig::default())
        .unwrap();

    let mut ui = MockUI::new();
    let outcome = plan.validate(&mut ui);

    assert!(!outcome.passed());
    assert_eq!(outcome.failure_count(), 1);
    assert!(ui.has_error("output"));
}
