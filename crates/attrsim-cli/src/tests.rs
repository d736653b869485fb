use super::*;

#[test]
fn parses_generate_with_defaults() {
    let cli =
        Cli::try_parse_from(["attrsim-cli", "generate"]).expect("expected valid cli args");

    match cli.command {
        Commands::Generate {
            count,
            seed,
            format,
            output,
        } => {
            assert_eq!(count, None);
            assert_eq!(seed, None);
            assert_eq!(format, "csv");
            assert_eq!(output, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_generate_with_overrides() {
    let cli = Cli::try_parse_from([
        "attrsim-cli",
        "generate",
        "--count",
        "25",
        "--seed",
        "7",
        "--format",
        "json",
        "--output",
        "out.json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Generate {
            count,
            seed,
            format,
            output,
        } => {
            assert_eq!(count, Some(25));
            assert_eq!(seed, Some(7));
            assert_eq!(format, "json");
            assert_eq!(output, Some(PathBuf::from("out.json")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_segments_output_dir() {
    let cli = Cli::try_parse_from(["attrsim-cli", "segments", "--output-dir", "cohorts"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Segments { seed, output_dir } => {
            assert_eq!(seed, None);
            assert_eq!(output_dir, Some(PathBuf::from("cohorts")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_analyze_input_and_json() {
    let cli = Cli::try_parse_from(["attrsim-cli", "analyze", "--input", "data.csv", "--json"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Analyze { input, json, .. } => {
            assert_eq!(input, Some(PathBuf::from("data.csv")));
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_simulate_profile_flags() {
    let cli = Cli::try_parse_from([
        "attrsim-cli",
        "simulate",
        "--channel",
        "Email",
        "--image-quality",
        "4.5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Simulate { profile, weights } => {
            assert_eq!(profile.channel, "Email");
            assert!((profile.image_quality - 4.5).abs() < f64::EPSILON);
            assert!((profile.product_views - 3.0).abs() < f64::EPSILON);
            assert_eq!(weights, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_scenario_save() {
    let cli = Cli::try_parse_from([
        "attrsim-cli",
        "scenario",
        "save",
        "--name",
        "spring push",
        "--channel",
        "Influencer",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Scenario {
            command: scenario::ScenarioCommands::Save { name, profile, .. },
        } => {
            assert_eq!(name, "spring push");
            assert_eq!(profile.channel, "Influencer");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_remote_status() {
    let cli = Cli::try_parse_from(["attrsim-cli", "remote", "status"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Remote {
            command: remote::RemoteCommands::Status
        }
    ));
}

#[test]
fn parses_remote_predict_with_weights() {
    let cli = Cli::try_parse_from([
        "attrsim-cli",
        "remote",
        "predict",
        "--time-spent-on-page",
        "200",
        "--weights",
        "config/weights.yaml",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Remote {
            command: remote::RemoteCommands::Predict { profile, weights },
        } => {
            assert!((profile.time_spent_on_page - 200.0).abs() < f64::EPSILON);
            assert_eq!(weights, Some(PathBuf::from("config/weights.yaml")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_missing_subcommand() {
    let result = Cli::try_parse_from(["attrsim-cli"]);

    assert!(result.is_err(), "expected an error: {result:?}");
}

#[test]
fn formats_percentages() {
    assert_eq!(percent(0.304), "30.4%");
    assert_eq!(signed_percent(0.05), "+5.0%");
    assert_eq!(signed_percent(-0.125), "-12.5%");
}
