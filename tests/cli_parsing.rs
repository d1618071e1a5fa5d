use clap::Parser;
use mortgage_calculator::cli::{Cli, Commands};
use mortgage_calculator::{LoanParams, Program};
use std::path::PathBuf;

#[test]
fn test_parse_calculate() {
    let cli = Cli::try_parse_from(vec![
        "mortgage-calculator",
        "calculate",
        "--object-cost",
        "5000000",
        "--initial-payment",
        "1000000",
        "--months",
        "240",
        "--salary",
    ])
    .unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Calculate(args) => {
            let request = args.to_request();
            assert_eq!(request.params, LoanParams::new(5_000_000, 1_000_000, 240));
            assert_eq!(request.program, Program::salary());
        }
        Commands::Serve(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_calculate_without_program() {
    let cli = Cli::try_parse_from(vec![
        "mortgage-calculator",
        "calculate",
        "--object-cost",
        "5000000",
        "--initial-payment",
        "1000000",
        "--months",
        "240",
    ])
    .unwrap();

    match cli.command {
        Commands::Calculate(args) => assert_eq!(args.to_request().program, Program::default()),
        Commands::Serve(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_calculate_requires_amounts() {
    let result = Cli::try_parse_from(vec![
        "mortgage-calculator",
        "calculate",
        "--months",
        "240",
        "--base",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_json_flag() {
    let cli = Cli::try_parse_from(vec![
        "mortgage-calculator",
        "calculate",
        "--object-cost",
        "3000000",
        "--initial-payment",
        "600000",
        "--months",
        "180",
        "--military",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
}

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(vec!["mortgage-calculator", "serve"]).unwrap();

    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.config, PathBuf::from("config.yml"));
        }
        Commands::Calculate(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_serve_overrides() {
    let cli = Cli::try_parse_from(vec![
        "mortgage-calculator",
        "serve",
        "--config",
        "/etc/mortgage/config.yml",
        "--port",
        "9090",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.config, PathBuf::from("/etc/mortgage/config.yml"));
            assert_eq!(args.port, Some(9090));
        }
        Commands::Calculate(_) => panic!("Wrong top-level command"),
    }
}
