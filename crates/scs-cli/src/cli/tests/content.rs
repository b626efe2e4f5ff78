//! Parse tests for the content commands (resolve, listing, generate).

use super::parse;
use crate::cli::commands::GenerateCommand;
use crate::cli::CliCommand;

#[test]
fn parse_resolve_defaults_to_table() {
    match parse(&["scs", "resolve"]) {
        CliCommand::Resolve { json } => assert!(!json),
        other => panic!("expected Resolve, got {:?}", other),
    }
}

#[test]
fn parse_resolve_json_flag() {
    match parse(&["scs", "resolve", "--json"]) {
        CliCommand::Resolve { json } => assert!(json),
        other => panic!("expected Resolve, got {:?}", other),
    }
}

#[test]
fn parse_listing() {
    assert!(matches!(parse(&["scs", "listing"]), CliCommand::Listing));
}

#[test]
fn parse_generate_text() {
    match parse(&["scs", "generate", "text", "a studio tagline"]) {
        CliCommand::Generate {
            command: GenerateCommand::Text { prompt },
        } => assert_eq!(prompt, "a studio tagline"),
        other => panic!("expected Generate Text, got {:?}", other),
    }
}

#[test]
fn parse_generate_image_with_output() {
    match parse(&[
        "scs",
        "generate",
        "image",
        "a portrait backdrop",
        "--output",
        "backdrop.png",
    ]) {
        CliCommand::Generate {
            command: GenerateCommand::Image { prompt, output },
        } => {
            assert_eq!(prompt, "a portrait backdrop");
            assert_eq!(output.to_str().unwrap(), "backdrop.png");
        }
        other => panic!("expected Generate Image, got {:?}", other),
    }
}

#[test]
fn parse_generate_image_default_output() {
    match parse(&["scs", "generate", "image", "a portrait backdrop"]) {
        CliCommand::Generate {
            command: GenerateCommand::Image { output, .. },
        } => assert_eq!(output.to_str().unwrap(), "generated.png"),
        other => panic!("expected Generate Image, got {:?}", other),
    }
}
