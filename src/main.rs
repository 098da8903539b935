mod builder;
mod cli;
mod dom;
mod error_handling;
mod generator;
mod grammar;
mod render;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use rand::prelude::*;
use tracing::{info, warn, Level};

use builder::rail::RailroadLibrary;
use cli::Cli;
use generator::GenerateError;
use grammar::c23::sections::{self, Section};
use grammar::verifier::{verify_references, verify_samples, verify_sections};
use grammar::Registry;
use render::{filter_rule_names, page, Renderer};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Unknown section `{0}`")]
    UnknownSection(String),
    #[error("{0}")]
    Generate(GenerateError),
    #[error("Found {0} problem(s) in the grammar")]
    Verify(usize),
    #[error("Could not write output: {0}")]
    Io(#[from] io::Error),
}

// Samples drawn per rule when checking
const CHECK_ROUNDS: usize = 16;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let registry = grammar::c23::registry();
    if registry.is_empty() {
        warn!("no grammar rules are registered");
    }

    let sections = match &cli.section {
        Some(id) => {
            let section = sections::find(id).ok_or_else(|| AppError::UnknownSection(id.clone()))?;
            std::slice::from_ref(section)
        }
        None => sections::SECTIONS,
    };

    if cli.check {
        return check(&registry, sections, &mut seeded_rng(cli.seed));
    }
    if let Some(rule) = &cli.sample {
        return sample(&registry, rule, cli);
    }
    if cli.list {
        for section in sections {
            for name in filter_rule_names(section.rules.iter().copied(), &cli.filter) {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    let library = RailroadLibrary::new(cli.api_style.into());
    let renderer = Renderer::new(&registry, &library);
    let mut root = page::skeleton(sections);
    renderer.render_all_sections(&mut root, sections, &cli.filter);
    let html = page::document("C23 grammar", RailroadLibrary::css(), &root);

    match &cli.output {
        Some(path) => {
            fs::write(path, html)?;
            info!(path = %path.display(), "wrote page");
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

fn check(registry: &Registry, sections: &[Section], rng: &mut StdRng) -> Result<(), AppError> {
    let problems = [
        verify_references(registry),
        verify_sections(registry, sections),
        verify_samples(registry, rng, CHECK_ROUNDS)
    ]
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect_vec();

    for problem in &problems {
        eprintln!("{}", problem);
    }

    if problems.is_empty() {
        info!(rules = registry.len(), "grammar is consistent");
        Ok(())
    } else {
        Err(AppError::Verify(problems.len()))
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn sample(registry: &Registry, rule: &str, cli: &Cli) -> Result<(), AppError> {
    let mut rng = seeded_rng(cli.seed);

    for _ in 0..cli.amount.unwrap_or(1) {
        let tokens = generator::generate(registry, rule, &mut rng, cli.depth.into()).map_err(AppError::Generate)?;
        println!("{}", tokens.iter().join(" "));
    }
    Ok(())
}
