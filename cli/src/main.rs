use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process;

use anyhow::{Context, Result};
use champ_engine::{query, resolve, Creature, Type};
use champ_schema::{CreatureInput, VerdictReport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (Some(arg1), Some(arg2)) = (args.next(), args.next()) else {
        eprintln!("Usage: champ <record> <record>");
        eprintln!("  <record> is a JSON file path, an inline JSON object, or - for stdin");
        eprintln!();
        eprintln!("Record shape: {{\"name\": \"squirtle\", \"types\": [\"water\"], \"base_total\": 314}}");
        process::exit(2);
    };

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let p1 = load_creature(&arg1, &mut stdin)?;
    let p2 = load_creature(&arg2, &mut stdin)?;
    tracing::debug!(p1 = %p1.name, p2 = %p2.name, "records decoded");

    let verdict = resolve(&p1, &p2)?;
    tracing::debug!(
        winner = %verdict.winner,
        p1_multiplier = verdict.p1_multiplier,
        p2_multiplier = verdict.p2_multiplier,
        "matchup resolved"
    );

    println!("=== Matchup Analysis ===\n");
    print_profile(&verdict.p1);
    print_profile(&verdict.p2);

    println!(
        "{} vs {}: {}x effectiveness",
        verdict.p1.display_name(),
        verdict.p2.display_name(),
        verdict.p1_multiplier
    );
    println!(
        "{} vs {}: {}x effectiveness",
        verdict.p2.display_name(),
        verdict.p1.display_name(),
        verdict.p2_multiplier
    );
    println!();

    match verdict.winning_creature() {
        Some(creature) => println!("Winner: {}", creature.display_name()),
        None => println!("Winner: draw"),
    }
    println!("Reason: {}", verdict.reasoning);
    println!("Confidence: {:.0}%", verdict.confidence * 100.0);

    let report = VerdictReport::from_verdict(&verdict);
    println!("\n=== Report ===\n");
    println!("{}", report.to_json_pretty()?);

    Ok(())
}

/// Load one creature record from a file path, an inline JSON object, or one
/// stdin line (for `-`). Decode failures are reported as-is, never patched.
fn load_creature(arg: &str, stdin: &mut impl BufRead) -> Result<Creature> {
    let raw = if arg == "-" {
        let mut line = String::new();
        stdin
            .read_line(&mut line)
            .context("reading record from stdin")?;
        line
    } else if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        fs::read_to_string(arg).with_context(|| format!("reading record file {arg}"))?
    };

    let creature = CreatureInput::from_json(&raw)
        .and_then(CreatureInput::into_creature)
        .with_context(|| format!("decoding record from {arg}"))?;
    Ok(creature)
}

fn print_profile(creature: &Creature) {
    println!(
        "{} ({}), power {}",
        creature.display_name(),
        creature.type_names(),
        creature.power
    );
    print_type_list("weak to", &query::weaknesses(&creature.types));
    print_type_list("resists", &query::resistances(&creature.types));
    print_type_list("immune to", &query::immunities(&creature.types));
    println!();
}

fn print_type_list(label: &str, types: &[Type]) {
    if types.is_empty() {
        return;
    }
    let names: Vec<&str> = types.iter().map(Type::as_str).collect();
    println!("  {}: {}", label, names.join(", "));
}
