mod data;

use anyhow::{anyhow, Context, Result};
use clap::{arg, Command};
use data::MapData;
use irrigation_model::{Assignment, EvaluatedAssignment, ResultTable, TechniqueProblem};
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("irrigation-cli")
        .about("Evaluates irrigation technique assignments")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Evaluates one assignment and prints its objectives")
                .arg(
                    arg!(<DATA> "Map data json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<ASSIGNMENT> "Assignment json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("pareto")
                .about("Evaluates a population and writes its Pareto-efficient result table")
                .arg(
                    arg!(<DATA> "Map data json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<POPULATION> "Population json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--out [OUT] "Write the table to a file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--sep [SEP] "Field separator for the table")
                        .default_value(",")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("evaluate", sub_m)) => evaluate_assignment(
            sub_m.get_one::<String>("DATA").unwrap().clone(),
            sub_m.get_one::<String>("ASSIGNMENT").unwrap().clone(),
        ),
        Some(("pareto", sub_m)) => pareto_table(
            sub_m.get_one::<String>("DATA").unwrap().clone(),
            sub_m.get_one::<String>("POPULATION").unwrap().clone(),
            sub_m.get_one::<PathBuf>("out").cloned(),
            sub_m.get_one::<String>("sep").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_problem(data: &str) -> Result<TechniqueProblem> {
    let json = read_input(data)?;
    let map_data = serde_json::from_str::<MapData>(&json).context("Failed to parse map data")?;
    Ok(TechniqueProblem::new(map_data.build()?))
}

fn evaluate_assignment(data: String, assignment: String) -> Result<()> {
    let problem = load_problem(&data)?;
    let json = read_input(&assignment)?;
    let assignment =
        serde_json::from_str::<Assignment>(&json).context("Failed to parse assignment")?;
    let objectives = problem.evaluate(&assignment)?;
    println!("{}", serde_json::to_string(&objectives)?);
    Ok(())
}

fn pareto_table(data: String, population: String, out: Option<PathBuf>, sep: String) -> Result<()> {
    let problem = load_problem(&data)?;
    let json = read_input(&population)?;
    let assignments =
        serde_json::from_str::<Vec<Assignment>>(&json).context("Failed to parse population")?;

    let mut evaluated = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let objectives = problem.evaluate(&assignment)?;
        evaluated.push(EvaluatedAssignment {
            assignment,
            objectives,
        });
    }

    let table = ResultTable::from_population(&evaluated).to_delimited(&sep);
    match out {
        Some(path) => fs::write(&path, table)
            .with_context(|| format!("Failed to write table to {}", path.display()))?,
        None => print!("{}", table),
    }
    Ok(())
}

/// '-' reads stdin, a *.json argument is a file path, anything else is the
/// literal json string.
fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).with_context(|| format!("Failed to read file: {}", arg))
    } else {
        Ok(arg.to_string())
    }
}
