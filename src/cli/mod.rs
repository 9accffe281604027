/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command-line interface
//!
//! With no argument the binary lists every element up to `--max-z` in the
//! three configuration views and closes with the periodic-table grid.
//! Given an element (symbol or atomic number) it prints a single report.
//! `--format json` emits the same data as serialized [`ElementReport`]
//! records.

use anyhow::bail;
use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;

use crate::configuration::{ConfigurationBuilder, Result as ConfigurationResult, SubshellUsage};
use crate::elements::{atomic_number_from_symbol, element_name, element_symbol};
use crate::table::{table_position, PeriodicTable, TablePosition};

#[derive(Parser, Debug)]
#[command(
    name = "aufbau-rs",
    version,
    about = "Ground-state electron shell configurations for the elements"
)]
pub struct Cli {
    /// Element to report on, as a symbol ("Fe") or atomic number ("26").
    /// Omit to list every element.
    element: Option<String>,

    /// Highest atomic number included in the listing
    #[arg(long, default_value_t = 118, value_parser = clap::value_parser!(i32).range(1..=118))]
    max_z: i32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the periodic-table grid at the end of the listing
    #[arg(long)]
    no_table: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything the CLI reports about one element
#[derive(Debug, Clone, Serialize)]
pub struct ElementReport {
    pub atomic_number: i32,
    pub symbol: Option<&'static str>,
    pub name: Option<&'static str>,
    pub configuration: String,
    pub noble_relative: String,
    pub subshells: Vec<SubshellUsage>,
    pub shell_occupancy: Vec<i32>,
    pub table_position: Option<TablePosition>,
}

impl ElementReport {
    /// Assemble the report for one atomic number
    pub fn build(
        builder: &ConfigurationBuilder,
        atomic_number: i32,
    ) -> ConfigurationResult<ElementReport> {
        let configuration = builder.configuration(atomic_number)?;
        let occupancy = builder.shell_occupancy(atomic_number)?;
        Ok(ElementReport {
            atomic_number,
            symbol: element_symbol(atomic_number),
            name: element_name(atomic_number),
            noble_relative: builder.noble_relative_configuration_string(atomic_number)?,
            table_position: table_position(builder, atomic_number)?,
            configuration: configuration.to_string(),
            subshells: configuration.usages().to_vec(),
            shell_occupancy: occupancy.per_shell().to_vec(),
        })
    }
}

/// Dispatch a parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let builder = ConfigurationBuilder::new();
    match &cli.element {
        Some(query) => run_single(&builder, query, cli.format),
        None => run_listing(&builder, cli),
    }
}

fn run_single(
    builder: &ConfigurationBuilder,
    query: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let atomic_number = resolve_element(query)?;
    debug!("resolved query {:?} to atomic number {}", query, atomic_number);
    let report = ElementReport::build(builder, atomic_number)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn run_listing(builder: &ConfigurationBuilder, cli: &Cli) -> anyhow::Result<()> {
    debug!("listing elements 1..={}", cli.max_z);
    match cli.format {
        OutputFormat::Json => {
            let reports = (1..=cli.max_z)
                .map(|atomic_number| ElementReport::build(builder, atomic_number))
                .collect::<ConfigurationResult<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            for atomic_number in 1..=cli.max_z {
                println!(
                    "{:>3}. {}",
                    atomic_number,
                    builder.configuration_string(atomic_number)?
                );
                println!(
                    "     {}",
                    builder.noble_relative_configuration_string(atomic_number)?
                );
                println!("     {}", builder.shell_occupancy_string(atomic_number)?);
            }
            if !cli.no_table {
                let table = PeriodicTable::build(builder, cli.max_z)?;
                println!();
                println!("Periodic table of elements");
                print!("{}", table);
            }
        }
    }
    Ok(())
}

fn print_report(report: &ElementReport) {
    let name = report.name.unwrap_or("unknown element");
    let symbol = report.symbol.unwrap_or("?");
    println!(
        "{} ({}), atomic number {}",
        name, symbol, report.atomic_number
    );
    println!("  configuration: {}", report.configuration);
    println!("  abbreviated:   {}", report.noble_relative);
    let per_shell: Vec<String> = report
        .shell_occupancy
        .iter()
        .map(|electrons| electrons.to_string())
        .collect();
    println!("  shells:        ({})", per_shell.join(","));
    match report.table_position {
        Some(position) => println!(
            "  position:      period {}, group {}",
            position.period, position.group
        ),
        None => println!("  position:      not placed (the f-block series sit outside the grid)"),
    }
}

/// Turn a user query into an atomic number in 1..=118
fn resolve_element(query: &str) -> anyhow::Result<i32> {
    let atomic_number = match query.trim().parse::<i32>() {
        Ok(number) => number,
        Err(_) => match atomic_number_from_symbol(query) {
            Some(number) => number,
            None => bail!(
                "unknown element {:?}: expected a symbol like Fe or an atomic number",
                query
            ),
        },
    };
    if !(1..=118).contains(&atomic_number) {
        bail!(
            "atomic number {} is outside the known elements (1..=118)",
            atomic_number
        );
    }
    Ok(atomic_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_element() {
        assert_eq!(resolve_element("26").unwrap(), 26);
        assert_eq!(resolve_element(" 26 ").unwrap(), 26);
        assert_eq!(resolve_element("Fe").unwrap(), 26);
        assert_eq!(resolve_element("fe").unwrap(), 26);
        assert_eq!(resolve_element("og").unwrap(), 118);
        assert!(resolve_element("0").is_err());
        assert!(resolve_element("-5").is_err());
        assert!(resolve_element("119").is_err());
        assert!(resolve_element("Xx").is_err());
        assert!(resolve_element("").is_err());
    }

    #[test]
    fn test_element_report() {
        let builder = ConfigurationBuilder::new();
        let report = ElementReport::build(&builder, 13).unwrap();
        assert_eq!(report.symbol, Some("Al"));
        assert_eq!(report.name, Some("Aluminium"));
        assert_eq!(report.configuration, "1s2 2s2 2p6 3s2 3p1 ");
        assert_eq!(report.noble_relative, "[Ne] 3s2 3p1 ");
        assert_eq!(report.shell_occupancy, vec![2, 8, 3]);
        assert_eq!(report.subshells.len(), 5);
        let position = report.table_position.unwrap();
        assert_eq!((position.period, position.group), (3, 13));
    }

    #[test]
    fn test_element_report_serializes() {
        let builder = ConfigurationBuilder::new();
        let report = ElementReport::build(&builder, 57).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["atomic_number"], 57);
        assert_eq!(value["symbol"], "La");
        assert!(value["table_position"].is_null());
        assert_eq!(value["shell_occupancy"][0], 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["aufbau-rs"]).unwrap();
        assert!(cli.element.is_none());
        assert_eq!(cli.max_z, 118);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.no_table);
    }

    #[test]
    fn test_cli_rejects_out_of_range_max_z() {
        assert!(Cli::try_parse_from(["aufbau-rs", "--max-z", "0"]).is_err());
        assert!(Cli::try_parse_from(["aufbau-rs", "--max-z", "119"]).is_err());
        let cli = Cli::try_parse_from(["aufbau-rs", "--max-z", "20"]).unwrap();
        assert_eq!(cli.max_z, 20);
    }
}
