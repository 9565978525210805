use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct SubBreedRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breed")]
    #[serde(rename = "Sub-breed")]
    sub_breed: String,
}

/// Shape of `--output json`.
#[derive(Serialize, Debug)]
pub struct SubBreedsOutput<'a> {
    pub breed: &'a str,
    pub sub_breeds: &'a [String],
}

// -- Row builders --

fn build_sub_breed_rows(breed: &str, sub_breeds: &[String]) -> Vec<SubBreedRow> {
    sub_breeds
        .iter()
        .map(|s| SubBreedRow {
            breed: breed.to_string(),
            sub_breed: s.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_sub_breeds_table(breed: &str, sub_breeds: &[String]) {
    println!("{}", Table::new(build_sub_breed_rows(breed, sub_breeds)));
}

// -- Markdown output --

pub fn print_sub_breeds_markdown(breed: &str, sub_breeds: &[String]) {
    println!("{}", sub_breeds_markdown(breed, sub_breeds));
}

fn sub_breeds_markdown(breed: &str, sub_breeds: &[String]) -> String {
    let mut table = Table::new(build_sub_breed_rows(breed, sub_breeds));
    table.with(Style::markdown());
    table.to_string()
}

// -- CSV output --

pub fn print_sub_breeds_csv(breed: &str, sub_breeds: &[String]) -> Result<()> {
    write_sub_breeds_csv(std::io::stdout(), breed, sub_breeds)
}

fn write_sub_breeds_csv<W: Write>(writer: W, breed: &str, sub_breeds: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in build_sub_breed_rows(breed, sub_breeds) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
