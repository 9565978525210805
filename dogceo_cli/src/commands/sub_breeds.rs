use anyhow::Result;
use clap::Args;
use dogceo_api::BreedFetcher;

use crate::output::{
    print_json, print_sub_breeds_csv, print_sub_breeds_markdown, print_sub_breeds_table,
    OutputFormat, SubBreedsOutput,
};

#[derive(Args)]
pub struct SubBreedsArgs {
    /// Breed name, case-insensitive (e.g. hound)
    pub breed: String,
}

pub fn run(args: &SubBreedsArgs, fetcher: &dyn BreedFetcher, format: &OutputFormat) -> Result<()> {
    let sub_breeds = fetcher.get_sub_breeds(&args.breed)?;
    let breed = args.breed.to_lowercase();

    eprintln!("{} sub-breeds for {}", sub_breeds.len(), breed);

    match format {
        OutputFormat::Table => print_sub_breeds_table(&breed, &sub_breeds),
        OutputFormat::Json => print_json(&SubBreedsOutput {
            breed: &breed,
            sub_breeds: &sub_breeds,
        }),
        OutputFormat::Csv => print_sub_breeds_csv(&breed, &sub_breeds)?,
        OutputFormat::Markdown => print_sub_breeds_markdown(&breed, &sub_breeds),
    }

    Ok(())
}
