use anyhow::Result;
use apps_analysis::{apps_in_group, average_below};
use apps_ingest::{explore, with_header};
use apps_model::Marketplace;
use apps_transform::{CleaningStage, rows_named};
use tracing::info;

use apps_cli::pipeline::{
    CleanedCatalog, analyze, ingest, ingest_and_clean, ingest_and_clean_through,
    popularity_label, popularity_normalize,
};
use apps_cli::summary::{print_analysis, print_cleaning_summary, render_listing};

use crate::cli::{AnalyzeArgs, Cli, ExploreArgs, ListArgs, RowsArgs};

pub fn run_explore(cli: &Cli, args: &ExploreArgs) -> Result<()> {
    let markets = match args.market {
        Some(market) => vec![Marketplace::from(market)],
        None => Marketplace::ALL.to_vec(),
    };
    for marketplace in markets {
        let path = cli.path_for(marketplace);
        let table = match args.stage.map(CleaningStage::from) {
            Some(stage) => {
                println!("{marketplace} explored data, after the {stage} stage:");
                ingest_and_clean_through(marketplace, path, stage)?.table
            }
            None => {
                println!("{marketplace} explored data:");
                ingest(marketplace, path)?
            }
        };
        let rows = with_header(&table);
        println!();
        print!("{}", explore(&rows, args.start, args.end, args.counts));
        println!();
        println!("{marketplace} columns:");
        println!("{:?}", table.header);
        println!();
    }
    Ok(())
}

fn clean_all(cli: &Cli) -> Result<Vec<CleanedCatalog>> {
    Marketplace::ALL
        .into_iter()
        .map(|marketplace| ingest_and_clean(marketplace, cli.path_for(marketplace)))
        .collect()
}

pub fn run_clean(cli: &Cli) -> Result<()> {
    let catalogs = clean_all(cli)?;
    print_cleaning_summary(&catalogs);
    Ok(())
}

pub fn run_analyze(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let catalogs = clean_all(cli)?;
    for (position, catalog) in catalogs.iter().enumerate() {
        let analysis = analyze(&catalog.table)?;
        if position > 0 {
            println!();
        }
        print_analysis(&analysis, args.top);
    }
    Ok(())
}

pub fn run_list(cli: &Cli, args: &ListArgs) -> Result<()> {
    let marketplace = Marketplace::from(args.market);
    let catalog = ingest_and_clean(marketplace, cli.path_for(marketplace))?;
    let table = &catalog.table;
    let layout = table.layout();
    let category = layout.resolve(layout.category)?;

    let listed = apps_in_group(
        table,
        category,
        &args.group,
        layout.name,
        layout.popularity,
        &args.only,
    )?;
    info!(group = %args.group, apps = listed.len(), "listed group");
    print!("{}", render_listing(&listed));

    if let Some(threshold) = args.below {
        let average = average_below(
            table,
            category,
            &args.group,
            layout.popularity,
            popularity_normalize(marketplace),
            threshold,
        )?;
        let label = popularity_label(marketplace);
        match average {
            Some(value) => println!("Average {label} below {threshold}: {value}"),
            None => println!("No {} apps with {label} below {threshold}", args.group),
        }
    }
    Ok(())
}

pub fn run_rows(cli: &Cli, args: &RowsArgs) -> Result<()> {
    let marketplace = Marketplace::from(args.market);
    let table = ingest(marketplace, cli.path_for(marketplace))?;
    let rows = rows_named(&table, table.layout().name, &args.name);
    for (_, row) in &rows {
        println!("{row:?}");
        println!();
    }
    println!("{} rows named {:?}", rows.len(), args.name);
    Ok(())
}
