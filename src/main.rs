use std::path::Path;

use clap::Parser;
use tracing::debug;

use fastfood_macros::catalog::{sort_by_nutrient, sum_totals, Catalog, Selection};
use fastfood_macros::cli::{Cli, Command};
use fastfood_macros::config::Settings;
use fastfood_macros::error::Result;
use fastfood_macros::export::{export_items, ExportFormat};
use fastfood_macros::interface::{
    display_menu, display_numbered, display_totals, prompt_browse_mode, prompt_choice,
    prompt_meal_selection, prompt_search, BrowseMode,
};
use fastfood_macros::logging::init_logging;
use fastfood_macros::models::{MenuItem, Nutrient};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(&cli.config)?
        .with_overrides(cli.file.clone(), cli.default_restaurant.clone())?;
    debug!(?settings, "resolved settings");

    let catalog = Catalog::load(&settings.menu_path, &settings.loader())?;
    if catalog.is_empty() {
        println!(
            "No menu data found at {}. Nothing to show.",
            settings.menu_path.display()
        );
        return Ok(());
    }

    match cli.command.unwrap_or_default() {
        Command::Build => cmd_build(&catalog),
        Command::Restaurants { sorted } => {
            cmd_restaurants(&catalog, sorted);
            Ok(())
        }
        Command::Categories { restaurant, filter } => {
            cmd_categories(&catalog, &restaurant, filter.as_deref());
            Ok(())
        }
        Command::Items {
            restaurant,
            category,
            sort_by,
            desc,
        } => {
            cmd_items(&catalog, &restaurant, category.as_deref(), sort_by, desc);
            Ok(())
        }
        Command::Search { query, restaurant } => {
            cmd_search(&catalog, &query, restaurant.as_deref());
            Ok(())
        }
        Command::Totals {
            names,
            ids,
            rows,
            detailed,
        } => {
            cmd_totals(&catalog, names, ids, rows, detailed);
            Ok(())
        }
        Command::Export { out, format } => cmd_export(&catalog, &out, format),
    }
}

fn cmd_restaurants(catalog: &Catalog, sorted: bool) {
    let names: Vec<&str> = if sorted {
        catalog.restaurants_sorted()
    } else {
        catalog.restaurants().iter().map(String::as_str).collect()
    };
    display_numbered("Restaurants", &names);
}

fn cmd_categories(catalog: &Catalog, restaurant: &str, filter: Option<&str>) {
    let categories = catalog.filter_categories(restaurant, filter.unwrap_or(""));
    display_numbered(&format!("{} categories", restaurant), &categories);
}

fn cmd_items(
    catalog: &Catalog,
    restaurant: &str,
    category: Option<&str>,
    sort_by: Option<Nutrient>,
    desc: bool,
) {
    let mut rows = match category {
        Some(category) => catalog.items_in(restaurant, category),
        None => catalog.menu(restaurant),
    };
    if let Some(nutrient) = sort_by {
        sort_by_nutrient(&mut rows, nutrient, !desc);
    }

    let title = match category {
        Some(category) => format!("{} / {}", restaurant, category),
        None => restaurant.to_string(),
    };
    display_menu(&title, &rows);
}

fn cmd_search(catalog: &Catalog, query: &str, restaurant: Option<&str>) {
    let results = match restaurant {
        Some(restaurant) => catalog.search_in(restaurant, query),
        None => catalog.search(query),
    };
    if results.is_empty() {
        println!("No matches for '{}'.", query);
        return;
    }
    display_menu(&format!("Matches for '{}'", query), &results);
}

fn cmd_totals(
    catalog: &Catalog,
    names: Vec<String>,
    ids: Vec<u64>,
    rows: Vec<usize>,
    detailed: bool,
) {
    let selections = [
        Selection::Names(names),
        Selection::Ids(ids),
        Selection::Rows(rows),
    ];
    let picked: Vec<&MenuItem> = selections
        .iter()
        .filter(|s| !s.is_empty())
        .flat_map(|s| catalog.select(s))
        .map(|(_, item)| item)
        .collect();

    let totals = sum_totals(picked.iter().copied());
    let labels: Vec<String> = picked.iter().map(|i| i.display_name()).collect();
    display_totals(&totals, &labels, detailed);
}

fn cmd_export(catalog: &Catalog, out: &Path, format: ExportFormat) -> Result<()> {
    export_items(catalog.items(), out, format)?;
    println!("Wrote {} items to {}", catalog.len(), out.display());
    Ok(())
}

/// Interactive flow: restaurant, browse, pick, total.
fn cmd_build(catalog: &Catalog) -> Result<()> {
    println!("Welcome to the Fast Food Meal Planner!");

    let restaurants = catalog.restaurants_sorted();
    let restaurant = restaurants[prompt_choice("Choose a restaurant", &restaurants)?];

    let rows: Vec<usize> = match prompt_browse_mode(restaurant)? {
        BrowseMode::ByCategory => {
            let categories = catalog.categories(restaurant);
            let category = categories[prompt_choice("Choose a category", &categories)?];
            catalog
                .items_in(restaurant, category)
                .into_iter()
                .map(|(row, _)| row)
                .collect()
        }
        BrowseMode::Search => {
            let found = prompt_search(catalog, restaurant)?;
            if found.is_empty() {
                println!("No items were found to build a meal from.");
                return Ok(());
            }
            found
        }
        BrowseMode::FullMenu => catalog
            .menu(restaurant)
            .into_iter()
            .map(|(row, _)| row)
            .collect(),
    };

    let shown: Vec<(usize, &MenuItem)> = rows
        .iter()
        .filter_map(|&row| catalog.get(row).map(|item| (row, item)))
        .collect();
    display_menu("Menu to build from", &shown);
    if shown.is_empty() {
        return Ok(());
    }

    let picks = prompt_meal_selection(shown.len())?;
    let meal: Vec<usize> = picks.into_iter().map(|i| shown[i].0).collect();

    let selection = Selection::Rows(meal);
    let totals = catalog.totals(&selection);
    let labels: Vec<String> = catalog
        .select(&selection)
        .into_iter()
        .map(|(_, item)| item.display_name())
        .collect();

    display_totals(&totals, &labels, false);
    Ok(())
}
