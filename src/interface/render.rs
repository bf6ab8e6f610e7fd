use crate::models::{MenuItem, Nutrient, Totals};

/// Print a numbered list of names.
pub fn display_numbered(title: &str, names: &[&str]) {
    if names.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ===", title);
    for (i, name) in names.iter().enumerate() {
        let shown = if name.is_empty() { "(uncategorized)" } else { *name };
        println!("{:>3}: {}", i + 1, shown);
    }
    println!();
}

/// Print menu rows, numbered from 1, aligned on the item column.
pub fn display_menu(title: &str, rows: &[(usize, &MenuItem)]) {
    if rows.is_empty() {
        println!("No items found.");
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, rows.len());
    println!();

    let names: Vec<String> = rows.iter().map(|(_, item)| item.display_name()).collect();
    let width = name_width(&names);

    for (i, ((row, item), name)) in rows.iter().zip(&names).enumerate() {
        let summary = item.summary_line();
        let summary = if summary.is_empty() { "no nutrition data" } else { summary.as_str() };
        println!(
            "{:>3}: {:<width$}  [row {}] {}  {}",
            i + 1,
            name,
            row,
            item.category,
            summary
        );
    }
    println!();
}

/// Widest name in characters, which is what `{:<width$}` pads by.
fn name_width(names: &[String]) -> usize {
    names.iter().map(|n| n.chars().count()).max().unwrap_or(10)
}

/// Print every known nutrient of one item.
pub fn display_item_details(item: &MenuItem) {
    println!();
    println!("--- Details for: {} ---", item.display_name());
    println!("Restaurant: {}", item.restaurant);
    if !item.category.is_empty() {
        println!("Category: {}", item.category);
    }
    if let Some(id) = item.item_id {
        println!("Id: {}", id);
    }
    for nutrient in Nutrient::ALL {
        if let Some(value) = item.nutrient(nutrient) {
            println!("{}: {} {}", nutrient.label(), value, nutrient.unit());
        }
    }
}

/// Print meal totals. `detailed` adds every extended nutrient.
pub fn display_totals(totals: &Totals, names: &[String], detailed: bool) {
    println!();
    println!("--- Your Meal's Nutritional Totals ---");
    if !names.is_empty() {
        println!("Items: {}", names.join(", "));
    }

    for (label, value) in totals.summary() {
        println!("{}: {:.0}", label, value);
    }

    if detailed {
        for nutrient in Nutrient::ALL.into_iter().skip(Nutrient::CORE.len()) {
            println!(
                "Total {} ({}): {:.1}",
                nutrient.label(),
                nutrient.unit(),
                totals.get(nutrient)
            );
        }
    }
    println!();
}
