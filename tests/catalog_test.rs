use std::io::Write;

use tempfile::NamedTempFile;

use fastfood_macros::catalog::Catalog;
use fastfood_macros::config::Settings;
use fastfood_macros::loader::{load_menu, LoaderSettings};
use fastfood_macros::models::MenuItem;

const VENDOR_EXPORT: &str = "\u{feff}Brand,Menu Category,Item Description,Serving,Energy,Proteins,Carbohydrate,Total Fat,Sodium,item_id
Chick-fil-A,Entrees,Chicken Sandwich,,440 kcal,28g,41g,17g,\"1,400 mg\",1
Chick-fil-A,Entrees,Nuggets (8 ct),,250,27g,11g,11g,920mg,2
Chick-fil-A,Sides,Waffle Fries (Medium),,420,5,45,24,240,3
Chick-fil-A,Sides,Fruit Cup,Medium,60,1,15,0,0,4
Chick-fil-A,Treats,Milkshake,,n/a,,,,,5
Burger Barn,Burgers,Burger (Large),,\"1,200 kcal\",30g,40,15,,6
Burger Barn,kids,Burger,,300,15,30,12,,7
Burger Barn,Burgers,,,999,,,,,8
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn vendor_catalog() -> (NamedTempFile, Catalog) {
    let file = write_csv(VENDOR_EXPORT);
    let catalog = Catalog::load(file.path(), &LoaderSettings::default()).unwrap();
    (file, catalog)
}

#[test]
fn test_missing_file_is_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let items = load_menu(&path, &LoaderSettings::default()).unwrap();
    assert!(items.is_empty());

    let catalog = Catalog::load(&path, &LoaderSettings::default()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.restaurants().is_empty());
    assert!(catalog.search("burger").is_empty());
}

#[test]
fn test_vendor_headers_bind_through_aliases() {
    let (_file, catalog) = vendor_catalog();

    // The row without an item description is dropped.
    assert_eq!(catalog.len(), 7);

    let sandwich = catalog.get(0).unwrap();
    assert_eq!(sandwich.restaurant, "Chick-fil-A");
    assert_eq!(sandwich.category, "Entrees");
    assert_eq!(sandwich.calories, Some(440.0));
    assert_eq!(sandwich.protein, Some(28.0));
    assert_eq!(sandwich.carbs, Some(41.0));
    assert_eq!(sandwich.fat, Some(17.0));
    assert_eq!(sandwich.sodium, Some(1400.0));
    assert_eq!(sandwich.item_id, Some(1));
    assert_eq!(sandwich.size, None);
}

#[test]
fn test_sizes_from_name_and_column() {
    let (_file, catalog) = vendor_catalog();

    let nuggets = catalog.get(1).unwrap();
    assert_eq!(nuggets.item, "Nuggets");
    assert_eq!(nuggets.size.as_deref(), Some("8 ct"));

    let cup = catalog.get(3).unwrap();
    assert_eq!(cup.item, "Fruit Cup");
    assert_eq!(cup.size.as_deref(), Some("Medium"));
}

#[test]
fn test_unknown_values_stay_absent() {
    let (_file, catalog) = vendor_catalog();

    let shake = catalog.get(4).unwrap();
    assert_eq!(shake.item, "Milkshake");
    assert_eq!(shake.calories, None);
    assert_eq!(shake.protein, None);

    let cup = catalog.get(3).unwrap();
    assert_eq!(cup.fat, Some(0.0));
}

#[test]
fn test_index_invariant_every_item_once() {
    let (_file, catalog) = vendor_catalog();

    let mut count = vec![0usize; catalog.len()];
    for (restaurant, category, rows) in catalog.index().buckets() {
        for &row in rows {
            let item: &MenuItem = &catalog.items()[row];
            assert_eq!(item.restaurant, restaurant);
            assert_eq!(item.category, category);
            count[row] += 1;
        }
    }
    assert!(count.iter().all(|&n| n == 1), "bucket counts: {:?}", count);

    for (row, item) in catalog.items().iter().enumerate() {
        let bucket = catalog.items_in(&item.restaurant, &item.category);
        assert_eq!(bucket.iter().filter(|(r, _)| *r == row).count(), 1);
    }
}

#[test]
fn test_browsing_queries() {
    let (_file, catalog) = vendor_catalog();

    assert_eq!(catalog.restaurants(), &["Chick-fil-A", "Burger Barn"]);
    assert_eq!(catalog.restaurants_sorted(), vec!["Burger Barn", "Chick-fil-A"]);
    assert_eq!(catalog.categories("Burger Barn"), vec!["Burgers", "kids"]);
    assert_eq!(
        catalog.categories("Chick-fil-A"),
        vec!["Entrees", "Sides", "Treats"]
    );
    assert!(catalog.items_in("Burger Barn", "Salads").is_empty());
    assert!(catalog.categories("Taco Town").is_empty());
}

#[test]
fn test_search_by_id_and_name() {
    let (_file, catalog) = vendor_catalog();
    assert!(catalog.has_ids());

    let by_id = catalog.search("3");
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].1.item, "Waffle Fries");

    let by_name = catalog.search("BURGER");
    assert_eq!(by_name.len(), 2);

    let scoped = catalog.search_in("Chick-fil-A", "burger");
    assert!(scoped.is_empty());
}

#[test]
fn test_default_restaurant_from_settings() {
    let file = write_csv("item,calories\nSpicy Deluxe,550\n");
    let settings = Settings::default()
        .with_overrides(None, Some("House Brand".to_string()))
        .unwrap();

    let catalog = Catalog::load(file.path(), &settings.loader()).unwrap();
    assert_eq!(catalog.restaurants(), &["House Brand"]);
    assert_eq!(catalog.categories("House Brand"), vec![""]);
}
