//! Catalog list derivation.
//!
//! Computes the visible, ordered subset of the product catalog for the
//! current scope/search/filter/sort parameters. Stages run in a fixed
//! order — scope, search, price bounds, minimum stock, stock bucket — and
//! only narrow the list; ordering changes happen in the single stable sort
//! at the end.

pub mod dto;

pub use dto::{CatalogListParams, FilterSpec};

use crate::domain::a001_product::Product;
use crate::enums::{SortKey, SortOption};
use crate::shared::search::Searchable;
use std::cmp::Ordering;

/// Derive the ordered catalog subset for the given parameters.
///
/// Pure and total: never fails for well-formed input, never mutates `items`,
/// and an empty result is a valid outcome (the caller renders the empty
/// state). Equal sort keys retain their relative input order.
pub fn derive(items: &[Product], params: &CatalogListParams) -> Vec<Product> {
    let mut result: Vec<Product> = items
        .iter()
        .filter(|item| in_scope(item, params))
        .filter(|item| item.matches_query(&params.search))
        .filter(|item| passes_filters(item, &params.filters))
        .cloned()
        .collect();

    sort_products(&mut result, params.sort);
    result
}

/// Category/subcategory scope check.
///
/// A subcategory is only meaningful together with its owning category: when
/// both are set both must match, and a subcategory without a category matches
/// nothing (fail soft to an empty list rather than guessing).
fn in_scope(item: &Product, params: &CatalogListParams) -> bool {
    match (&params.category_id, &params.subcategory) {
        (None, None) => true,
        (Some(category), None) => item.category_id == *category,
        (Some(category), Some(subcategory)) => {
            item.category_id == *category
                && item.subcategory.as_deref() == Some(subcategory.as_str())
        }
        (None, Some(_)) => false,
    }
}

fn passes_filters(item: &Product, filters: &FilterSpec) -> bool {
    if let Some(min_price) = filters.min_price {
        if item.base_price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if item.base_price > max_price {
            return false;
        }
    }
    if let Some(min_stock) = filters.min_stock {
        if item.stock_quantity < min_stock {
            return false;
        }
    }
    filters.stock_status.matches(item.stock_quantity)
}

/// Stable sort by the chosen key; ties keep their input order
pub fn sort_products(items: &mut [Product], sort: SortOption) {
    items.sort_by(|a, b| {
        let cmp = compare_by_key(a, b, sort.key());
        if sort.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

fn compare_by_key(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.base_price.cmp(&b.base_price),
        SortKey::Stock => a.stock_quantity.cmp(&b.stock_quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductDto;
    use crate::enums::StockStatus;

    fn product(name: &str, sku: &str, category: &str, price: i64, stock: u32) -> Product {
        Product::new_for_insert(&ProductDto {
            name: name.to_string(),
            sku: sku.to_string(),
            category_id: category.to_string(),
            base_price: price,
            stock_quantity: stock,
            reorder_level: 10,
            unit: "piece".to_string(),
            ..Default::default()
        })
    }

    fn with_subcategory(mut p: Product, sub: &str) -> Product {
        p.subcategory = Some(sub.to_string());
        p
    }

    fn catalog() -> Vec<Product> {
        vec![
            with_subcategory(
                product("HD Foundation", "34/9492/0", "makeup", 50_000, 150),
                "Foundations",
            ),
            with_subcategory(
                product("Matte Lipstick", "34/9492/1", "makeup", 100_000, 300),
                "Lipstick",
            ),
            with_subcategory(
                product("Sterling Bottle", "SB-100", "personal-care", 65_000, 0),
                "Skincare",
            ),
            with_subcategory(
                product("Lip Balm", "glass-bottle-12", "personal-care", 8_000, 40),
                "Lip Care",
            ),
        ]
    }

    #[test]
    fn no_params_returns_everything_name_sorted() {
        let items = catalog();
        let result = derive(&items, &CatalogListParams::default());
        assert_eq!(result.len(), items.len());
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["HD Foundation", "Lip Balm", "Matte Lipstick", "Sterling Bottle"]
        );
    }

    #[test]
    fn category_scope_narrows() {
        let result = derive(
            &catalog(),
            &CatalogListParams {
                category_id: Some("makeup".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.category_id == "makeup"));
    }

    #[test]
    fn subcategory_requires_matching_category() {
        let params = CatalogListParams {
            category_id: Some("makeup".to_string()),
            subcategory: Some("Lipstick".to_string()),
            ..Default::default()
        };
        let result = derive(&catalog(), &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Matte Lipstick");

        // Same subcategory under the wrong category matches nothing
        let params = CatalogListParams {
            category_id: Some("personal-care".to_string()),
            subcategory: Some("Lipstick".to_string()),
            ..Default::default()
        };
        assert!(derive(&catalog(), &params).is_empty());
    }

    #[test]
    fn subcategory_without_category_yields_empty() {
        let params = CatalogListParams {
            subcategory: Some("Lipstick".to_string()),
            ..Default::default()
        };
        assert!(derive(&catalog(), &params).is_empty());
    }

    #[test]
    fn search_hits_name_and_sku_but_not_unrelated() {
        let params = CatalogListParams {
            search: "bottle".to_string(),
            ..Default::default()
        };
        let result = derive(&catalog(), &params);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        // "Sterling Bottle" by name, "Lip Balm" by sku; "Matte Lipstick" stays out
        assert_eq!(names, ["Lip Balm", "Sterling Bottle"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let params = CatalogListParams {
            filters: FilterSpec {
                min_price: Some(8_000),
                max_price: Some(65_000),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = derive(&catalog(), &params);
        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|p| p.base_price >= 8_000 && p.base_price <= 65_000));
    }

    #[test]
    fn min_stock_drops_below_threshold() {
        let params = CatalogListParams {
            filters: FilterSpec {
                min_stock: Some(100),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = derive(&catalog(), &params);
        assert!(result.iter().all(|p| p.stock_quantity >= 100));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn out_of_stock_bucket_selects_only_zero_stock() {
        // Spec scenario: prices {100, 200, 300}, stock {0, 10, 60}
        let items = vec![
            product("A", "1", "makeup", 100, 0),
            product("B", "2", "makeup", 200, 10),
            product("C", "3", "makeup", 300, 60),
        ];
        let params = CatalogListParams {
            filters: FilterSpec {
                stock_status: StockStatus::OutOfStock,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = derive(&items, &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].base_price, 100);
    }

    #[test]
    fn price_desc_orders_high_to_low() {
        let items = vec![
            product("A", "1", "makeup", 200, 1),
            product("B", "2", "makeup", 100, 1),
            product("C", "3", "makeup", 300, 1),
        ];
        let params = CatalogListParams {
            sort: SortOption::PriceDesc,
            ..Default::default()
        };
        let prices: Vec<i64> = derive(&items, &params).iter().map(|p| p.base_price).collect();
        assert_eq!(prices, [300, 200, 100]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let items = vec![
            product("Zeta", "1", "makeup", 500, 7),
            product("Alpha", "2", "makeup", 500, 7),
            product("Mid", "3", "makeup", 500, 7),
        ];
        let params = CatalogListParams {
            sort: SortOption::PriceAsc,
            ..Default::default()
        };
        let names: Vec<String> = derive(&items, &params).iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn derivation_is_idempotent_and_never_grows() {
        let items = catalog();
        let params = CatalogListParams {
            category_id: Some("personal-care".to_string()),
            search: "l".to_string(),
            sort: SortOption::StockDesc,
            ..Default::default()
        };
        let first = derive(&items, &params);
        let second = derive(&items, &params);
        assert!(first.len() <= items.len());
        let ids_first: Vec<String> = first.iter().map(|p| p.to_string_id()).collect();
        let ids_second: Vec<String> = second.iter().map(|p| p.to_string_id()).collect();
        assert_eq!(ids_first, ids_second);
    }

    #[test]
    fn returned_items_satisfy_every_active_predicate() {
        let items = catalog();
        let params = CatalogListParams {
            category_id: Some("personal-care".to_string()),
            search: "bottle".to_string(),
            filters: FilterSpec {
                max_price: Some(70_000),
                stock_status: StockStatus::OutOfStock,
                ..Default::default()
            },
            ..Default::default()
        };
        for item in derive(&items, &params) {
            assert_eq!(item.category_id, "personal-care");
            assert!(item.matches_query("bottle"));
            assert!(item.base_price <= 70_000);
            assert_eq!(item.stock_quantity, 0);
        }
    }
}
