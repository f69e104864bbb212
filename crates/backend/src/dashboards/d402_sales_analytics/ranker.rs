use contracts::dashboards::d402_sales_analytics::ProductSalesEntry;

use super::catalog::ProductCatalog;
use super::random::RandomSource;

pub const TOP_PRODUCTS_LIMIT: usize = 5;
/// Units added on top of the baseline are drawn from `[0, MAX_UNITS_OFFSET)`
pub const MAX_UNITS_OFFSET: u32 = 20;

/// Best sellers first. Products with equal units keep catalog order.
pub fn rank_top_products<R>(catalog: &ProductCatalog, rng: &mut R) -> Vec<ProductSalesEntry>
where
    R: RandomSource + ?Sized,
{
    let mut entries: Vec<ProductSalesEntry> = catalog
        .products()
        .iter()
        .map(|product| ProductSalesEntry {
            product_id: product.id,
            product_name: product.name.clone(),
            base_units_sold: product.base_units,
            units_sold: product.base_units + rng.uniform_int(0, MAX_UNITS_OFFSET),
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    entries.truncate(TOP_PRODUCTS_LIMIT);
    entries
}
