//! Sample rows for the demo table.
//!
//! Generates a deterministic (per seed) list of orders so the table has
//! enough content to make resizing visible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use colresize::{Column, ColumnGroup, ColumnNode, TextAlign};

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis", "Frances"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson", "Hamilton", "Ritchie", "Allen"];
const CITIES: &[(&str, &str)] = &[
    ("Lisbon", "Portugal"),
    ("Tallinn", "Estonia"),
    ("Osaka", "Japan"),
    ("Valparaiso", "Chile"),
    ("Montreal", "Canada"),
    ("Nairobi", "Kenya"),
];
const STATUSES: &[&str] = &["pending", "packed", "shipped", "delivered", "returned"];

/// Something the table body can render.
pub trait TableRow {
    /// Display text for the column with the given key.
    fn cell_text(&self, key: &str) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub country: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub status: String,
}

impl OrderRow {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl TableRow for OrderRow {
    fn cell_text(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "first_name" => self.first_name.clone(),
            "last_name" => self.last_name.clone(),
            "city" => self.city.clone(),
            "country" => self.country.clone(),
            "quantity" => self.quantity.to_string(),
            "unit_price" => format!("{:.2}", self.unit_price),
            "total" => format!("{:.2}", self.total()),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}

/// Generates `count` orders. The same seed always yields the same rows.
pub fn generate_orders(count: usize, seed: u64) -> Vec<OrderRow> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let (city, country) = CITIES.choose(&mut rng).copied().unwrap_or(("", ""));
            OrderRow {
                id: 1000 + i as u32,
                first_name: pick(&mut rng, FIRST_NAMES),
                last_name: pick(&mut rng, LAST_NAMES),
                city: city.to_string(),
                country: country.to_string(),
                quantity: rng.gen_range(1..=24),
                unit_price: f64::from(rng.gen_range(199u32..=99_999)) / 100.0,
                status: pick(&mut rng, STATUSES),
            }
        })
        .collect()
}

fn pick(rng: &mut StdRng, values: &[&str]) -> String {
    values.choose(rng).map(|value| value.to_string()).unwrap_or_default()
}

/// Column tree matching [`OrderRow`]: 9 leaves, some grouped.
pub fn order_columns() -> Vec<ColumnNode> {
    vec![
        Column::new("id", "#").with_align(TextAlign::Right).into(),
        ColumnGroup::new(
            "customer",
            "Customer",
            vec![
                Column::new("first_name", "First name").into(),
                Column::new("last_name", "Last name").into(),
            ],
        )
        .into(),
        ColumnGroup::new(
            "shipping",
            "Shipping",
            vec![Column::new("city", "City").into(), Column::new("country", "Country").into()],
        )
        .into(),
        ColumnGroup::new(
            "amount",
            "Amount",
            vec![
                Column::new("quantity", "Qty").with_align(TextAlign::Right).into(),
                Column::new("unit_price", "Unit price").with_align(TextAlign::Right).into(),
                Column::new("total", "Total").with_align(TextAlign::Right).into(),
            ],
        )
        .into(),
        Column::new("status", "Status").into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use colresize::{collect_leaves, leaf_count};

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_orders(20, 7), generate_orders(20, 7));
        assert_eq!(generate_orders(20, 7).len(), 20);
    }

    #[test]
    fn test_every_leaf_has_cell_text() {
        let columns = order_columns();
        assert_eq!(leaf_count(&columns), 9);

        let row = &generate_orders(1, 1)[0];
        for column in collect_leaves(&columns) {
            assert!(!row.cell_text(&column.key).is_empty(), "empty cell for {}", column.key);
        }
    }

    #[test]
    fn test_total_is_quantity_times_price() {
        let row = OrderRow {
            id: 1,
            first_name: String::new(),
            last_name: String::new(),
            city: String::new(),
            country: String::new(),
            quantity: 3,
            unit_price: 2.5,
            status: String::new(),
        };
        assert_eq!(row.cell_text("total"), "7.50");
        assert_eq!(row.cell_text("unknown"), "");
    }
}
