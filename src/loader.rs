//! Parsing the three startup feeds and assembling a restaurant.
//!
//! The menu and tables feeds are strict: a structural problem is a
//! [`LoaderError::Malformed`]. The stock feed tolerates a truncated tail: a
//! malformed or short record stops reading and keeps everything parsed so
//! far.

use std::path::Path;

use thiserror::Error;

use crate::domain::{Dish, Ingredient};
use crate::engine::{Menu, Pantry, Restaurant};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {feed} feed: {reason}")]
    Malformed { feed: &'static str, reason: String },
}

impl LoaderError {
    fn malformed(feed: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            feed,
            reason: reason.into(),
        }
    }
}

/// Line cursor over a feed, skipping blank lines and tracking 1-based line
/// numbers for error messages.
struct FeedCursor<'a> {
    feed: &'static str,
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> FeedCursor<'a> {
    fn new(feed: &'static str, input: &'a str) -> Self {
        Self {
            feed,
            lines: input.lines().enumerate(),
        }
    }

    fn next_content_line(&mut self) -> Option<(usize, &'a str)> {
        for (idx, line) in self.lines.by_ref() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Some((idx + 1, trimmed));
            }
        }
        None
    }

    fn require_line(&mut self, what: &str) -> Result<(usize, &'a str), LoaderError> {
        self.next_content_line()
            .ok_or_else(|| LoaderError::malformed(self.feed, format!("missing {what}")))
    }

    fn require_usize(&mut self, what: &str) -> Result<usize, LoaderError> {
        let (line_no, text) = self.require_line(what)?;
        text.split_whitespace()
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| {
                LoaderError::malformed(self.feed, format!("invalid {what} on line {line_no}"))
            })
    }
}

/// Parse the menu feed: category count, then per category a name line, a
/// dish-count line, and per dish a name line plus one line holding the
/// ingredient-reference count followed by that many ids.
///
/// Dishes are prepended as they are read, giving each category its
/// load-reversed traversal order.
pub fn parse_menu(input: &str) -> Result<Menu, LoaderError> {
    let mut cursor = FeedCursor::new("menu", input);
    let category_count = cursor.require_usize("category count")?;

    let mut menu = Menu::new();
    for _ in 0..category_count {
        let (_, category_name) = cursor.require_line("category name")?;
        let category_name = category_name.to_string();
        let index = menu.add_category(category_name.clone());

        let dish_count = cursor.require_usize("dish count")?;
        for _ in 0..dish_count {
            let (_, dish_name) = cursor.require_line("dish name")?;
            let dish_name = dish_name.to_string();

            let (line_no, refs_line) = cursor.require_line("ingredient references")?;
            let mut tokens = refs_line.split_whitespace();
            let ref_count: usize = tokens
                .next()
                .and_then(|tok| tok.parse().ok())
                .ok_or_else(|| {
                    LoaderError::malformed(
                        "menu",
                        format!("invalid ingredient count on line {line_no}"),
                    )
                })?;

            let mut ids = Vec::with_capacity(ref_count);
            for _ in 0..ref_count {
                let id = tokens
                    .next()
                    .and_then(|tok| tok.parse::<u32>().ok())
                    .ok_or_else(|| {
                        LoaderError::malformed(
                            "menu",
                            format!("short ingredient id list on line {line_no}"),
                        )
                    })?;
                ids.push(id);
            }

            menu.insert_dish(index, Dish::new(dish_name, category_name.clone(), ids));
        }
    }
    Ok(menu)
}

/// Parse the stock feed: a bucket-table size line, then two-line records of
/// "id name" and "unit_cost stock_amount".
///
/// A malformed or short record silently ends the feed; this is the
/// documented way a truncated tail is tolerated.
pub fn parse_stock(input: &str) -> Result<Pantry, LoaderError> {
    let mut cursor = FeedCursor::new("stock", input);
    let bucket_count = cursor.require_usize("bucket count")?;
    if bucket_count == 0 {
        return Err(LoaderError::malformed("stock", "bucket count must be positive"));
    }

    let mut pantry = Pantry::new(bucket_count);
    while let Some((_, id_line)) = cursor.next_content_line() {
        let mut parts = id_line.splitn(2, char::is_whitespace);
        let Some(id) = parts.next().and_then(|tok| tok.parse::<u32>().ok()) else {
            break;
        };
        let name = parts.next().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            break;
        }

        let Some((_, cost_line)) = cursor.next_content_line() else {
            break;
        };
        let mut tokens = cost_line.split_whitespace();
        let Some(unit_cost) = tokens.next().and_then(|tok| tok.parse::<f64>().ok()) else {
            break;
        };
        let Some(amount) = tokens.next().and_then(|tok| tok.parse::<i64>().ok()) else {
            break;
        };

        pantry.add(Ingredient::new(id, name, amount, unit_cost));
    }
    Ok(pantry)
}

/// Parse the tables feed: a table count, then per table two integers whose
/// product is that table's seating capacity.
pub fn parse_tables(input: &str) -> Result<Vec<u32>, LoaderError> {
    let mut tokens = input.split_whitespace();
    let mut next_u32 = |what: &str| {
        tokens
            .next()
            .and_then(|tok| tok.parse::<u32>().ok())
            .ok_or_else(|| LoaderError::malformed("tables", format!("missing or invalid {what}")))
    };

    let count = next_u32("table count")? as usize;
    let mut capacities = Vec::with_capacity(count);
    for table in 0..count {
        let rows = next_u32(&format!("row count for table {table}"))?;
        let seats = next_u32(&format!("seat count for table {table}"))?;
        capacities.push(rows * seats);
    }
    Ok(capacities)
}

/// Read and parse all three feeds and open the restaurant (which runs the
/// pricing pass).
pub fn load_restaurant(
    menu_path: &Path,
    stock_path: &Path,
    tables_path: &Path,
) -> Result<Restaurant, LoaderError> {
    let pantry = parse_stock(&read(stock_path)?)?;
    let menu = parse_menu(&read(menu_path)?)?;
    let tables = parse_tables(&read(tables_path)?)?;
    Ok(Restaurant::open(menu, pantry, tables))
}

fn read(path: &Path) -> Result<String, LoaderError> {
    std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })
}
