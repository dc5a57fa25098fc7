//! The demonstration pipeline and its report.

use sequence_handler::{Anon2, SequenceHandler};
use serde::Serialize;

use crate::Result;
use crate::config::{Config, OutputFormat};
use crate::product::Product;

/// Everything the demonstration computes over the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub contains_book: bool,
    pub first: Product,
    /// Products between "Radio" and the 200.00 item, over 30, by price descending.
    pub featured: Vec<Anon2<String, f64>>,
    pub most_expensive: Product,
    pub longest_name: Product,
    pub lowest_price: f64,
    pub cheapest: Product,
    pub shortest_name: Product,
    pub shortest_name_text: String,
    pub products: Vec<Product>,
}

impl Report {
    /// Renders the report in the configured output format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Renders the report as plain lines.
    pub fn render_text(&self) -> String {
        let mut lines = vec![self.contains_book.to_string(), self.first.to_string()];
        lines.extend(
            self.featured
                .iter()
                .map(|anon| format!("Product name = {}, Price = {:.2}", anon.a, anon.b)),
        );
        lines.push(self.most_expensive.to_string());
        lines.push(self.longest_name.to_string());
        lines.push(format!("{:.2}", self.lowest_price));
        lines.push(self.cheapest.to_string());
        lines.push(self.shortest_name.to_string());
        lines.push(self.shortest_name_text.clone());
        lines.push(String::new());
        lines.extend(self.products.iter().map(Product::to_string));
        lines.join("\n")
    }
}

/// Runs the demonstration queries over `products`.
#[tracing::instrument(skip_all, fields(products = products.len(), markup = config.price_markup))]
pub fn build_report(products: &SequenceHandler<Product>, config: &Config) -> Result<Report> {
    let markup = config.price_markup;

    let featured = products
        .skip_from_match_onward(|p| p.name == "Radio")
        .take_until_inclusive(|p| p.price == 200.00)
        .filter(|p| p.price > 30.0)
        .order_by(|p| p.price, false)
        .select_new2(|p| p.name.clone(), |p| p.price * markup);
    tracing::debug!(featured = %featured.map(|anon| anon.a.clone()), "featured products selected");

    let report = Report {
        contains_book: products.contains_any(|p| p.name == "Book"),
        first: products.first()?.clone(),
        featured: featured.into_inner(),
        most_expensive: products.max_by(|p| p.price)?.clone(),
        longest_name: products.max_by_length_of(|p| p.name.clone())?.clone(),
        lowest_price: products.map(|p| p.price).min()?,
        cheapest: products.min_by(|p| p.price)?.clone(),
        shortest_name: products.min_by_length_of(|p| p.name.clone())?.clone(),
        shortest_name_text: products.map(|p| p.name.clone()).min_by_length()?.clone(),
        products: products.to_sequence(),
    };

    tracing::info!(
        most_expensive = %report.most_expensive.name,
        cheapest = %report.cheapest.name,
        "report built"
    );
    Ok(report)
}
