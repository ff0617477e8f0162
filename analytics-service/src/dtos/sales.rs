use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use utoipa::openapi::{ObjectBuilder, Ref, RefOr, Schema, SchemaType};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewSale, Sale};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    #[validate(length(min = 1, message = "Product is required"))]
    #[schema(example = "Розы")]
    pub product: String,

    #[schema(example = 15, minimum = 0)]
    pub quantity: u32,

    #[validate(range(
        min = 0.0,
        max = 1e12,
        message = "Amount must be between 0 and 1e12"
    ))]
    #[schema(example = 7500.0, minimum = 0, maximum = 1e12)]
    pub amount: f64,
}

impl From<CreateSaleRequest> for NewSale {
    fn from(req: CreateSaleRequest) -> Self {
        NewSale {
            product: req.product,
            quantity: req.quantity,
            amount: req.amount,
        }
    }
}

/// Summary over every sale currently in the store.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    #[schema(example = 15000.0)]
    pub total_sales: f64,
    #[schema(example = 30)]
    pub total_quantity: u64,
    /// `0` when no sales have been recorded.
    #[schema(example = 7500.0)]
    pub average_sale: f64,
    #[schema(example = 2)]
    pub sales_count: usize,
    pub sales_data: Vec<Sale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductTotals {
    #[schema(example = 30)]
    pub total_quantity: u64,
    #[schema(example = 15000.0)]
    pub total_amount: f64,
}

/// Totals per product name, serialized as a JSON object whose keys appear in
/// the order each product was first sold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductReport {
    entries: Vec<(String, ProductTotals)>,
    index: HashMap<String, usize>,
}

impl ProductReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sale's quantity and amount to the product's running totals.
    pub fn accumulate(&mut self, product: &str, quantity: u32, amount: f64) {
        let position = match self.index.get(product) {
            Some(&position) => position,
            None => {
                self.entries
                    .push((product.to_string(), ProductTotals::default()));
                self.index
                    .insert(product.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let totals = &mut self.entries[position].1;
        totals.total_quantity += u64::from(quantity);
        totals.total_amount += amount;
    }

    #[cfg(test)]
    pub fn get(&self, product: &str) -> Option<&ProductTotals> {
        self.index.get(product).map(|&position| &self.entries[position].1)
    }

    #[cfg(test)]
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for ProductReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, totals)| (name, totals)))
    }
}

impl<'s> ToSchema<'s> for ProductReport {
    fn schema() -> (&'s str, RefOr<Schema>) {
        let totals: RefOr<Schema> = RefOr::Ref(Ref::from_schema_name("ProductTotals"));
        let object = ObjectBuilder::new()
            .schema_type(SchemaType::Object)
            .description(Some("Totals keyed by product name"))
            .additional_properties(Some(totals))
            .build();

        ("ProductReport", RefOr::T(Schema::Object(object)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_in_first_seen_order() {
        let mut report = ProductReport::new();
        report.accumulate("Розы", 15, 7500.0);
        report.accumulate("Лилии", 3, 2100.0);
        report.accumulate("Астры", 7, 1400.0);
        report.accumulate("Розы", 5, 2500.0);

        let json = serde_json::to_string(&report).unwrap();
        let roses = json.find("Розы").unwrap();
        let lilies = json.find("Лилии").unwrap();
        let asters = json.find("Астры").unwrap();
        assert!(roses < lilies && lilies < asters);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Розы"]["totalQuantity"], 20);
        assert_eq!(value["Розы"]["totalAmount"], 10000.0);
    }

    #[test]
    fn stats_use_camel_case_fields() {
        let stats = SalesStats {
            total_sales: 0.0,
            total_quantity: 0,
            average_sale: 0.0,
            sales_count: 0,
            sales_data: Vec::new(),
        };

        let value = serde_json::to_value(&stats).unwrap();
        for field in [
            "totalSales",
            "totalQuantity",
            "averageSale",
            "salesCount",
            "salesData",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
    }
}
