use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query for `GET /api/sales?startDate=2024-01-01&endDate=2024-01-31`
///
/// Both bounds are kept as raw strings: validation happens server side so
/// that a missing parameter and a malformed one are reported differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalyticsRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One day of the sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesRecord {
    /// Serialized as "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Rounded to cents
    pub revenue: f64,
    pub orders: u32,
}

/// Catalog item ranked by units sold over the requested period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesEntry {
    pub product_id: u32,
    pub product_name: String,
    pub base_units_sold: u32,
    /// Always >= `base_units_sold`
    pub units_sold: u32,
}

/// Inclusive bounds the report was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Response for the sales analytics dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalyticsResponse {
    pub daily_sales: Vec<DailySalesRecord>,
    /// At most five entries, best seller first
    pub top_products: Vec<ProductSalesEntry>,
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
    /// "N/A" when there are no ranked products
    pub top_selling_product: String,
    pub date_range: ReportDateRange,
}

/// Response for `GET /api/sales/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummaryResponse {
    pub total_revenue: f64,
    pub total_orders: u64,
    /// e.g. "Last 30 Days"
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_keys() {
        let response = SalesAnalyticsResponse {
            daily_sales: vec![DailySalesRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                revenue: 1234.5,
                orders: 12,
            }],
            top_products: vec![ProductSalesEntry {
                product_id: 9,
                product_name: "Naxos".to_string(),
                base_units_sold: 58,
                units_sold: 60,
            }],
            total_revenue: 1234.5,
            total_orders: 12,
            average_order_value: 102.88,
            top_selling_product: "Naxos".to_string(),
            date_range: ReportDateRange {
                start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dailySales"][0]["date"], "2024-01-01");
        assert_eq!(json["topProducts"][0]["productName"], "Naxos");
        assert_eq!(json["topProducts"][0]["unitsSold"], 60);
        assert_eq!(json["topSellingProduct"], "Naxos");
        assert_eq!(json["averageOrderValue"], 102.88);
        assert_eq!(json["dateRange"]["end"], "2024-01-01");
    }

    #[test]
    fn test_request_accepts_missing_bounds() {
        let request: SalesAnalyticsRequest =
            serde_json::from_str(r#"{"startDate":"2024-01-01"}"#).unwrap();
        assert_eq!(request.start_date.as_deref(), Some("2024-01-01"));
        assert!(request.end_date.is_none());
    }
}
