use serde::Deserialize;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct InvoicingPage {
    pub summary: InvoicingSummary,
    pub invoices: Vec<InvoiceRow>,
    pub page: u32,
    pub total_pages: u32,
}

/// Cost estimation aggregate across all metered traffic.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoicingSummary {
    pub total_cost_low: f64,
    pub total_cost_high: f64,
    pub total_data_gb: f64,
    pub residential_ips: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceRow {
    pub ip: String,
    #[serde(rename = "type")]
    pub ip_type: String,
    #[serde(default)]
    pub is_residential: bool,
    pub data_gb: f64,
    pub cost_low: f64,
    pub cost_high: f64,
}

impl ApiClient {
    pub async fn invoicing(&self, page: u32) -> Result<InvoicingPage, ApiError> {
        self.get_json("/api/admin/invoicing", &[("page", page.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::InvoicingPage;

    #[test]
    fn invoicing_page_parses() {
        let page: InvoicingPage = serde_json::from_str(
            r#"{
                "summary": {
                    "total_cost_low": 1.5,
                    "total_cost_high": 11.25,
                    "total_data_gb": 0.75,
                    "residential_ips": 3
                },
                "invoices": [
                    {"ip":"10.1.2.3","type":"Residential","is_residential":true,
                     "data_gb":0.5,"cost_low":1.0,"cost_high":7.5}
                ],
                "page": 1,
                "total_pages": 1
            }"#,
        )
        .unwrap();
        assert_eq!(page.summary.residential_ips, 3);
        assert_eq!(page.invoices[0].ip_type, "Residential");
        assert!(page.invoices[0].is_residential);
    }
}
