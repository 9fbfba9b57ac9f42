//! `/dashboard/*` endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BrandPerformance, Overview, Period};

impl ApiClient {
    /// `GET /dashboard/overview?period=..[&brand=..]`.
    pub async fn overview(&self, period: Period, brand: Option<&str>) -> Result<Overview, ApiError> {
        let mut query = vec![("period", period.as_str().to_string())];
        if let Some(brand) = brand.map(str::trim).filter(|b| !b.is_empty()) {
            query.push(("brand", brand.to_string()));
        }
        self.get("/dashboard/overview", &query).await?.into_data()
    }

    /// `GET /dashboard/brands/performance?period=..`.
    pub async fn brand_performance(&self, period: Period) -> Result<Vec<BrandPerformance>, ApiError> {
        let envelope = self
            .get::<Vec<BrandPerformance>>(
                "/dashboard/brands/performance",
                &[("period", period.as_str().to_string())],
            )
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }
}
