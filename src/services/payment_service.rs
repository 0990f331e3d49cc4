use crate::models::Payment;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// The signed-in member's dues and fee records (dashboard). Payment
/// processing happens elsewhere; this is read-only display data.
pub async fn my_payments(api: &ApiClient, token: &str) -> Result<Vec<Payment>, ApiError> {
    api.get_json("/v1/payments/mine", Some(token)).await
}
