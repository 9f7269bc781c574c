//! Client for the `/contact` resource.

use artistshub_core::contact::ContactRequest;
use artistshub_core::envelope::Envelope;

use crate::http::{ApiClient, ApiError};
use crate::models::ContactMessage;

#[derive(Clone)]
pub struct ContactApi {
    client: ApiClient,
}

impl ContactApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn submit(
        &self,
        request: &ContactRequest,
    ) -> Result<Envelope<ContactMessage>, ApiError> {
        self.client.post("/contact", request).await
    }
}
