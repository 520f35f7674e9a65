//! Storefront API gateway.
//!
//! Translates between the domain types and the two endpoints of the
//! storefront API. Transport is whatever [`Api`] implementation it is given.

use larek_data::{Api, PostMethod};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::catalog::Product;
use crate::checkout::{Order, OrderConfirmation};
use crate::CommerceError;

/// Catalog endpoint.
pub const PRODUCTS_PATH: &str = "/product/";
/// Order endpoint.
pub const ORDER_PATH: &str = "/order/";

/// Body of `GET /product/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    pub items: Vec<Product>,
    pub total: f64,
}

/// Typed client for the storefront API.
#[derive(Debug, Clone)]
pub struct LarekApi<A> {
    api: A,
}

impl<A: Api> LarekApi<A> {
    /// Wrap a request capability.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying request capability.
    pub fn inner(&self) -> &A {
        &self.api
    }

    /// Fetch the full product list.
    #[instrument(skip(self))]
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, CommerceError> {
        debug!("Sending request");
        let body = self.api.get(PRODUCTS_PATH).await?;
        let list: ProductList = decode(PRODUCTS_PATH, body)?;

        if list.total != list.items.len() as f64 {
            debug!(
                total = list.total,
                received = list.items.len(),
                "Product count differs from reported total"
            );
        }
        info!(count = list.items.len(), "Catalog fetched");

        Ok(list.items)
    }

    /// Submit an order. The order is posted as given.
    #[instrument(skip(self, order), fields(items = order.items.len(), total = order.total))]
    pub async fn submit_order(&self, order: &Order) -> Result<OrderConfirmation, CommerceError> {
        debug!("Sending request");
        let payload = serde_json::to_value(order)?;
        let body = self.api.post(ORDER_PATH, payload, PostMethod::Post).await?;
        let confirmation: OrderConfirmation = decode(ORDER_PATH, body)?;

        info!(order_id = %confirmation.id, "Order placed");

        Ok(confirmation)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T, CommerceError> {
    serde_json::from_value(body).map_err(|e| CommerceError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::PaymentMethod;
    use larek_data::{FetchError, InMemoryApi, Method};
    use serde_json::json;

    fn product_list() -> Value {
        json!({
            "total": 2,
            "items": [
                {
                    "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
                    "description": "If you plan to solve tasks in the tracker yourself.",
                    "image": "/5_Dots.svg",
                    "title": "+1 hour in a day",
                    "category": "soft-skill",
                    "price": 750
                },
                {
                    "id": "b06cde61-912f-4663-9751-09956c0eed67",
                    "description": "Will be angry with you if you break the build.",
                    "image": "/Shell.svg",
                    "title": "Mind Shell",
                    "category": "other",
                    "price": null
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_catalog() {
        let api = LarekApi::new(InMemoryApi::new().with_json(Method::Get, PRODUCTS_PATH, product_list()));

        let products = api.fetch_catalog().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, Some(750.0));
        assert_eq!(products[1].price, None);
        assert_eq!(products[1].title, "Mind Shell");
    }

    #[tokio::test]
    async fn test_fetch_catalog_fractional_total() {
        let api = LarekApi::new(InMemoryApi::new().with_json(
            Method::Get,
            PRODUCTS_PATH,
            json!({ "total": 1.5, "items": [] }),
        ));

        assert!(api.fetch_catalog().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_catalog_transport_error() {
        let api = LarekApi::new(InMemoryApi::new().unreachable(Method::Get, PRODUCTS_PATH));

        let err = api.fetch_catalog().await.unwrap_err();
        assert!(matches!(
            err,
            CommerceError::Transport(FetchError::RequestError(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_catalog_wrong_shape() {
        let api = LarekApi::new(InMemoryApi::new().with_json(
            Method::Get,
            PRODUCTS_PATH,
            json!({ "items": "nope" }),
        ));

        match api.fetch_catalog().await {
            Err(CommerceError::UnexpectedResponse { endpoint, .. }) => {
                assert_eq!(endpoint, PRODUCTS_PATH)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_order_posts_body() {
        let api = LarekApi::new(InMemoryApi::new().with_json(
            Method::Post,
            ORDER_PATH,
            json!({ "id": "28c57cb4-3002-4445-8aa1-2a06a5055ae5", "total": 750 }),
        ));

        let order = Order {
            payment: PaymentMethod::Cash,
            email: "test@test.ru".to_string(),
            phone: "+71234567890".to_string(),
            address: "Spb Vosstania 1".to_string(),
            items: vec!["854cef69-976d-4c2a-a18c-2aa45046c390".into()],
            total: 750.0,
        };

        let confirmation = api.submit_order(&order).await.unwrap();
        assert_eq!(confirmation.id, "28c57cb4-3002-4445-8aa1-2a06a5055ae5");
        assert_eq!(confirmation.total, 750.0);

        let requests = api.inner().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].uri, ORDER_PATH);
        assert_eq!(
            requests[0].body,
            Some(json!({
                "payment": "cash",
                "email": "test@test.ru",
                "phone": "+71234567890",
                "address": "Spb Vosstania 1",
                "items": ["854cef69-976d-4c2a-a18c-2aa45046c390"],
                "total": 750.0
            }))
        );
    }

    #[tokio::test]
    async fn test_submit_order_server_error() {
        let api = LarekApi::new(InMemoryApi::new().with_status(
            Method::Post,
            ORDER_PATH,
            400,
            json!({ "error": "Wrong total" }),
        ));

        let order = Order {
            payment: PaymentMethod::Card,
            email: "a@b.com".to_string(),
            phone: String::new(),
            address: "x".to_string(),
            items: vec!["1".into()],
            total: 1.0,
        };

        let err = api.submit_order(&order).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400: Wrong total");
    }

    #[test]
    fn test_product_list_roundtrip_shape() {
        let list: ProductList = serde_json::from_value(product_list()).unwrap();
        assert_eq!(list.total, 2.0);
        assert!(list.items.iter().any(|p: &Product| !p.is_for_sale()));
    }
}
