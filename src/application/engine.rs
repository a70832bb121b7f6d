use super::repository::Repository;
use crate::domain::order::{Order, OrderFields};
use crate::error::Result;
use std::time::Duration;

/// Runs the two simulated long-running operations: order processing and
/// payment.
///
/// Both sleep for a fixed processing delay. Payment then writes `completed`
/// onto the order unconditionally. Nothing is checked about the order's
/// current status, and repeating a payment repeats the write.
#[derive(Clone)]
pub struct FulfillmentEngine {
    orders: Repository<Order>,
    delay: Duration,
}

impl FulfillmentEngine {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    /// Creates a new `FulfillmentEngine`.
    ///
    /// # Arguments
    ///
    /// * `orders` - The order collection payment writes to.
    /// * `delay` - How long each simulated operation takes.
    pub fn new(orders: Repository<Order>, delay: Duration) -> Self {
        Self { orders, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn process_order(&self) -> Result<()> {
        tracing::info!("Processing order...");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    /// Settles payment for `order_id`.
    ///
    /// Returns the updated order, or `None` when no id was given or it
    /// matches nothing. A malformed id fails after the delay has elapsed.
    pub async fn process_payment(&self, order_id: Option<&str>) -> Result<Option<Order>> {
        tracing::info!(order_id = ?order_id, "Processing payment...");
        tokio::time::sleep(self.delay).await;

        let Some(order_id) = order_id else {
            return Ok(None);
        };
        self.orders
            .update(order_id, OrderFields::payment_settled())
            .await
    }
}
