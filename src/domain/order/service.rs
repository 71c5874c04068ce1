use uuid::Uuid;

use crate::domain::customer::Customer;
use super::entity::Order;
use super::errors::OrderError;
use super::value_objects::OrderItem;

pub struct OrderService;

impl OrderService {
    /// Creates an order for `customer` and credits half its total as reward
    /// points.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
        customer.add_reward_points(order.total() / 2.0);

        tracing::debug!(order_id = %order.id(), customer_id = %customer.id(), total = order.total(), "Order placed");
        Ok(order)
    }

    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }
}
