use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Ordered,
    Ready,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paid,
    Cash,
    Card,
}

/// An order issued by a customer for a restaurant.
///
/// Renders as:
/// ```text
/// RESTAURANT, LAST FIRST : (HH:MM):
///     MENU->QTY
///     ...
/// ```
/// with one tab-indented line per menu, in alphabetical menu order.
#[derive(Debug, Clone)]
pub struct Order {
    restaurant: String,
    customer_first: String,
    customer_last: String,
    delivery_time: NaiveTime,
    status: OrderStatus,
    payment: PaymentMethod,
    menus: BTreeMap<String, u32>,
}

impl Order {
    pub(crate) fn new(
        restaurant: &str,
        customer_first: &str,
        customer_last: &str,
        delivery_time: NaiveTime,
    ) -> Order {
        Order {
            restaurant: restaurant.to_string(),
            customer_first: customer_first.to_string(),
            customer_last: customer_last.to_string(),
            delivery_time,
            status: OrderStatus::Ordered,
            payment: PaymentMethod::Cash,
            menus: BTreeMap::new(),
        }
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant
    }

    /// `"LAST FIRST"`, as used for sorting and rendering.
    pub fn customer_full_name(&self) -> String {
        format!("{} {}", self.customer_last, self.customer_first)
    }

    pub fn delivery_time(&self) -> NaiveTime {
        self.delivery_time
    }

    /// Add a menu with a given quantity; re-adding the same menu
    /// overwrites the quantity.
    pub fn add_menu(&mut self, menu: &str, quantity: u32) -> &mut Order {
        self.menus.insert(menu.to_string(), quantity);
        self
    }

    pub fn menus(&self) -> &BTreeMap<String, u32> {
        &self.menus
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment
    }

    pub fn set_payment_method(&mut self, payment: PaymentMethod) {
        self.payment = payment;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}, {} : ({}):",
            self.restaurant,
            self.customer_full_name(),
            self.delivery_time.format("%H:%M")
        )?;
        for (menu, qty) in &self.menus {
            writeln!(f, "\t{}->{}", menu, qty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_menus_as_tab_indented_lines() {
        let time = NaiveTime::from_hms_opt(20, 30, 0).unwrap();
        let mut order = Order::new("Pizzeria", "Ada", "Lovelace", time);
        order.add_menu("M6", 2).add_menu("M1", 1);

        assert_eq!(
            order.to_string(),
            "Pizzeria, Lovelace Ada : (20:30):\n\tM1->1\n\tM6->2\n"
        );
    }

    #[test]
    fn readding_a_menu_overwrites_the_quantity() {
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let mut order = Order::new("Pizzeria", "Ada", "Lovelace", time);
        order.add_menu("M1", 1).add_menu("M1", 3);
        assert_eq!(order.menus().get("M1"), Some(&3));
    }

    #[test]
    fn orders_start_as_ordered_and_cash() {
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let order = Order::new("Pizzeria", "Ada", "Lovelace", time);
        assert_eq!(order.status(), OrderStatus::Ordered);
        assert_eq!(order.payment_method(), PaymentMethod::Cash);
    }
}
