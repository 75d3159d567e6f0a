use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use crate::diet::order::Order;
use crate::diet::restaurant::{parse_time, Restaurant};
use crate::utils::error::{DomainError, EntityKind, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
}

/// Facade for a takeaway chain: restaurants, customers, and orders.
#[derive(Debug, Default)]
pub struct Takeaway {
    restaurants: BTreeMap<String, Restaurant>,
    customers: Vec<Customer>,
}

impl Takeaway {
    pub fn new() -> Takeaway {
        Takeaway::default()
    }

    /// Create a restaurant with the given name; the name must be new.
    pub fn add_restaurant(&mut self, name: &str) -> Result<&mut Restaurant> {
        if self.restaurants.contains_key(name) {
            return Err(DomainError::duplicate(EntityKind::Restaurant, name));
        }
        Ok(self
            .restaurants
            .entry(name.to_string())
            .or_insert_with(|| Restaurant::new(name)))
    }

    pub fn restaurant(&self, name: &str) -> Result<&Restaurant> {
        self.restaurants
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Restaurant, name))
    }

    pub fn restaurant_mut(&mut self, name: &str) -> Result<&mut Restaurant> {
        self.restaurants
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Restaurant, name))
    }

    /// Restaurant names in alphabetical order.
    pub fn restaurants(&self) -> Vec<&str> {
        self.restaurants.keys().map(String::as_str).collect()
    }

    pub fn register_customer(
        &mut self,
        first: &str,
        last: &str,
        email: &str,
        phone: &str,
    ) -> &Customer {
        self.customers.push(Customer {
            first: first.to_string(),
            last: last.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        });
        let last_idx = self.customers.len() - 1;
        &self.customers[last_idx]
    }

    /// Registered customers sorted by last name, then first name.
    pub fn customers(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .sorted_by_key(|c| (c.last.clone(), c.first.clone()))
            .collect()
    }

    /// Create an order for delivery at the given `"HH:MM"` time. When
    /// the restaurant is closed at that time the delivery silently
    /// moves to its next available opening time.
    pub fn create_order(
        &mut self,
        customer: &Customer,
        restaurant_name: &str,
        time: &str,
    ) -> Result<&mut Order> {
        let requested = parse_time(time)?;
        let restaurant = self
            .restaurants
            .get_mut(restaurant_name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Restaurant, restaurant_name))?;
        let delivery = restaurant.next_available_time(requested).unwrap_or(requested);
        let order = Order::new(restaurant_name, &customer.first, &customer.last, delivery);
        Ok(restaurant.add_order(order))
    }

    /// Restaurants open at the given time, sorted by name.
    pub fn open_restaurants(&self, time: &str) -> Result<Vec<&Restaurant>> {
        let t = parse_time(time)?;
        Ok(self
            .restaurants
            .values()
            .filter(|r| r.is_open_at(t))
            .collect())
    }
}
