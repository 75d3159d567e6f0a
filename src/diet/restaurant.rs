use std::collections::BTreeSet;

use chrono::NaiveTime;
use itertools::Itertools;

use crate::diet::order::{Order, OrderStatus};
use crate::utils::error::{DomainError, Result};

/// Parse an `"HH:MM"` time of day; a single-digit hour (`"8:30"`) is
/// accepted and normalized.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let padded;
    let text = if value.len() == 4 {
        padded = format!("0{value}");
        &padded
    } else {
        value
    };
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|_| DomainError::invalid("time", value))
}

/// A restaurant with opening hours, offered menus, and received orders.
#[derive(Debug, Default)]
pub struct Restaurant {
    name: String,
    /// (open, close) slots sorted by opening time. A closing time at or
    /// before the opening time wraps past midnight.
    hours: Vec<(NaiveTime, NaiveTime)>,
    menus: BTreeSet<String>,
    orders: Vec<Order>,
}

impl Restaurant {
    pub(crate) fn new(name: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            ..Restaurant::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define the opening hours as (open, close) `"HH:MM"` pairs.
    /// Replaces any previously configured slots.
    pub fn set_hours(&mut self, hours: &[(&str, &str)]) -> Result<()> {
        let mut slots = Vec::with_capacity(hours.len());
        for (open, close) in hours {
            slots.push((parse_time(open)?, parse_time(close)?));
        }
        slots.sort_by_key(|&(open, _)| open);
        self.hours = slots;
        Ok(())
    }

    /// Whether the restaurant is open at the given time. Opening times
    /// are inclusive, closing times exclusive.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.hours.iter().any(|&(open, close)| {
            if close <= open {
                // Overnight slot, e.g. 19:00-00:30.
                time >= open || time < close
            } else {
                time >= open && time < close
            }
        })
    }

    /// The first opening time at or after `time`, wrapping to the
    /// earliest slot of the day when no later slot exists. `None` when
    /// no hours are configured.
    pub fn next_available_time(&self, time: NaiveTime) -> Option<NaiveTime> {
        if self.is_open_at(time) {
            return Some(time);
        }
        self.hours
            .iter()
            .map(|&(open, _)| open)
            .find(|&open| open >= time)
            .or_else(|| self.hours.first().map(|&(open, _)| open))
    }

    /// Record that this restaurant offers a menu with the given name.
    pub fn add_menu(&mut self, name: &str) {
        self.menus.insert(name.to_string());
    }

    pub fn menus(&self) -> Vec<&str> {
        self.menus.iter().map(String::as_str).collect()
    }

    pub(crate) fn add_order(&mut self, order: Order) -> &mut Order {
        self.orders.push(order);
        let last = self.orders.len() - 1;
        &mut self.orders[last]
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Concatenated textual rendering of the orders in the given
    /// status, sorted by restaurant name, customer full name, and
    /// delivery time.
    pub fn orders_with_status(&self, status: OrderStatus) -> String {
        self.orders
            .iter()
            .filter(|order| order.status() == status)
            .sorted_by_key(|order| {
                (
                    order.restaurant_name().to_string(),
                    order.customer_full_name(),
                    order.delivery_time(),
                )
            })
            .map(Order::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_pads_single_digit_hours() {
        assert_eq!(
            parse_time("8:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn overnight_slots_wrap_past_midnight() {
        let mut r = Restaurant::new("Napoli");
        r.set_hours(&[("19:00", "02:00")]).unwrap();

        assert!(r.is_open_at(parse_time("23:30").unwrap()));
        assert!(r.is_open_at(parse_time("01:59").unwrap()));
        assert!(!r.is_open_at(parse_time("02:00").unwrap()));
        assert!(!r.is_open_at(parse_time("12:00").unwrap()));
    }

    #[test]
    fn next_available_time_picks_the_following_slot() {
        let mut r = Restaurant::new("Napoli");
        r.set_hours(&[("08:15", "14:00"), ("19:00", "00:00")]).unwrap();

        // Between the two slots: the evening opening.
        assert_eq!(
            r.next_available_time(parse_time("15:00").unwrap()),
            Some(parse_time("19:00").unwrap())
        );
        // Inside a slot: the time itself.
        assert_eq!(
            r.next_available_time(parse_time("09:00").unwrap()),
            Some(parse_time("09:00").unwrap())
        );
        // After the last closing: wrap to the first slot of the day.
        assert_eq!(
            r.next_available_time(parse_time("00:30").unwrap()),
            Some(parse_time("08:15").unwrap())
        );
    }
}
