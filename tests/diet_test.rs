use small_registry::diet::{Food, Nutrients, OrderStatus, PaymentMethod, Takeaway};
use small_registry::DomainError;

fn sample_food() -> Food {
    let mut food = Food::new();
    food.define_raw_material(
        "tomato",
        Nutrients {
            calories: 20.0,
            proteins: 1.0,
            carbs: 3.5,
            fat: 0.2,
        },
    )
    .unwrap();
    food.define_raw_material(
        "oil",
        Nutrients {
            calories: 900.0,
            proteins: 0.0,
            carbs: 0.0,
            fat: 100.0,
        },
    )
    .unwrap();
    food.define_product(
        "Crackers",
        Nutrients {
            calories: 111.0,
            proteins: 2.6,
            carbs: 17.2,
            fat: 3.5,
        },
    )
    .unwrap();
    food
}

#[test]
fn sauce_recipe_renormalizes_to_a_100g_basis() {
    let mut food = sample_food();
    food.define_recipe("Sauce").unwrap();
    food.add_ingredient("Sauce", "tomato", 200.0).unwrap();
    food.add_ingredient("Sauce", "oil", 50.0).unwrap();

    let sauce = food.recipe("Sauce").unwrap();
    assert!((sauce.calories() - 196.0).abs() < 1e-9);
    assert!(sauce.per_100g);
}

#[test]
fn per_100g_is_fixed_by_element_kind() {
    let mut food = sample_food();
    food.define_recipe("Sauce").unwrap();
    food.add_ingredient("Sauce", "tomato", 100.0).unwrap();
    food.define_menu("Lunch").unwrap();
    food.add_recipe_to_menu("Lunch", "Sauce", 200.0).unwrap();

    assert!(food.raw_material("tomato").unwrap().per_100g);
    assert!(food.recipe("Sauce").unwrap().per_100g);
    assert!(!food.product("Crackers").unwrap().per_100g);
    assert!(!food.menu("Lunch").unwrap().per_100g);
}

#[test]
fn menu_adds_scaled_recipes_and_absolute_products() {
    let mut food = sample_food();
    food.define_recipe("Sauce").unwrap();
    food.add_ingredient("Sauce", "tomato", 200.0).unwrap();
    food.add_ingredient("Sauce", "oil", 50.0).unwrap();
    food.define_menu("Lunch").unwrap();
    food.add_recipe_to_menu("Lunch", "Sauce", 50.0).unwrap();
    food.add_product_to_menu("Lunch", "Crackers").unwrap();

    let lunch = food.menu("Lunch").unwrap();
    assert!((lunch.calories() - (196.0 * 0.5 + 111.0)).abs() < 1e-9);
}

#[test]
fn unknown_names_signal_not_found() {
    let mut food = sample_food();
    assert!(matches!(
        food.recipe("missing"),
        Err(DomainError::NotFound { .. })
    ));
    food.define_menu("Lunch").unwrap();
    assert!(food.add_recipe_to_menu("Lunch", "missing", 100.0).is_err());
    assert!(food.add_product_to_menu("Lunch", "missing").is_err());
}

#[test]
fn restaurants_and_customers_are_sorted() {
    let mut takeaway = Takeaway::new();
    takeaway.add_restaurant("Napoli").unwrap();
    takeaway.add_restaurant("Asti").unwrap();
    assert_eq!(takeaway.restaurants(), vec!["Asti", "Napoli"]);
    assert!(takeaway.add_restaurant("Asti").is_err());

    takeaway.register_customer("Bob", "Verdi", "bob@example.com", "333");
    takeaway.register_customer("Ada", "Bianchi", "ada@example.com", "334");
    let customers = takeaway.customers();
    assert_eq!(customers[0].last, "Bianchi");
    assert_eq!(customers[1].last, "Verdi");
}

#[test]
fn ordering_at_a_closed_time_moves_to_the_next_opening() {
    let mut takeaway = Takeaway::new();
    takeaway
        .add_restaurant("Napoli")
        .unwrap()
        .set_hours(&[("08:15", "14:00"), ("19:00", "00:00")])
        .unwrap();
    let customer = takeaway
        .register_customer("Ada", "Bianchi", "ada@example.com", "334")
        .clone();

    let order = takeaway.create_order(&customer, "Napoli", "15:30").unwrap();
    assert_eq!(order.delivery_time().format("%H:%M").to_string(), "19:00");

    // Single-digit hour inside an open slot keeps the requested time.
    let order = takeaway.create_order(&customer, "Napoli", "9:30").unwrap();
    assert_eq!(order.delivery_time().format("%H:%M").to_string(), "09:30");
}

#[test]
fn open_restaurants_filters_by_time() {
    let mut takeaway = Takeaway::new();
    takeaway
        .add_restaurant("Napoli")
        .unwrap()
        .set_hours(&[("19:00", "23:00")])
        .unwrap();
    takeaway
        .add_restaurant("Asti")
        .unwrap()
        .set_hours(&[("08:00", "12:00")])
        .unwrap();

    let open: Vec<&str> = takeaway
        .open_restaurants("09:00")
        .unwrap()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(open, vec!["Asti"]);
}

#[test]
fn orders_with_status_renders_the_fixed_format() {
    let mut takeaway = Takeaway::new();
    takeaway
        .add_restaurant("Napoli")
        .unwrap()
        .set_hours(&[("08:00", "23:00")])
        .unwrap();
    let ada = takeaway
        .register_customer("Ada", "Bianchi", "ada@example.com", "334")
        .clone();
    let bob = takeaway
        .register_customer("Bob", "Verdi", "bob@example.com", "333")
        .clone();

    takeaway
        .create_order(&ada, "Napoli", "20:30")
        .unwrap()
        .add_menu("M6", 2)
        .add_menu("M1", 1);
    {
        let order = takeaway.create_order(&bob, "Napoli", "19:00").unwrap();
        order.add_menu("M6", 1);
        order.set_status(OrderStatus::Delivered);
        order.set_payment_method(PaymentMethod::Card);
    }

    let rendered = takeaway
        .restaurant("Napoli")
        .unwrap()
        .orders_with_status(OrderStatus::Ordered);
    assert_eq!(rendered, "Napoli, Bianchi Ada : (20:30):\n\tM1->1\n\tM6->2\n");

    let delivered = takeaway
        .restaurant("Napoli")
        .unwrap()
        .orders_with_status(OrderStatus::Delivered);
    assert_eq!(delivered, "Napoli, Verdi Bob : (19:00):\n\tM6->1\n");
}
