use tests::prelude::*;

#[test]
fn unannotated_properties_use_upper_snake_case() {
    let cx = context!(User);
    let class = User::class_id();

    assert_eq!(cx.to_store_name(&class, "name"), "NAME");
    assert_eq!(cx.to_store_name(&class, "userId"), "USER_ID");
    assert_eq!(cx.to_store_name(&class, "password"), "PASSWORD");

    let keys: Vec<_> = cx
        .list_all_by_store_name(&class)
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["NAME", "USER_ID", "PASSWORD"]);
}

#[test]
fn digits_start_a_new_word() {
    let cx = context!(Address);
    let class = Address::class_id();

    assert_eq!(cx.to_store_name(&class, "line2"), "LINE_2");
    assert_eq!(cx.to_store_name(&class, "zipCode"), "ZIP_CODE");
}

#[test]
fn snake_case_fields() {
    let cx = context!(Order);
    let class = Order::class_id();

    assert_eq!(cx.to_store_name(&class, "order_id"), "ORDER_ID");
    assert_eq!(cx.to_store_name(&class, "customer_name"), "CUSTOMER_NAME");
}

#[test]
fn raw_identifier_uses_plain_name() {
    let cx = context!(Order);
    let class = Order::class_id();

    let binding = cx.resolve_by_property_name(&class, "type").unwrap();
    assert_eq!(binding.store_field_name(), "TYPE");
    assert_none!(cx.resolve_by_property_name(&class, "r#type"));
}

#[test]
fn value_type_is_recorded() {
    let cx = context!(CarCan);
    let class = CarCan::class_id();

    let binding = cx.resolve_by_store_name(&class, "vin").unwrap();
    assert_eq!(binding.value_type().as_str(), std::any::type_name::<String>());

    let binding = cx.resolve_by_store_name(&class, "MODEL_YEAR").unwrap();
    assert_eq!(binding.name(), "modelYear");
    assert_eq!(binding.value_type().as_str(), "u16");
}
