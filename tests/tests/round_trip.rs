use tests::prelude::*;

/// Every binding is found again by its own store name, and every mapped
/// binding by its property name.
fn assert_round_trips(cx: &MappingContext, class: &ClassId) {
    let by_store_name = cx.list_all_by_store_name(class).unwrap();
    assert!(!by_store_name.is_empty());

    for (key, binding) in by_store_name {
        assert_eq!(key, &binding.store_field_name().to_uppercase());

        let found = cx
            .resolve_by_store_name(class, binding.store_field_name())
            .unwrap();
        assert_eq!(found, &**binding);

        if !binding.is_mapped() {
            assert_none!(cx.resolve_by_property_name(class, binding.name()));
            continue;
        }

        let found = cx.resolve_by_property_name(class, binding.name()).unwrap();
        assert_eq!(found, &**binding);

        assert_eq!(cx.to_store_name(class, binding.name()), binding.store_field_name());
    }
}

#[test]
fn every_fixture_round_trips() {
    let cx = context!(
        User,
        AnnotatedUser,
        Admin,
        Address,
        Customer,
        CarCan,
        EmbeddedEntityExample,
        Order
    );

    for class in cx.classes() {
        assert_round_trips(&cx, class);
    }
}

#[test]
fn listings_agree() {
    let cx = context!(Customer);
    let class = Customer::class_id();

    let by_store_name = cx.list_all_by_store_name(&class).unwrap();
    let by_property_name = cx.list_all_by_property_name(&class).unwrap();

    assert_eq!(by_property_name.len(), by_store_name.len());

    // `notes` has a blank storage name and is listed under it
    let notes = &by_store_name[""];
    assert_eq!(notes.full_path(), "notes");
    assert!(std::ptr::eq(&**notes, &*by_property_name["notes"]));

    for binding in by_store_name.values() {
        assert!(by_property_name
            .values()
            .any(|other| std::ptr::eq(&**other, &**binding)));
    }
}
