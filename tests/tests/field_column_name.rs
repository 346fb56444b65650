use tests::prelude::*;

#[test]
fn column_overrides_convention() {
    let cx = context!(AnnotatedUser);
    let class = AnnotatedUser::class_id();

    assert_eq!(class.as_str(), "app::AnnotatedUser");

    let name = cx.resolve_by_store_name(&class, "user_name").unwrap();
    assert_eq!(name.name(), "name");
    assert_eq!(name.full_path(), "name");

    assert_none!(cx.resolve_by_store_name(&class, "NAME"));
    assert_eq!(cx.to_store_name(&class, "userId"), "uid");
    assert_eq!(cx.to_store_name(&class, "password"), "pwd");
}

#[test]
fn same_class_with_and_without_columns() {
    let mut catalog = catalog!(User);
    let class = User::class_id();
    let mut cx = setup(&catalog, [class.clone()]);

    assert_eq!(cx.to_store_name(&class, "name"), "NAME");

    // Re-describe the same class with `name` annotated
    let mut described = User::descriptor();
    described.properties[0] = described.properties[0].clone().column("user_name");
    catalog.insert(described);
    assert_ok!(cx.register(&catalog, [class.clone()]));

    let binding = cx.resolve_by_store_name(&class, "user_name").unwrap();
    assert_eq!(binding.name(), "name");
    assert_none!(cx.resolve_by_store_name(&class, "NAME"));
    assert_eq!(cx.to_store_name(&class, "userId"), "USER_ID");
}

#[test]
fn store_name_lookup_ignores_case() {
    let cx = context!(AnnotatedUser);
    let class = AnnotatedUser::class_id();

    let lower = cx.resolve_by_store_name(&class, "user_name").unwrap();
    let upper = cx.resolve_by_store_name(&class, "USER_NAME").unwrap();
    let mixed = cx.resolve_by_store_name(&class, "User_Name").unwrap();

    assert!(std::ptr::eq(lower, upper));
    assert!(std::ptr::eq(lower, mixed));
}

#[test]
fn store_index_keys_are_upper_cased() {
    let cx = context!(EmbeddedEntityExample);
    let class = EmbeddedEntityExample::class_id();

    let by_store_name = cx.list_all_by_store_name(&class).unwrap();
    assert!(by_store_name.contains_key("ANNOTATEDPROPERTY"));
    assert!(!by_store_name.contains_key("annotatedProperty"));

    // The binding keeps the name exactly as annotated
    let binding = cx
        .resolve_by_store_name(&class, "annotatedProperty")
        .unwrap();
    assert_eq!(binding.store_field_name(), "annotatedProperty");
}

#[test]
fn property_lookup_is_case_sensitive() {
    let cx = context!(User);
    let class = User::class_id();

    assert!(cx.resolve_by_property_name(&class, "userId").is_some());
    assert_none!(cx.resolve_by_property_name(&class, "userid"));
    assert_none!(cx.resolve_by_property_name(&class, "USERID"));
}
