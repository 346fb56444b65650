use tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn ancestor_properties_are_included() {
    let cx = context!(AnnotatedUser);
    let class = AnnotatedUser::class_id();

    let id = cx.resolve_by_store_name(&class, "ID").unwrap();
    assert_eq!(id.full_path(), "id");
    assert_eq!(cx.to_store_name(&class, "createdAt"), "CREATED_AT");
}

#[test]
fn own_properties_come_before_ancestors() {
    let cx = context!(Admin);
    let class = Admin::class_id();

    let names: Vec<_> = cx
        .list_all_by_property_name(&class)
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        names,
        ["accessLevel", "name", "userId", "password", "id", "createdAt"]
    );
}

#[test]
fn transient_fields_are_skipped() {
    let cx = context!(Admin);
    let class = Admin::class_id();

    assert_none!(cx.resolve_by_property_name(&class, "sessionToken"));
    assert_eq!(cx.to_store_name(&class, "sessionToken"), "sessionToken");
    assert!(!cx
        .list_all_by_property_name(&class)
        .unwrap()
        .contains_key("sessionToken"));
}

#[test]
fn ancestors_are_registered_into_the_catalog() {
    let catalog = catalog!(Admin);

    assert!(catalog.contains(&AnnotatedUser::class_id()));
    assert!(catalog.contains(&BaseEntity::class_id()));
    assert_eq!(catalog.len(), 3);

    let descriptor = Admin::descriptor();
    assert_eq!(descriptor.extends, Some(AnnotatedUser::class_id()));
    assert!(descriptor.property_by_name("sessionToken").unwrap().transient);
}

#[test]
fn missing_ancestor_is_class_not_found() {
    // Only the subclass is described, not what it extends
    let mut catalog = Catalog::new();
    catalog.insert(Admin::descriptor());

    let mut cx = MappingContext::default();
    let err = assert_err!(cx.register(&catalog, [Admin::class_id()]));

    assert!(err.is_class_not_found());
    assert!(!cx.is_registered(&Admin::class_id()));
}
