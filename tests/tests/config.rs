use tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn deserialize_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn deserialize_all_fields() {
    let config: Config = serde_json::from_value(serde_json::json!({
        "entities": ["app::AnnotatedUser"],
        "collisions": "reject",
        "path_separator": "/",
    }))
    .unwrap();

    assert_eq!(
        config,
        Config::new()
            .entity("app::AnnotatedUser")
            .collisions(CollisionPolicy::Reject)
            .path_separator("/")
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let res = serde_json::from_str::<Config>(r#"{ "entites": [] }"#);
    assert!(res.is_err());

    let res = serde_json::from_str::<Config>(r#"{ "collisions": "first_wins" }"#);
    assert!(res.is_err());
}

#[test]
fn serialize() {
    let json = serde_json::to_value(Config::new().entity("app::User")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "entities": ["app::User"],
            "collisions": "last_write_wins",
            "path_separator": ".",
        })
    );
}

#[test]
fn from_config_registers_entities() {
    let catalog = catalog!(AnnotatedUser, Customer);
    let config: Config = serde_json::from_value(serde_json::json!({
        "entities": ["app::AnnotatedUser", Customer::class_id()],
        "path_separator": "/",
    }))
    .unwrap();

    let cx = assert_ok!(MappingContext::from_config(&catalog, config));

    let classes: Vec<_> = cx.classes().cloned().collect();
    assert_eq!(classes, [AnnotatedUser::class_id(), Customer::class_id()]);
    assert_eq!(cx.config().path_separator, "/");

    let city = cx
        .resolve_by_property_name(&Customer::class_id(), "city")
        .unwrap();
    assert_eq!(city.full_path(), "address/city");
}

#[test]
fn from_config_unknown_entity() {
    let catalog = catalog!(User);
    let config = Config::new().entity(User::class_id()).entity("app::Missing");

    let err = assert_err!(MappingContext::from_config(&catalog, config));
    assert!(err.is_class_not_found());
}

#[test]
fn from_config_reject_collisions() {
    let catalog = catalog!(Shipment);
    let config = Config::new()
        .entity(Shipment::class_id())
        .collisions(CollisionPolicy::Reject);

    let err = assert_err!(MappingContext::from_config(&catalog, config));
    assert!(err.is_mapping_conflict());
}
