use std::{sync::Arc, thread};
use tests::prelude::*;

fn assert_sync_send<T: Send + Sync>(val: T) -> T {
    val
}

#[test]
fn context_shared_across_threads() {
    let cx = Arc::new(assert_sync_send(context!(Customer, AnnotatedUser)));

    thread::scope(|s| {
        for _ in 0..8 {
            let cx = cx.clone();
            s.spawn(move || {
                let resolver = Resolver::new(&cx);

                for _ in 0..100 {
                    assert_eq!(resolver.to_store_name::<Customer>("zipCode"), "ZIP_CODE");
                    assert_eq!(resolver.to_store_name::<AnnotatedUser>("name"), "user_name");

                    let binding = resolver
                        .resolve_by_store_name::<Customer>("longitude")
                        .unwrap();
                    assert_eq!(binding.full_path(), "address.geo.longitude");
                }
            });
        }
    });
}

#[test]
fn bindings_outlive_the_lookup() {
    let cx = context!(User);
    let bindings: Vec<Arc<PropertyBinding>> = cx
        .list_all_by_property_name(&User::class_id())
        .unwrap()
        .values()
        .cloned()
        .collect();
    drop(cx);

    let handle = thread::spawn(move || {
        bindings
            .iter()
            .map(|binding| binding.store_field_name().to_string())
            .collect::<Vec<_>>()
    });

    assert_eq!(handle.join().unwrap(), ["NAME", "USER_ID", "PASSWORD"]);
}
