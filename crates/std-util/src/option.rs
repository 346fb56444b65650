/// Asserts that an `Option` is `None`, printing the value otherwise.
#[macro_export]
macro_rules! assert_none {
    ($e:expr $(, $($t:tt)* )?) => {
        match &$e {
            None => {}
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `None`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}
