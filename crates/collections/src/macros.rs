/// Boxes a fresh singly linked node, optionally chaining it in front of `$next`
macro_rules! boxnode {
    ( $data: expr ) => {
        Box::new($crate::linked_list::Node {
            data: $data,
            next: None,
        })
    };
    ( $data: expr, $next: expr ) => {
        Box::new($crate::linked_list::Node {
            data: $data,
            next: $next,
        })
    };
}

/// Unsigned integers probe by their own value
macro_rules! impl_probe_key {
    ( $( $t: ty ),* ) => {
        $(
            impl $crate::hashmap::ProbeKey for $t {
                fn ordinal(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

pub(crate) use boxnode;
pub(crate) use impl_probe_key;
