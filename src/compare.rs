//! Equality and total order over JSON values.
//!
//! Values of different kinds compare by [`Kind`](crate::Kind) declaration
//! order. Within a kind: numbers by numeric value, strings byte-wise, `false`
//! before `true`, arrays element-wise and objects entry-wise in key order.

use crate::value::{Json, Node};
use std::cmp::Ordering;

impl PartialEq for Json {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Json {}

impl PartialOrd for Json {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Json {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        match (self.node(), other.node()) {
            (Node::Null, Node::Null) => Ordering::Equal,
            (Node::Number(a), Node::Number(b)) => a.cmp(b),
            (Node::String(a), Node::String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Node::Bool(a), Node::Bool(b)) => a.cmp(b),
            (Node::Array(a), Node::Array(b)) => a.cmp(b),
            (Node::Object(a), Node::Object(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, Json, Object};

    fn array(items: Vec<Json>) -> Json {
        Json::from(items)
    }

    fn object(pairs: Vec<(&str, Json)>) -> Json {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_different_kinds_never_equal() {
        let values = vec![
            Json::null(),
            Json::from(0),
            Json::from(""),
            Json::from(false),
            Json::from(Array::new()),
            Json::from(Object::new()),
        ];
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a == b, i == j, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_kind_order() {
        let mut values = vec![
            Json::from(Object::new()),
            Json::from(true),
            Json::from(Array::new()),
            Json::from("z"),
            Json::from(-1e9),
            Json::null(),
        ];
        values.sort();
        let kinds: Vec<String> = values.iter().map(|v| v.kind().to_string()).collect();
        assert_eq!(
            kinds,
            vec!["null", "number", "string", "boolean", "array", "object"]
        );
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(Json::from(1), Json::from(1.0));
        assert_eq!(Json::from(0.0), Json::from(-0.0));
        assert!(Json::from(2) < Json::from(2.5));
        assert!(Json::from(-3.0) < Json::from(-2));
        assert_ne!(Json::from(1), Json::from(1.000_001));
    }

    #[test]
    fn test_strings_compare_bytewise() {
        #[rustfmt::skip]
        let tests = vec![
            ("a", "b"),
            ("Z", "a"),
            ("ab", "abc"),
            ("", "a"),
            ("z", "é"),
        ];
        for (smaller, larger) in tests {
            assert!(Json::from(smaller) < Json::from(larger), "{} < {}", smaller, larger);
        }
        assert_eq!(Json::from("abc"), Json::from(String::from("abc")));
    }

    #[test]
    fn test_bools() {
        assert!(Json::from(false) < Json::from(true));
        assert_eq!(Json::from(true), Json::from(true));
    }

    #[test]
    fn test_arrays_compare_elementwise() {
        let a = array(vec![Json::from(1), Json::from("x")]);
        let b = array(vec![Json::from(1.0), Json::from("x")]);
        let c = array(vec![Json::from(1), Json::from("y")]);
        let d = array(vec![Json::from(1)]);
        assert_eq!(a, b);
        assert!(a < c);
        assert!(d < a);
        assert!(array(vec![]) < d);
    }

    #[test]
    fn test_objects_compare_in_key_order() {
        let a = object(vec![("b", Json::from(1)), ("a", Json::from(2))]);
        let b = object(vec![("a", Json::from(2)), ("b", Json::from(1.0))]);
        assert_eq!(a, b);

        let c = object(vec![("a", Json::from(3))]);
        assert!(a < c);
        let d = object(vec![("a", Json::from(2)), ("c", Json::from(0))]);
        assert!(a < d);
    }

    #[test]
    fn test_eq_consistent_with_ord() {
        let values = vec![
            Json::null(),
            Json::from(1),
            Json::from(1.0),
            Json::from(f64::NAN),
            Json::from(f64::NAN),
            Json::from("a"),
            Json::from(true),
            array(vec![Json::from(f64::NAN)]),
            array(vec![Json::from(f64::NAN)]),
            object(vec![("k", Json::null())]),
        ];
        for a in &values {
            for b in &values {
                let equal = a == b;
                assert_eq!(equal, !(a < b) && !(b < a), "{:?} vs {:?}", a, b);
            }
        }
    }
}
