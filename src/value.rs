use crate::number::Number;
use std::collections::BTreeMap;
use std::fmt;
use std::ops;
use std::sync::{Arc, OnceLock};

pub type Array = Vec<Json>;
pub type Object = BTreeMap<String, Json>;

/// Kind tag of a JSON value.
///
/// The declaration order is the cross-kind sort order used by `Ord for Json`:
/// `Null < Number < String < Bool < Array < Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Null,
    Number,
    String,
    Bool,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Bool => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub(crate) enum Node {
    Null,
    Number(Number),
    Bool(bool),
    String(String),
    Array(Array),
    Object(Object),
}

/// An immutable JSON value.
///
/// `Json` is a handle to a shared, reference-counted node. Cloning is cheap and
/// never copies the tree; nothing reachable from a `Json` is ever mutated.
#[derive(Clone)]
pub struct Json {
    pub(crate) node: Arc<Node>,
}

struct Statics {
    null: Json,
    t: Json,
    f: Json,
}

fn statics() -> &'static Statics {
    static STATICS: OnceLock<Statics> = OnceLock::new();
    STATICS.get_or_init(|| Statics {
        null: Json::from_node(Node::Null),
        t: Json::from_node(Node::Bool(true)),
        f: Json::from_node(Node::Bool(false)),
    })
}

static EMPTY_OBJECT: Object = BTreeMap::new();

impl Json {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The canonical null value.
    pub fn null() -> Self {
        statics().null.clone()
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> Kind {
        match self.node() {
            Node::Null => Kind::Null,
            Node::Number(_) => Kind::Number,
            Node::Bool(_) => Kind::Bool,
            Node::String(_) => Kind::String,
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    pub fn is_number(&self) -> bool {
        self.kind() == Kind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// The numeric value, or `0.0` if this is not a number.
    pub fn number(&self) -> f64 {
        match self.node() {
            Node::Number(n) => n.as_f64(),
            _ => 0.0,
        }
    }

    /// The numeric value truncated toward zero, or `0` if this is not a number.
    pub fn int(&self) -> i64 {
        match self.node() {
            Node::Number(n) => n.as_i64(),
            _ => 0,
        }
    }

    /// The boolean value, or `false` if this is not a boolean.
    pub fn bool(&self) -> bool {
        match self.node() {
            Node::Bool(b) => *b,
            _ => false,
        }
    }

    /// The string contents, or `""` if this is not a string.
    pub fn string(&self) -> &str {
        match self.node() {
            Node::String(s) => s,
            _ => "",
        }
    }

    /// The array elements, or an empty slice if this is not an array.
    pub fn items(&self) -> &[Json] {
        match self.node() {
            Node::Array(items) => items,
            _ => &[],
        }
    }

    /// The object entries in key order, or an empty map if this is not an object.
    pub fn entries(&self) -> &Object {
        match self.node() {
            Node::Object(entries) => entries,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Looks up an array element by position or an object entry by key.
    ///
    /// Misses never fail: an out-of-range index, an absent key or a lookup on
    /// a value of the wrong kind all return the canonical null.
    ///
    /// ```
    /// use jsonval::Json;
    ///
    /// let v = Json::parse(r#"{"a": [10, 20]}"#).unwrap();
    /// assert_eq!(v.at("a").at(1).int(), 20);
    /// assert!(v.at("a").at(5).is_null());
    /// assert!(v.at("missing").at("deeper").is_null());
    /// ```
    pub fn at<I: Index>(&self, index: I) -> &Json {
        index.index_into(self).unwrap_or(&statics().null)
    }

    /// Character count for strings, element count for arrays, entry count for
    /// objects and `0` for everything else.
    pub fn size(&self) -> usize {
        match self.node() {
            Node::String(s) => s.chars().count(),
            Node::Array(items) => items.len(),
            Node::Object(entries) => entries.len(),
            Node::Null | Node::Number(_) | Node::Bool(_) => 0,
        }
    }

    /// Whether both handles share the same node.
    pub fn ptr_eq(&self, other: &Json) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.node(), f)
    }
}

impl Default for Json {
    fn default() -> Self {
        Json::null()
    }
}

/// Types usable with [`Json::at`] and `json[...]`.
///
/// Implemented for `usize` (array positions) and string types (object keys).
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Json) -> Option<&'v Json>;
}

impl Index for usize {
    fn index_into<'v>(&self, v: &'v Json) -> Option<&'v Json> {
        match v.node() {
            Node::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, v: &'v Json) -> Option<&'v Json> {
        match v.node() {
            Node::Object(entries) => entries.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, v: &'v Json) -> Option<&'v Json> {
        self.as_str().index_into(v)
    }
}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, v: &'v Json) -> Option<&'v Json> {
        (**self).index_into(v)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

impl<I: Index> ops::Index<I> for Json {
    type Output = Json;

    fn index(&self, index: I) -> &Json {
        self.at(index)
    }
}

impl From<()> for Json {
    fn from(_: ()) -> Self {
        Json::null()
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Self {
        let s = statics();
        if b {
            s.t.clone()
        } else {
            s.f.clone()
        }
    }
}

impl From<i32> for Json {
    fn from(i: i32) -> Self {
        Json::from(i64::from(i))
    }
}

impl From<u32> for Json {
    fn from(i: u32) -> Self {
        Json::from(i64::from(i))
    }
}

impl From<i64> for Json {
    fn from(i: i64) -> Self {
        Json::from_node(Node::Number(Number::Int(i)))
    }
}

impl From<f64> for Json {
    fn from(f: f64) -> Self {
        Json::from_node(Node::Number(Number::Float(f)))
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Json::from(s.to_owned())
    }
}

impl From<String> for Json {
    fn from(s: String) -> Self {
        Json::from_node(Node::String(s))
    }
}

impl From<Array> for Json {
    fn from(items: Array) -> Self {
        Json::from_node(Node::Array(items))
    }
}

impl From<Object> for Json {
    fn from(entries: Object) -> Self {
        Json::from_node(Node::Object(entries))
    }
}

impl<T: Into<Json>> From<Option<T>> for Json {
    fn from(v: Option<T>) -> Self {
        v.map_or_else(Json::null, Into::into)
    }
}

impl<T: Into<Json>> std::iter::FromIterator<T> for Json {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Json::from(iter.into_iter().map(Into::into).collect::<Array>())
    }
}

/// Later duplicates of a key replace earlier ones.
impl<K: Into<String>, V: Into<Json>> std::iter::FromIterator<(K, V)> for Json {
    fn from_iter<It: IntoIterator<Item = (K, V)>>(iter: It) -> Self {
        Json::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<Object>(),
        )
    }
}
