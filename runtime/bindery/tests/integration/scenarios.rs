use bindery::{Bind, BindError, Namespace, SourceMap};

fn form<T: Bind + Default>(query: &str) -> Result<T, BindError> {
    let mut target = T::default();
    bindery::bind(&mut target, &SourceMap::from_query(query), Namespace::Form)?;
    Ok(target)
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Pagination {
    pub page: i64,
    pub size: i64,
}

#[test]
fn flat_struct() {
    let p: Pagination = form("page=2&size=10").unwrap();
    assert_eq!(p, Pagination { page: 2, size: 10 });
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct WithSlice {
    pub slice: Vec<i32>,
}

#[test]
fn repeated_values_fill_a_vec() {
    let s: WithSlice = form("slice=3&slice=4").unwrap();
    assert_eq!(s.slice, vec![3, 4]);
}

#[test]
fn invalid_vec_element_is_a_parse_error() {
    let err = form::<WithSlice>("slice=wrong").unwrap_err();
    let BindError::Parse(e) = &err else {
        panic!("Expected a parse error, got {err:?}");
    };
    assert_eq!(e.value(), "wrong");
    assert!(err.to_string().contains("wrong"));
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Inner {
    #[bind(form = "age")]
    pub age: i32,
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub inner: Inner,
}

#[test]
fn nested_structs_are_walked() {
    let p: Person = form("name=mike&age=25").unwrap();
    assert_eq!(
        p,
        Person {
            name: "mike".into(),
            inner: Inner { age: 25 }
        }
    );
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Single {
    pub a: i32,
}

#[test]
fn empty_source_leaves_defaults() {
    let s: Single = form("").unwrap();
    assert_eq!(s, Single { a: 0 });
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Node {
    pub value: u32,
    #[bind(form = "-", uri = "-")]
    pub next: Option<Box<Node>>,
}

#[test]
fn self_referential_types_terminate() {
    let n: Node = form("value=1&next=2&Next=3").unwrap();
    assert_eq!(
        n,
        Node {
            value: 1,
            next: None
        }
    );
}
