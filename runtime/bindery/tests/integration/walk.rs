use bindery::{Bind, BindError, Namespace, SourceMap};

fn bind_into<T: Bind>(target: &mut T, query: &str, namespace: Namespace) -> Result<(), BindError> {
    bindery::bind(target, &SourceMap::from_query(query), namespace)
}

#[derive(Bind, Default, Debug, PartialEq, Clone)]
pub struct Filters {
    #[bind(form = "q")]
    pub query: String,
    #[bind(form = "-")]
    pub internal: u32,
    #[bind(skip)]
    pub cached: u32,
    hidden: u32,
}

#[test]
fn skipped_and_private_fields_are_never_written() {
    let mut f = Filters {
        cached: 7,
        ..Default::default()
    };
    bind_into(&mut f, "q=rust&internal=1&cached=2&hidden=3", Namespace::Form).unwrap();
    assert_eq!(f.query, "rust");
    assert_eq!(f.internal, 0);
    assert_eq!(f.cached, 7);
    assert_eq!(f.hidden, 0);
}

#[test]
fn skip_marker_only_applies_to_its_namespace() {
    let mut f = Filters::default();
    bind_into(&mut f, "query=rust&internal=1", Namespace::Uri).unwrap();
    assert_eq!(f.query, "rust");
    assert_eq!(f.internal, 1);
}

#[test]
fn absent_keys_keep_current_values() {
    let mut f = Filters {
        query: "kept".into(),
        ..Default::default()
    };
    bind_into(&mut f, "unrelated=1", Namespace::Form).unwrap();
    assert_eq!(f.query, "kept");
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Audit {
    pub created_by: String,
    #[bind(form = "-")]
    pub secret: u32,
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Document {
    pub title: String,
    #[bind(flatten)]
    pub audit: Audit,
    #[bind(flatten, form = "-")]
    pub ignored: Audit,
    #[bind(flatten)]
    private_audit: Audit,
}

#[test]
fn flattened_members_are_bound_by_their_own_key() {
    let mut d = Document::default();
    bind_into(
        &mut d,
        "title=t&created_by=ann&audit=x&secret=9",
        Namespace::Form,
    )
    .unwrap();
    assert_eq!(d.title, "t");
    assert_eq!(d.audit.created_by, "ann");
    assert_eq!(d.audit.secret, 0);
    assert_eq!(d.ignored, Audit::default());
    // Flattened fields are walked whatever their visibility.
    assert_eq!(d.private_audit.created_by, "ann");
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Optionals {
    pub limit: Option<u32>,
    pub window: Option<Window>,
    #[bind(flatten)]
    pub extra: Option<Extra>,
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Window {
    pub from: u32,
    pub to: u32,
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Extra {
    pub verbose: bool,
}

#[test]
fn optionals_are_only_allocated_when_something_is_bound() {
    let mut o = Optionals::default();
    bind_into(&mut o, "unrelated=1", Namespace::Form).unwrap();
    assert_eq!(o, Optionals::default());

    bind_into(&mut o, "limit=5&to=9&verbose=t", Namespace::Form).unwrap();
    assert_eq!(o.limit, Some(5));
    assert_eq!(o.window, Some(Window { from: 0, to: 9 }));
    assert_eq!(o.extra, Some(Extra { verbose: true }));
}

#[test]
fn empty_values_bind_to_zero() {
    let mut o = Optionals::default();
    bind_into(&mut o, "limit=&verbose=", Namespace::Form).unwrap();
    assert_eq!(o.limit, Some(0));
    assert_eq!(o.extra, Some(Extra { verbose: false }));
}

#[test]
fn binding_is_idempotent() {
    let query = "q=rust&internal=3";
    let mut first = Filters::default();
    let mut second = Filters::default();
    bind_into(&mut first, query, Namespace::Form).unwrap();
    bind_into(&mut second, query, Namespace::Form).unwrap();
    assert_eq!(first, second);

    bind_into(&mut second, query, Namespace::Form).unwrap();
    assert_eq!(first, second);
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Ordered {
    pub a: u8,
    pub b: u8,
    pub c: u8,
}

#[test]
fn earlier_writes_survive_a_failure() {
    let mut o = Ordered::default();
    let err = bind_into(&mut o, "a=1&b=x&c=3", Namespace::Form).unwrap_err();
    assert_eq!(err.key(), Some("b"));
    assert_eq!(o, Ordered { a: 1, b: 0, c: 0 });
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Keywords {
    pub r#type: String,
    #[bind(form = "r#match")]
    pub r#match: String,
}

#[test]
fn raw_identifiers_bind_by_their_plain_name() {
    let mut k = Keywords::default();
    bind_into(&mut k, "type=a&match=b&r%23match=c", Namespace::Form).unwrap();
    assert_eq!(k.r#type, "a");
    assert_eq!(k.r#match, "c");
}

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Fixed {
    pub rgb: [u8; 3],
    pub tags: Vec<String>,
}

#[test]
fn arrays_and_vecs() {
    let mut f = Fixed::default();
    bind_into(&mut f, "rgb=1&rgb=2&rgb=3&tags=", Namespace::Form).unwrap();
    assert_eq!(f.rgb, [1, 2, 3]);
    assert_eq!(f.tags, vec![String::new()]);

    let err = bind_into(&mut f, "rgb=1", Namespace::Form).unwrap_err();
    assert!(matches!(err, BindError::Shape(_)));
}
