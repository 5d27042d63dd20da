use bindery::{Bind, BindField, Json};

#[derive(Bind, Default)]
pub struct Scalars {
    pub a: i8,
    pub b: u64,
    pub c: f32,
    pub d: bool,
    pub e: String,
    pub f: Option<usize>,
}

#[derive(Bind, Default)]
pub struct Containers {
    pub list: Vec<i32>,
    pub pair: [u8; 2],
    pub maybe_list: Option<Vec<String>>,
    pub json: Json<Vec<u32>>,
}

#[derive(Bind, Default)]
pub struct Annotated {
    #[bind(form = "p,omitempty", uri = "id")]
    pub page: u32,
    #[bind(form = "-")]
    pub only_in_uri: u32,
    #[bind(skip)]
    pub skipped: u32,
    pub r#type: String,
}

#[derive(Bind, Default)]
pub struct Nested {
    pub scalars: Scalars,
    pub optional: Option<Containers>,
    #[bind(flatten)]
    pub annotated: Annotated,
    #[bind(flatten, uri = "-")]
    pub flattened_optional: Option<Scalars>,
}

// Fields that are never bound don't need to implement `BindField`.
#[derive(Bind)]
pub struct Unbindable {
    pub id: u32,
    handle: std::cell::Cell<*const u8>,
    #[bind(skip)]
    pub raw: *const u8,
    #[bind(form = "-", uri = "-,omitempty")]
    pub other_raw: *mut u8,
}

#[derive(Bind, Default)]
pub struct Recursive {
    pub value: u32,
    #[bind(skip)]
    pub next: Option<Box<Recursive>>,
}

#[derive(Bind, Default)]
struct Empty {}

fn requires_bind<T: Bind + BindField>() {}

fn main() {
    requires_bind::<Scalars>();
    requires_bind::<Containers>();
    requires_bind::<Annotated>();
    requires_bind::<Nested>();
    requires_bind::<Unbindable>();
    requires_bind::<Recursive>();
    requires_bind::<Empty>();
    let _ = Unbindable {
        id: 0,
        handle: std::cell::Cell::new(std::ptr::null()),
        raw: std::ptr::null(),
        other_raw: std::ptr::null_mut(),
    }
    .handle
    .get();
}
