use bindery::Bind;

#[derive(Bind, Default)]
pub struct Paging {
    pub page: u32,
}

#[derive(Bind)]
pub struct Search {
    #[bind(flatten, form = "paging")]
    pub paging: Paging,
}

fn main() {}
