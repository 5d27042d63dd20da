use bindery::Bind;

#[derive(Bind)]
pub struct Filters {
    #[bind(skip, form = "f")]
    pub flag: bool,
}

fn main() {}
