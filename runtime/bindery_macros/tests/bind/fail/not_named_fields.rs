use bindery::Bind;

#[derive(Bind)]
pub struct Id(pub u32);

#[derive(Bind)]
pub enum Sort {
    Asc,
    Desc,
}

fn main() {}
