use bindery::Bind;

#[derive(Bind)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Bind)]
pub struct Borrowed<'a> {
    pub name: &'a str,
}

#[derive(Bind)]
pub struct Window<const N: usize> {
    pub slots: [u32; N],
}

fn main() {}
