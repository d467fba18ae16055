// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/quillshelf.ico");
        res.compile().unwrap();
    }
}
