/// Embeds a file from the crate's `res/` directory, either as bytes or as `&str`.
#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub const SCHEMA: &str = include_res!(str, "/schema.sql");
pub const GALLERY_SEED: &str = include_res!(str, "/seed/gallery.json");
pub const CONFIRMATION_TEXT: &str = include_res!(str, "/email/confirmation.txt");
pub const CONFIRMATION_HTML: &str = include_res!(str, "/email/confirmation.html");
