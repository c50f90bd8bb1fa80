use std::fs;
use std::path::Path;

/// Copies the trunk output of the browser app into `static/dist`, where
/// `include_dir!` picks it up. Without a frontend build the checked-in
/// placeholder page is embedded instead.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
        fs_extra::dir::copy(dist_dir, out_dir, &options).expect("copy frontend dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
