use std::fs;
use std::path::Path;

/// Copies the trunk output into `static/dist` when it exists, so the server
/// finds the bundle at its default location.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        if let Err(e) = copy_bundle(dist_dir, out_dir) {
            println!("cargo:warning=could not copy the frontend bundle: {}", e);
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}

fn copy_bundle(dist_dir: &Path, out_dir: &Path) -> Result<(), fs_extra::error::Error> {
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir)?;
    let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
    fs_extra::dir::copy(dist_dir, out_dir, &options)?;
    Ok(())
}
