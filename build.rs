use std::env;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=FFMPEG_DIR");
    println!("cargo:rerun-if-env-changed=VCPKG_ROOT");
    println!("cargo:rerun-if-env-changed=VCPKGRS_DYNAMIC");

    // On non-Windows targets pkg-config locates FFmpeg; nothing to do here.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }
    if env::var_os("FFMPEG_DIR").is_some() {
        return;
    }

    match env::var("VCPKG_ROOT") {
        Ok(root) => {
            let installed = Path::new(&root).join("installed").join("x64-windows");
            if installed.exists() {
                println!(
                    "cargo:warning=Found a vcpkg install at {}; set FFMPEG_DIR to it so ffmpeg-sys-next links against the right FFmpeg (and VCPKGRS_DYNAMIC=1 for dynamic builds).",
                    installed.display(),
                );
            } else {
                println!(
                    "cargo:warning=VCPKG_ROOT is set but {} does not exist; FFmpeg may not be installed.",
                    installed.display(),
                );
            }
        }
        Err(_) => {
            println!(
                "cargo:warning=Building on Windows without FFMPEG_DIR. Install FFmpeg (e.g. via vcpkg) and set FFMPEG_DIR so ffmpeg-sys-next can find it."
            );
        }
    }
}
