// Demo host: build the default calibration artifact and write one binary STL
// per part into ./stl/. Export is a host concern; the library itself never
// touches the filesystem.

use fitment_tester::{FitmentConfig, generate};
use std::fs;

fn main() {
    let config = FitmentConfig::default();
    let parts = generate(&config).expect("default configuration is valid");

    fs::create_dir_all("stl").expect("create output directory");
    for part in parts {
        let path = format!("stl/{}.stl", part.name);
        let stl = part.solid.to_stl_binary(part.name).expect("serialize STL");
        fs::write(&path, stl).expect("write STL file");
        println!("wrote {path}");
    }
}
