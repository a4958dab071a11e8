use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TABLE_LEN: usize = 64;

fn compute_atan_degrees_table() -> [f64; TABLE_LEN] {
    (0..TABLE_LEN)
        .map(|i| f64::atan(f64::powf(2.0, -(i as f64))) * (180.0 / std::f64::consts::PI))
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn compute_gain_limit() -> f64 {
    (1..TABLE_LEN).fold(f64::sqrt(2.0), |gain, i| gain * f64::sqrt(1.0 + f64::powf(2.0, -2.0 * i as f64)))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();

    let mut f = File::create(Path::new(&out_dir).join("atan_table.rs")).unwrap();
    let atan_table = compute_atan_degrees_table();
    writeln!(&mut f, "#[allow(clippy::approx_constant)]").unwrap();
    writeln!(&mut f, "const ATAN_DEGREES_TABLE: [f64; {}] = {:?};", atan_table.len(), atan_table).unwrap();

    let mut f = File::create(Path::new(&out_dir).join("gain_limit.rs")).unwrap();
    writeln!(&mut f, "/// CORDIC gain after {} iterations, where the `f64` gain sequence has settled", TABLE_LEN).unwrap();
    writeln!(&mut f, "pub const GAIN_LIMIT: f64 = {:?};", compute_gain_limit()).unwrap();
}
