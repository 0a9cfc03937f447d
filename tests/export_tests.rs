use chrono::{FixedOffset, TimeZone};
use regex::Regex;
use rigvisor::build::Build;
use rigvisor::catalog::{Category, Part};
use rigvisor::error::RigError;
use rigvisor::export::{export_build, export_to_file};

fn sample_build() -> Build {
    let mut build = Build::new();

    let mut gpu = Part::new("gpu-1", "RTX 4060").with_price(30_999.0);
    gpu.vram = Some(8.0);
    build.set(Category::Gpu, gpu);

    let mut cpu = Part::new("cpu-1", "Ryzen 5 5600").with_price(12_999.0);
    cpu.socket = Some("AM4".into());
    build.set(Category::Cpu, cpu);

    build.set(Category::Mouse, Part::new("m-1", "Mystery Mouse"));
    build
}

#[test]
fn test_export_layout() {
    let at = FixedOffset::east_opt(5 * 3600 + 1800)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
        .unwrap();
    let text = export_build(&sample_build(), &at).unwrap();

    let expected = concat!(
        "RigVisor - Custom PC Build\n",
        "================================\n\n",
        "[CPU]\n",
        "Ryzen 5 5600\n",
        "Price: ₹12,999\n",
        "Specs: AM4\n\n",
        "[Graphics Card]\n",
        "RTX 4060\n",
        "Price: ₹30,999\n",
        "Specs: 8 GB VRAM\n\n",
        "[Mouse]\n",
        "Mystery Mouse\n",
        "Price: N/A\n",
        "Specs: \n\n",
        "================================\n",
        "Total Price: ₹43,998\n",
        "================================\n",
        "Generated on: 09/03/2024, 14:05:07\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn test_export_empty_build_fails() {
    let at = chrono::Utc::now();
    assert!(matches!(
        export_build(&Build::new(), &at),
        Err(RigError::EmptyBuild)
    ));
}

#[test]
fn test_export_to_file_stamps_local_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rigvisor-build.txt");
    export_to_file(&sample_build(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let stamp = Regex::new(r"(?m)^Generated on: \d{2}/\d{2}/\d{4}, \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(stamp.is_match(&text), "{}", text);
    assert!(text.contains("Total Price: ₹43,998"));
}
