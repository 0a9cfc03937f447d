#![allow(dead_code)]

use rigvisor::catalog::{Catalog, Category, Part};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn cpu(id: &str, socket: &str) -> Part {
    let mut p = Part::new(id, format!("CPU {}", id));
    p.socket = Some(socket.to_string());
    p
}

pub fn board(id: &str, socket: &str, ram_type: &str, form_factor: &str) -> Part {
    let mut p = Part::new(id, format!("Board {}", id));
    p.socket = Some(socket.to_string());
    p.ram_type = Some(ram_type.to_string());
    p.form_factor = Some(form_factor.to_string());
    p
}

pub fn ram(id: &str, kind: &str) -> Part {
    let mut p = Part::new(id, format!("RAM {}", id));
    p.kind = Some(kind.to_string());
    p
}

pub fn case(id: &str, form_factor: &str, max_gpu_length: Option<f64>) -> Part {
    let mut p = Part::new(id, format!("Case {}", id));
    p.form_factor = Some(form_factor.to_string());
    p.max_gpu_length = max_gpu_length;
    p
}

pub fn gpu(id: &str, length: Option<f64>) -> Part {
    let mut p = Part::new(id, format!("GPU {}", id));
    p.length = length;
    p
}

pub fn priced(id: &str, name: &str, price: Option<f64>) -> Part {
    let mut p = Part::new(id, name);
    p.price = price;
    p
}

pub fn sample_catalog() -> Catalog {
    Catalog::new()
        .with(
            Category::Cpu,
            vec![cpu("r5", "AM4"), cpu("i5", "LGA1700"), cpu("r7", "AM5")],
        )
        .with(
            Category::Motherboard,
            vec![
                board("b550", "AM4", "DDR4", "ATX"),
                board("z790", "LGA1700", "DDR5", "ATX"),
                board("b650i", "AM5", "DDR5", "Mini-ITX"),
            ],
        )
        .with(Category::Ram, vec![ram("ddr4", "DDR4"), ram("ddr5", "DDR5")])
        .with(
            Category::Case,
            vec![
                case("mid", "ATX Mid Tower", Some(330.0)),
                case("sff", "Mini Tower", Some(300.0)),
                case("open", "Open Frame", None),
            ],
        )
        .with(
            Category::Gpu,
            vec![gpu("short", Some(240.0)), gpu("long", Some(320.0)), gpu("huge", Some(358.0))],
        )
}

/// Writes a small on-disk catalog: CPUs, GPUs, RAM, motherboards, cases
/// and a prebuild. Other category files are left missing on purpose.
pub fn write_catalog_dir(dir: &Path) {
    fs::write(
        dir.join("cpus.json"),
        r#"[
            {"id": "cpu-1", "name": "Ryzen 5 5600", "price": 12999, "socket": "AM4", "cores": 6, "boost_clock": 4.4, "core_count": 6, "image": "r5.png"},
            {"id": "cpu-2", "name": "Core i5-13400", "price": 21999, "socket": "LGA1700", "cores": 10, "boost_clock": 4.6},
            {"id": "cpu-3", "name": "Ryzen 7 7700X", "price": 29999, "socket": "AM5", "cores": 8, "boost_clock": 5.4, "tdp": 105}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("motherboards.json"),
        r#"[
            {"id": "mb-1", "name": "B550 Tomahawk", "price": 15499, "socket": "AM4", "ram_type": "DDR4", "form_factor": "ATX"},
            {"id": "mb-2", "name": "B760M Pro", "price": 11999, "socket": "LGA1700", "ram_type": "DDR5", "form_factor": "Micro-ATX"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("ram.json"),
        r#"[
            {"id": "ram-1", "name": "Vengeance 16GB", "price": 3999, "type": "DDR4", "capacity": 16, "speed": 3200},
            {"id": "ram-2", "name": "Fury Beast 32GB", "price": 8999, "type": "DDR5", "capacity": 32, "speed": 6000}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("gpus.json"),
        r#"[
            {"id": "gpu-1", "name": "RTX 4060", "price": 30999, "vram": 8, "length": 240},
            {"id": "gpu-2", "name": "RX 7900 XTX", "price": 94999, "vram": 24, "length": 344}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("cases.json"),
        r#"[
            {"id": "case-1", "name": "Lancool 216", "price": 7499, "form_factor": "ATX Mid Tower", "max_gpu_length": 392},
            {"id": "case-2", "name": "Q300L", "price": 3999, "form_factor": "Micro-ATX Tower", "max_gpu_length": 300}
        ]"#,
    )
    .unwrap();
    fs::write(dir.join("psu.json"), "this is not json").unwrap();
    fs::write(
        dir.join("prebuilds.json"),
        r#"[
            {"id": "starter", "specs": {"cpu": "cpu-1", "motherboard": "mb-1", "ram": "ram-1", "gpu": "gpu-1", "fan": "x"}},
            {"id": "broken", "specs": {"cpu": "missing"}}
        ]"#,
    )
    .unwrap();
}

pub fn catalog_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_catalog_dir(dir.path());
    dir
}
