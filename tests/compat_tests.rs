use rigvisor::build::Build;
use rigvisor::catalog::Category;
use rigvisor::compat::{compatible_parts, failed_rules, form_factor_compatible, is_compatible};
use rstest::rstest;

mod common;
use common::*;

fn ids(parts: &[&rigvisor::catalog::Part]) -> Vec<String> {
    parts.iter().map(|p| p.id.clone()).collect()
}

#[rstest]
#[case(Some("ATX Mid Tower"), Some("Micro-ATX"), true)]
#[case(Some("Mini Tower"), Some("ATX"), false)]
#[case(Some("Mini Tower"), Some("Mini-ITX"), true)]
#[case(Some("EATX Full Tower"), Some("E-ATX"), true)]
#[case(Some("Full Tower"), Some("anything"), true)]
#[case(Some("ATX"), Some("Mini-ITX"), true)]
#[case(Some("atx"), Some("E-ATX"), true)]
#[case(Some("ATX Mid Tower"), Some("XL-Board"), false)]
#[case(Some("Micro-ATX Tower"), Some("ATX"), false)]
#[case(Some("Micro-ATX Tower"), Some("Micro-ATX"), true)]
#[case(Some("Micro-ATX Tower"), Some("Mini-ITX"), true)]
#[case(Some("Open Frame"), Some("ATX"), true)]
#[case(None, Some("ATX"), true)]
#[case(Some("Mini Tower"), None, true)]
#[case(Some(""), Some("ATX"), true)]
fn test_form_factor_heuristic(
    #[case] case_ff: Option<&str>,
    #[case] board_ff: Option<&str>,
    #[case] expected: bool,
) {
    assert_eq!(form_factor_compatible(case_ff, board_ff), expected);
}

#[test]
fn test_empty_build_keeps_every_candidate() {
    let catalog = sample_catalog();
    let build = Build::new();
    for category in Category::all() {
        let parts = catalog.parts(category);
        let kept = compatible_parts(category, parts, &build);
        assert_eq!(kept.len(), parts.len(), "{}", category);
    }
}

#[test]
fn test_cpu_filtered_by_board_socket() {
    let catalog = sample_catalog();
    let mut build = Build::new();
    build.set(Category::Motherboard, board("b550", "AM4", "DDR4", "ATX"));

    let kept = compatible_parts(Category::Cpu, catalog.parts(Category::Cpu), &build);
    assert_eq!(ids(&kept), vec!["r5"]);
}

#[test]
fn test_board_must_pass_every_applicable_rule() {
    let catalog = sample_catalog();
    let mut build = Build::new();
    build.set(Category::Cpu, cpu("r7", "AM5"));
    build.set(Category::Ram, ram("ddr5", "DDR5"));
    build.set(Category::Case, case("sff", "Mini Tower", Some(300.0)));

    let kept = compatible_parts(Category::Motherboard, catalog.parts(Category::Motherboard), &build);
    assert_eq!(ids(&kept), vec!["b650i"]);

    // The only LGA1700 board is ATX, which the mini case rejects.
    build.set(Category::Cpu, cpu("i5", "LGA1700"));
    let kept = compatible_parts(Category::Motherboard, catalog.parts(Category::Motherboard), &build);
    assert!(kept.is_empty());
}

#[test]
fn test_ram_filtered_by_board_memory_type() {
    let catalog = sample_catalog();
    let mut build = Build::new();
    build.set(Category::Motherboard, board("z790", "LGA1700", "DDR5", "ATX"));

    let kept = compatible_parts(Category::Ram, catalog.parts(Category::Ram), &build);
    assert_eq!(ids(&kept), vec!["ddr5"]);
}

#[test]
fn test_case_filtered_by_board_form_factor() {
    let catalog = sample_catalog();
    let mut build = Build::new();
    build.set(Category::Motherboard, board("b550", "AM4", "DDR4", "ATX"));

    let kept = compatible_parts(Category::Case, catalog.parts(Category::Case), &build);
    assert_eq!(ids(&kept), vec!["mid", "open"]);
}

#[test]
fn test_gpu_clearance_both_directions() {
    let catalog = sample_catalog();

    let mut build = Build::new();
    build.set(Category::Case, case("mid", "ATX Mid Tower", Some(330.0)));
    let kept = compatible_parts(Category::Gpu, catalog.parts(Category::Gpu), &build);
    assert_eq!(ids(&kept), vec!["short", "long"]);

    let mut build = Build::new();
    build.set(Category::Gpu, gpu("long", Some(320.0)));
    let kept = compatible_parts(Category::Case, catalog.parts(Category::Case), &build);
    // "open" declares no clearance, so it is never excluded by length.
    assert_eq!(ids(&kept), vec!["mid", "open"]);
}

#[test]
fn test_case_without_clearance_accepts_any_gpu() {
    let mut build = Build::new();
    build.set(Category::Case, case("open", "Open Frame", None));
    assert!(is_compatible(Category::Gpu, &gpu("huge", Some(999.0)), &build));
}

#[test]
fn test_gpu_without_length_counts_as_zero() {
    let mut build = Build::new();
    build.set(Category::Case, case("sff", "Mini Tower", Some(1.0)));
    assert!(is_compatible(Category::Gpu, &gpu("unknown", None), &build));
}

#[test]
fn test_missing_socket_on_both_sides_matches() {
    let mut build = Build::new();
    let mut bare_board = board("x", "AM4", "DDR4", "ATX");
    bare_board.socket = None;
    build.set(Category::Motherboard, bare_board);

    let mut bare_cpu = cpu("y", "AM4");
    bare_cpu.socket = None;
    assert!(is_compatible(Category::Cpu, &bare_cpu, &build));
    assert!(!is_compatible(Category::Cpu, &cpu("z", "AM4"), &build));
}

#[test]
fn test_failed_rules_names_each_violation() {
    let mut build = Build::new();
    build.set(Category::Cpu, cpu("r7", "AM5"));
    build.set(Category::Ram, ram("ddr5", "DDR5"));

    let candidate = board("b550", "AM4", "DDR4", "ATX");
    let names: Vec<&str> = failed_rules(Category::Motherboard, &candidate, &build)
        .iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["socket", "memory type"]);
}

#[test]
fn test_unrelated_categories_never_filtered() {
    let mut build = Build::new();
    build.set(Category::Cpu, cpu("r7", "AM5"));
    build.set(Category::Case, case("sff", "Mini Tower", Some(10.0)));
    let storage = vec![priced("ssd", "NVMe 1TB", Some(5999.0))];
    assert_eq!(compatible_parts(Category::Storage, &storage, &build).len(), 1);
}
