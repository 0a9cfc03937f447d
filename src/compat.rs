//! Rule-based compatibility filtering.
//!
//! Each rule ties the category being shopped for to a category that may
//! already sit in the build. A rule only applies when that slot is filled;
//! a candidate is kept when every applicable rule passes.

use crate::build::Build;
use crate::catalog::{text_attr, Category, Part};

/// `check(candidate, selected)` is only called when the build has a part in
/// `selected`. Rules that need a declared attribute return `true` when it is
/// missing.
#[derive(Clone, Copy)]
pub struct CompatRule {
    pub shopping: Category,
    pub selected: Category,
    pub name: &'static str,
    pub check: fn(&Part, &Part) -> bool,
}

impl std::fmt::Debug for CompatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatRule")
            .field("shopping", &self.shopping)
            .field("selected", &self.selected)
            .field("name", &self.name)
            .finish()
    }
}

pub const RULES: &[CompatRule] = &[
    CompatRule {
        shopping: Category::Cpu,
        selected: Category::Motherboard,
        name: "socket",
        check: |cpu: &Part, board: &Part| cpu.socket == board.socket,
    },
    CompatRule {
        shopping: Category::Motherboard,
        selected: Category::Cpu,
        name: "socket",
        check: |board: &Part, cpu: &Part| board.socket == cpu.socket,
    },
    CompatRule {
        shopping: Category::Ram,
        selected: Category::Motherboard,
        name: "memory type",
        check: |ram: &Part, board: &Part| ram.kind == board.ram_type,
    },
    CompatRule {
        shopping: Category::Motherboard,
        selected: Category::Ram,
        name: "memory type",
        check: |board: &Part, ram: &Part| board.ram_type == ram.kind,
    },
    CompatRule {
        shopping: Category::Case,
        selected: Category::Motherboard,
        name: "form factor",
        check: |case: &Part, board: &Part| {
            form_factor_compatible(text_attr(&case.form_factor), text_attr(&board.form_factor))
        },
    },
    CompatRule {
        shopping: Category::Motherboard,
        selected: Category::Case,
        name: "form factor",
        check: |board: &Part, case: &Part| {
            form_factor_compatible(text_attr(&case.form_factor), text_attr(&board.form_factor))
        },
    },
    CompatRule {
        shopping: Category::Gpu,
        selected: Category::Case,
        name: "gpu clearance",
        check: |gpu: &Part, case: &Part| gpu_fits(gpu, case),
    },
    CompatRule {
        shopping: Category::Case,
        selected: Category::Gpu,
        name: "gpu clearance",
        check: |case: &Part, gpu: &Part| gpu_fits(gpu, case),
    },
];

/// A case without a declared (non-zero) clearance accepts any card; a card
/// without a length counts as zero.
fn gpu_fits(gpu: &Part, case: &Part) -> bool {
    match case.max_gpu_length {
        Some(max) if max != 0.0 && !max.is_nan() => gpu.length.unwrap_or(0.0) <= max,
        _ => true,
    }
}

/// Rules that apply when shopping for `category`.
pub fn rules_for(category: Category) -> impl Iterator<Item = &'static CompatRule> {
    RULES.iter().filter(move |r| r.shopping == category)
}

pub fn is_compatible(category: Category, candidate: &Part, build: &Build) -> bool {
    rules_for(category).all(|rule| match build.get(rule.selected) {
        Some(selected) => (rule.check)(candidate, selected),
        None => true,
    })
}

/// Rules the candidate fails against the current build.
pub fn failed_rules(category: Category, candidate: &Part, build: &Build) -> Vec<&'static CompatRule> {
    rules_for(category)
        .filter(|rule| {
            build
                .get(rule.selected)
                .is_some_and(|selected| !(rule.check)(candidate, selected))
        })
        .collect()
}

/// Candidates compatible with `build`, in their original order.
pub fn compatible_parts<'a>(category: Category, candidates: &'a [Part], build: &Build) -> Vec<&'a Part> {
    candidates
        .iter()
        .filter(|part| is_compatible(category, part, build))
        .collect()
}

/// Whether a case accepts a board, judged by form-factor labels.
///
/// Case classes accept boards at or below their size. Missing labels and
/// labels outside the known classes are accepted.
pub fn form_factor_compatible(case_ff: Option<&str>, board_ff: Option<&str>) -> bool {
    let (Some(case_ff), Some(board_ff)) = (case_ff, board_ff) else {
        return true;
    };
    if case_ff.is_empty() || board_ff.is_empty() {
        return true;
    }

    let case = case_ff.to_lowercase();
    let board = board_ff.to_lowercase();

    if case.contains("eatx") || case.contains("full tower") {
        return true;
    }
    if case.contains("atx mid") || case == "atx" {
        return ["atx", "micro", "mini"].iter().any(|f| board.contains(f));
    }
    if case.contains("micro") {
        return board.contains("micro") || board.contains("mini");
    }
    if case.contains("mini") {
        return board.contains("mini");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_points_at_another_category() {
        for rule in RULES {
            assert_ne!(rule.shopping, rule.selected, "{:?}", rule);
        }
        assert_eq!(rules_for(Category::Motherboard).count(), 3);
        assert_eq!(rules_for(Category::Storage).count(), 0);
    }

    #[test]
    fn gpu_clearance_ignores_zero_limit() {
        let mut case = Part::new("case", "Case");
        case.max_gpu_length = Some(0.0);
        let mut gpu = Part::new("gpu", "Card");
        gpu.length = Some(400.0);
        assert!(gpu_fits(&gpu, &case));

        case.max_gpu_length = Some(300.0);
        assert!(!gpu_fits(&gpu, &case));
    }
}
