use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rigvisor::build::Build;
use rigvisor::cart::Cart;
use rigvisor::catalog::{Catalog, Category, Part};
use rigvisor::format::{format_price, format_specs};
use rigvisor::scorer::{ScoreDetails, ScoreTier};
use rigvisor::shop::{Listing, Pager, NO_RESULTS};
use rigvisor::storage::Theme;

const BAR_WIDTH: usize = 20;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::High => Color::Green,
        ScoreTier::Medium => Color::Yellow,
        ScoreTier::Low => Color::Red,
    }
}

fn bar(percent: i32) -> String {
    let filled = (percent.clamp(0, 100) as usize * BAR_WIDTH) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn print_categories(catalog: &Catalog) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Icon"),
        Cell::new("Parts").add_attribute(Attribute::Bold),
    ]);
    for category in Category::all() {
        table.add_row(vec![
            Cell::new(category.as_ref()),
            Cell::new(category.display_name()),
            Cell::new(category.info().icon),
            Cell::new(catalog.parts(category).len()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_part_choices(category: Category, parts: &[&Part], excluded: &[(&Part, Vec<&'static str>)]) {
    println!("\nSelect {}", category.display_name());
    if parts.is_empty() {
        println!("{}", NO_RESULTS);
    } else {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Id").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Specs"),
            Cell::new("Price").fg(Color::Cyan),
        ]);
        for part in parts {
            table.add_row(vec![
                Cell::new(&part.id),
                Cell::new(&part.name),
                Cell::new(format_specs(part)),
                Cell::new(format_price(part.price)).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);
    }

    if !excluded.is_empty() {
        println!("\nHidden (incompatible with current build):");
        let mut table = new_table();
        for (part, rules) in excluded {
            table.add_row(vec![
                Cell::new(&part.id),
                Cell::new(&part.name),
                Cell::new(rules.join(", ")).fg(Color::Red),
            ]);
        }
        println!("{}", table);
    }
}

pub fn print_build(build: &Build) {
    println!("\n🖥️  === YOUR BUILD === 🖥️");
    if build.is_empty() {
        println!("No parts selected yet.");
    } else {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Part").add_attribute(Attribute::Bold),
            Cell::new("Price").fg(Color::Cyan),
        ]);
        for (category, part) in build.selected() {
            table.add_row(vec![
                Cell::new(category.display_name()),
                Cell::new(&part.name),
                Cell::new(format_price(part.price)).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);
    }
    println!("Total: {}", format_price(Some(build.total_price())));
    println!("Status: ✔ {}", build.compatibility_status());
}

pub fn print_scores(details: &ScoreDetails, debug: bool) {
    let mut table = new_table();
    let rows = [
        ("Gaming", details.performance.gaming),
        ("Workstation", details.performance.workstation),
    ];
    for (label, percent) in rows {
        let tier = ScoreTier::from_percent(percent);
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(bar(percent)).fg(tier_color(tier)),
            Cell::new(format!("{}%", percent)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);

    if debug {
        println!(
            "   raw: cpu {:.2} gpu {:.2} ram {:.2} | norm: cpu {:.3} gpu {:.3} ram {:.3}",
            details.raw.cpu,
            details.raw.gpu,
            details.raw.ram,
            details.normalized.cpu,
            details.normalized.gpu,
            details.normalized.ram
        );
    }
}

pub fn print_shop_page(title: &str, pager: &Pager<Listing<'_>>) {
    println!("\n🛒 {} ({} products)", title, pager.total_items());
    let items = pager.page_items();
    if items.is_empty() {
        println!("{}", NO_RESULTS);
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Specs"),
        Cell::new("Price").fg(Color::Cyan),
    ]);
    for listing in items {
        table.add_row(vec![
            Cell::new(listing.category_name()),
            Cell::new(&listing.part.id),
            Cell::new(&listing.part.name),
            Cell::new(format_specs(listing.part)),
            Cell::new(format_price(listing.part.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);

    if let Some(controls) = pager.controls() {
        let pages: Vec<String> = controls
            .pages
            .iter()
            .map(|&p| {
                if p == controls.current {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!(
            "{} {} {}",
            if controls.prev_disabled { " " } else { "<" },
            pages.join(" "),
            if controls.next_disabled { " " } else { ">" },
        );
    }
}

pub fn print_cart(cart: &Cart) {
    match cart.badge() {
        Some(count) => println!("\n🛒 Cart ({})", count),
        None => {
            println!("\n🛒 Your cart is empty.");
            return;
        }
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Price").fg(Color::Cyan),
    ]);
    for (i, part) in cart.items().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&part.name),
            Cell::new(format_price(part.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!("Total: {}", format_price(Some(cart.total())));
}

pub fn print_theme(theme: Theme) {
    println!("Theme: {}", theme);
}
