use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nlg_cli::generate::Refusal;
use nlg_cli::inspect::Inspection;
use nlg_entitlement::{GateEntry, SubscriptionPlan, is_feature_allowed};
use nlg_model::{ChartType, ExportFormat, MappingOrigin, SubscriptionTier, UserSubscription};

pub fn print_inspection(inspection: &Inspection) {
    println!("File: {}", inspection.file.display());
    println!("Columns: {}  Rows: {}", inspection.columns, inspection.rows);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Format"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in inspection.mapping.columns() {
        let descriptor = &column.descriptor;
        table.add_row(vec![
            dim_cell(column.index + 1),
            Cell::new(&column.header),
            Cell::new(&descriptor.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&descriptor.label),
            Cell::new(descriptor.semantic_type.label()),
            descriptor
                .format
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            origin_cell(column.origin),
        ]);
    }
    println!("{table}");

    let report = &inspection.report;
    let metrics = &report.metrics;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Valid %"),
        header_cell("Missing values"),
        header_cell("Duplicates"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(metrics.total_rows),
        count_cell(metrics.valid_rows, Color::Green),
        count_cell(metrics.invalid_rows(), Color::Red),
        Cell::new(format!("{:.1}", metrics.valid_ratio() * 100.0)),
        count_cell(metrics.missing_values, Color::Yellow),
        count_cell(metrics.duplicates, Color::Yellow),
        count_cell(report.warning_total(), Color::Red),
    ]);
    println!("{table}");

    if report.is_valid {
        println!("No data quality problems found.");
        return;
    }
    println!();
    println!("Warnings:");
    for warning in &report.warnings {
        println!("- {warning}");
    }
    if report.omitted_warnings > 0 {
        println!("  ... and {} more", report.omitted_warnings);
    }
    if !report.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("- {suggestion}");
        }
    }
}

pub fn print_plans(plans: &[SubscriptionPlan]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tier"),
        header_cell("Plan"),
        header_cell("Price"),
        header_cell("Charts"),
        header_cell("Exports"),
        header_cell("Support"),
    ]);
    apply_table_style(&mut table);
    for plan in plans {
        let name = if plan.popular {
            Cell::new(format!("{} (popular)", plan.name)).add_attribute(Attribute::Bold)
        } else {
            Cell::new(plan.name)
        };
        let charts: Vec<&str> = plan.chart_types.iter().map(ChartType::name).collect();
        let exports: Vec<&str> = plan.exports.iter().map(ExportFormat::name).collect();
        table.add_row(vec![
            tier_cell(plan.tier),
            name,
            Cell::new(plan.price_label()),
            Cell::new(charts.join(", ")),
            Cell::new(exports.join(", ")),
            Cell::new(plan.support.as_str()),
        ]);
    }
    println!("{table}");
    for plan in plans {
        println!();
        println!("{}: {}", plan.name, plan.description);
        for feature in plan.features {
            println!("  + {feature}");
        }
        for limitation in plan.limitations {
            println!("  - {limitation}");
        }
    }
}

pub fn print_gates(tier: SubscriptionTier, gates: &[GateEntry]) {
    println!("Tier: {tier}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Item"),
        header_cell("Detail"),
        header_cell("Requires"),
        header_cell("Allowed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for gate in gates {
        table.add_row(vec![
            dim_cell(gate.kind.as_str()),
            Cell::new(gate.name),
            gate.detail.map_or_else(|| dim_cell("-"), Cell::new),
            tier_cell(gate.required_tier),
            allowed_cell(is_feature_allowed(tier, gate.required_tier)),
        ]);
    }
    println!("{table}");
}

pub fn print_status(subscription: &UserSubscription) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tier"),
        header_cell("Used"),
        header_cell("Limit"),
        header_cell("Remaining"),
    ]);
    apply_table_style(&mut table);
    let limit = subscription
        .generations_limit
        .map_or_else(|| dim_cell("unlimited"), Cell::new);
    let remaining = match subscription.remaining() {
        Some(0) => Cell::new(0).fg(Color::Red).add_attribute(Attribute::Bold),
        Some(count) => Cell::new(count),
        None => dim_cell("unlimited"),
    };
    table.add_row(vec![
        tier_cell(subscription.tier),
        Cell::new(subscription.generations_used),
        limit,
        remaining,
    ]);
    println!("{table}");
}

/// One line per refused item, naming the tier that unlocks it.
pub fn print_refusals(refusals: &[Refusal], tier: SubscriptionTier) {
    for refusal in refusals {
        eprintln!(
            "'{}' requires the {} tier (current: {tier})",
            refusal.item, refusal.required_tier
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tier_cell(tier: SubscriptionTier) -> Cell {
    let color = match tier {
        SubscriptionTier::Free => Color::Grey,
        SubscriptionTier::Basic => Color::Blue,
        SubscriptionTier::Pro => Color::Magenta,
    };
    Cell::new(tier.as_str()).fg(color)
}

fn origin_cell(origin: MappingOrigin) -> Cell {
    match origin {
        MappingOrigin::Canonical => Cell::new("dictionary").fg(Color::Green),
        MappingOrigin::Derived => dim_cell("header"),
        MappingOrigin::UserOverride => Cell::new("override").fg(Color::Yellow),
    }
}

fn allowed_cell(allowed: bool) -> Cell {
    if allowed {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
