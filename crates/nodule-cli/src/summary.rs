use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use nodule_cli::case::{FleischnerReport, LungRadsReport};
use nodule_model::{LungRadsCategory, NoduleType};
use nodule_normalization::{GrowthAssessment, GrowthClassification};

pub fn print_fleischner(report: &FleischnerReport) {
    let input = &report.input;
    let mut table = field_table();
    add_field(&mut table, "Nodule type", Cell::new(input.nodule_type));
    add_field(&mut table, "Size", Cell::new(input.size_category));
    if let Some(mm) = report.size_mm {
        add_field(&mut table, "Measured size", Cell::new(format!("{mm:.0} mm")));
    }
    if input.nodule_type == NoduleType::PartSolid {
        add_field(&mut table, "Solid component", Cell::new(input.solid_component));
    }
    add_field(&mut table, "Risk", Cell::new(input.risk));
    add_field(
        &mut table,
        "Multiple",
        Cell::new(if input.is_multiple { "yes" } else { "no" }),
    );

    let recommendation = &report.recommendation;
    add_field(
        &mut table,
        "Recommendation",
        Cell::new(&recommendation.recommendation).add_attribute(Attribute::Bold),
    );
    add_field(
        &mut table,
        "Follow-up",
        optional_cell(recommendation.follow_up_interval.as_deref()),
    );
    add_field(
        &mut table,
        "Notes",
        optional_cell(recommendation.additional_notes.as_deref()),
    );
    add_field(&mut table, "Reference", dim_cell(&recommendation.reference));
    println!("{table}");
}

pub fn print_lung_rads(report: &LungRadsReport) {
    let input = &report.input;
    let result = &report.result;
    let mut table = field_table();
    add_field(&mut table, "Nodule type", Cell::new(input.nodule_type));
    add_field(&mut table, "Size", Cell::new(input.size_category));
    if let Some(mm) = report.effective_size_mm {
        add_field(&mut table, "Measured size", Cell::new(format!("{mm:.1} mm")));
    }
    add_field(&mut table, "CT", Cell::new(input.ct_status));
    add_field(&mut table, "Status", Cell::new(input.nodule_status));
    if let Some(growth) = &report.growth {
        add_field(&mut table, "Growth", growth_cell(growth));
    }

    add_field(
        &mut table,
        "Category",
        category_cell(result.category, &result.display_category()),
    );
    if let Some(base) = result.base_category {
        let label = if result.is_reclassified {
            format!("{base} (stepped management)")
        } else {
            format!("{base} (before 4X upgrade)")
        };
        add_field(&mut table, "Base category", dim_cell(label));
    }
    add_field(
        &mut table,
        "Description",
        Cell::new(result.category.description()),
    );
    add_field(
        &mut table,
        "Malignancy",
        Cell::new(&result.probability_of_malignancy),
    );
    add_field(
        &mut table,
        "Management",
        Cell::new(&result.management).add_attribute(Attribute::Bold),
    );
    add_field(
        &mut table,
        "Notes",
        optional_cell(result.additional_notes.as_deref()),
    );
    println!("{table}");

    for note in &report.notes {
        eprintln!("note: {note}");
    }
}

pub fn print_categories() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Description"),
        header_cell("Malignancy"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in LungRadsCategory::ALL {
        table.add_row(vec![
            category_cell(category, category.as_str()),
            Cell::new(category.description()),
            Cell::new(category.probability_of_malignancy()),
        ]);
    }
    println!("{table}");
}

pub fn print_growth(assessment: &GrowthAssessment) {
    let mut table = field_table();
    add_field(
        &mut table,
        "Change",
        Cell::new(format!("{:+.1} mm", assessment.delta_mm)),
    );
    add_field(
        &mut table,
        "Interval",
        Cell::new(format!(
            "{} days ({:.1} months)",
            assessment.days, assessment.months
        )),
    );
    add_field(&mut table, "Outcome", growth_cell(assessment));
    println!("{table}");
    if let Some(note) = assessment.review_note() {
        eprintln!("note: {note}");
    }
}

fn field_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(16)),
        ColumnConstraint::UpperBoundary(Width::Percentage(80)),
    ]);
    table
}

fn add_field(table: &mut Table, label: &str, value: Cell) {
    table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value]);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(110);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_color(category: LungRadsCategory) -> Color {
    match category {
        LungRadsCategory::Cat0 | LungRadsCategory::S => Color::DarkGrey,
        LungRadsCategory::Cat1 | LungRadsCategory::Cat2 => Color::Green,
        LungRadsCategory::Cat3 => Color::Yellow,
        LungRadsCategory::Cat4A => Color::DarkYellow,
        LungRadsCategory::Cat4B | LungRadsCategory::Cat4X => Color::Red,
    }
}

fn category_cell(category: LungRadsCategory, label: &str) -> Cell {
    Cell::new(label)
        .fg(category_color(category))
        .add_attribute(Attribute::Bold)
}

fn growth_cell(assessment: &GrowthAssessment) -> Cell {
    let color = match assessment.classification {
        GrowthClassification::Growing => Color::Red,
        GrowthClassification::Stable => Color::Green,
        GrowthClassification::ManualReview => Color::Yellow,
    };
    Cell::new(assessment.summary()).fg(color)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
