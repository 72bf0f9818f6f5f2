//! W 型桁架溫室夾具計算示例

use ghbom_calc::{
    border_purlin_summary, clamps_size_summary, ClampCalculator, ComponentIndex, DetailBuilder,
    Materializer,
};
use ghbom_core::{
    ArchSupportType, Category, ClampConfig, ComponentRecord, ComponentSection, EngineConfig,
    FrameConfig, PurlinFirstType, PurlinSecondType, RateEntry, RateTable, StructuralParameters,
    ThickColumn, TrussConfig,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== W 型桁架溫室夾具計算示例 ===\n");

    // 4 跨 × 10 間，四角粗柱，2 條錨框線
    let params = StructuralParameters::new(
        FrameConfig::new(4, 10)
            .with_thick_column(ThickColumn::FourCorner)
            .with_anchor_frame_lines(2)
            .with_middle_columns_per_af(1),
        TrussConfig::new(ArchSupportType::W).with_bottom_chord(2),
    )
    .with_clamps(
        ClampConfig::default()
            .with_big_purlin(PurlinFirstType::FullClamp, Some(PurlinSecondType::HalfClamp))
            .with_border_purlins(1, 1)
            .with_afx_lines(1, 0, 0),
    );

    let frame = |name: &str, nos: i64, mm: f64| {
        ComponentRecord::new(ComponentSection::Frame, name, nos).with_size_mm(mm)
    };
    let truss = |name: &str, nos: i64, mm: f64| {
        ComponentRecord::new(ComponentSection::Truss, name, nos).with_size_mm(mm)
    };

    let index = ComponentIndex::from_records(vec![
        frame("Main Columns", 41, 60.0),
        frame("AF Main Columns", 6, 76.0),
        frame("Thick Columns", 4, 89.0),
        frame("Middle Columns", 8, 48.0),
        truss("Bottom Chord", 44, 50.0),
        truss("V Support Bottom Chord", 88, 25.0),
        truss("Big Arch", 44, 60.0),
        truss("Big Arch Purlin", 60, 32.0),
        ComponentRecord::new(ComponentSection::Lower, "Internal CC Cross Bracing X", 4),
    ]);

    let rates = RateTable::from_entries(vec![
        RateEntry::new("Full Clamp", Category::Clamps, "50mm", Decimal::new(1250, 2)),
        RateEntry::new("Full Clamp", Category::Clamps, "60mm", Decimal::new(1450, 2)),
        RateEntry::new("Half Clamp", Category::Clamps, "60mm", Decimal::new(980, 2)),
    ]);

    let config = EngineConfig::default();
    let calculator = ClampCalculator::new(config.clone());
    let result = calculator.calculate(&params, &index)?;

    println!("計算區段:");
    for section in &result.sections {
        println!("  - {} ({} 種)", section.label, section.entries.len());
    }

    let lines = Materializer::materialize("GH-W-001", &result.accumulator, &rates, &config);
    println!("\n明細行:");
    for line in &lines {
        println!(
            "  - {:<40} 數量: {:>4}  單價: {:>6}  小計: {:>8}",
            line.name, line.quantity, line.unit_price, line.total
        );
    }

    println!("\n計算明細:");
    for detail in DetailBuilder::build(&result.sections, &rates, &config) {
        println!(
            "  {:>4} {:<28} {:<40} {:>4}",
            detail.sequence, detail.section, detail.component, detail.quantity
        );
    }

    println!("\n尺寸摘要: {}", clamps_size_summary(&lines));
    println!("邊檁條: {}", border_purlin_summary(&params));

    for warning in &result.warnings {
        println!("警告 [{}]: {}", warning.rule, warning.message);
    }

    Ok(())
}
