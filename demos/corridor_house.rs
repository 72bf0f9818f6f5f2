//! 側走廊溫室批次重算示例

use ghbom_calc::{ClampCalculator, ReportBuilder};
use ghbom_core::{
    ArchSupportType, Category, ComponentRecord, ComponentSection, CorridorConfig, EngineConfig,
    FrameConfig, GutterBracketType, ParameterBag, RateTable, StructuralParameters, TrussConfig,
};
use ghbom_store::{DirtyTracker, LineStore, MemoryLineStore, ProjectInput, Recomputer};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== 側走廊溫室批次重算示例 ===\n");

    let components = vec![
        ComponentRecord::new(ComponentSection::Frame, "Main Columns", 24).with_size_mm(60.0),
        ComponentRecord::new(ComponentSection::Truss, "Bottom Chord", 24).with_size_mm(50.0),
        ComponentRecord::new(ComponentSection::Truss, "Small Arch", 24).with_size_mm(42.0),
        ComponentRecord::new(ComponentSection::Truss, "Arch Support Small for Big Arch", 48),
        ComponentRecord::new(ComponentSection::Asc, "Front Span ASC Pipes", 6).with_size_mm(42.0),
        ComponentRecord::new(ComponentSection::Asc, "Front Span ASC Support", 12),
        ComponentRecord::new(ComponentSection::Asc, "Front Bay ASC Pipes", 8).with_size_mm(42.0),
    ];

    // 專案 1：以結構化參數建立
    let structured = StructuralParameters::new(
        FrameConfig::new(3, 7),
        TrussConfig::new(ArchSupportType::ArchToBottom).with_gutter_bracket(GutterBracketType::Arch),
    )
    .with_corridors(
        CorridorConfig::default()
            .with_widths(3.0, 0.0, 2.5, 0.0)
            .with_support_hockeys(2)
            .with_bay_side_clamps(true),
    );

    // 專案 2：以扁平參數袋建立
    let bag = ParameterBag::from_json(
        r#"{
            "no_of_spans": 3,
            "no_of_bays": 7,
            "arch_support_type": "arch_2_bottom",
            "gutter_bracket_type": "f_bracket",
            "bay_side_border_purlin": 1,
            "is_side_coridoors": true,
            "width_front_span_coridoor": 3.0
        }"#,
    )?;
    let from_bag = StructuralParameters::from_bag(&bag);

    let mut inputs = HashMap::new();
    inputs.insert("GH-C-001".to_string(), ProjectInput::new("GH-C-001", structured, components.clone()));
    inputs.insert("GH-C-002".to_string(), ProjectInput::new("GH-C-002", from_bag, components));

    let mut tracker = DirtyTracker::new();
    for project_id in inputs.keys() {
        tracker.mark_dirty(project_id.clone());
    }

    let recomputer = Recomputer::new(
        ClampCalculator::new(EngineConfig::default()),
        RateTable::new(),
        MemoryLineStore::new(),
    );

    for (project_id, outcome) in recomputer.recompute_dirty(&mut tracker, &inputs) {
        match outcome {
            Ok(outcome) => println!(
                "{}: {} 行，共 {} 個，警告 {}",
                project_id,
                outcome.lines_written,
                outcome.total_quantity,
                outcome.warnings.len()
            ),
            Err(e) => println!("{}: 重算失敗 {}", project_id, e),
        }
    }

    let builder = ReportBuilder::default();
    for project_id in ["GH-C-001", "GH-C-002"] {
        let lines = recomputer.store().lines(project_id, Category::Clamps)?;
        let report = builder.build(&lines);

        println!("\n{}:", project_id);
        for section in &report.sections {
            println!("  {}: {} 個", section.title, section.quantity_total);
            for line in &section.lines {
                println!("    - {:<36} {:>4}", line.name, line.quantity);
            }
        }
    }

    println!("\n剩餘待重算: {}", tracker.len());

    Ok(())
}
