//! Plain-text rendering of results.

use crate::analytics::AnalyticsSnapshot;
use crate::inference::GateReason;
use crate::knowledge::BreedRecord;
use crate::pipeline::{BreedDetails, BreedInsight, ImageReport};
use std::fmt::Write;

/// Render one classified image.
pub fn format_report(report: &ImageReport) -> String {
    let mut out = String::new();
    let meta = &report.image;
    let species = &report.result.species;

    let _ = writeln!(
        out,
        "{} ({}x{}, {} bytes)",
        meta.name, meta.width, meta.height, meta.byte_size
    );
    let _ = writeln!(
        out,
        "  Species: {} ({:.1}%, {} confidence)",
        species.result.label,
        species.result.confidence * 100.0,
        species.level
    );
    for p in &species.probabilities {
        let _ = writeln!(out, "    {:<8} {:>5.1}%", p.label, p.probability * 100.0);
    }

    match report.result.gate.reason {
        Some(GateReason::NotCattle) => {
            let _ = writeln!(out, "  No cattle or buffalo detected; breed not identified.");
        }
        Some(GateReason::LowConfidence) => {
            let _ = writeln!(
                out,
                "  Species confidence too low; try a clearer photo of the animal."
            );
        }
        None => {}
    }

    match &report.result.breed {
        Some(BreedDetails::Found(insight)) => {
            let _ = writeln!(out, "  Breed: {}", insight.display_name);
            out.push_str(&indent(&format_insight(insight), 2));
        }
        Some(BreedDetails::NotFound(placeholder)) => {
            let _ = writeln!(out, "  Breed: {}", placeholder.display_name);
            let _ = writeln!(out, "  {}", placeholder.message);
        }
        None => {}
    }
    out
}

/// Render the attributes, peers, advisories and economics of a breed.
pub fn format_insight(insight: &BreedInsight) -> String {
    let mut out = String::new();
    let r = &insight.record;

    let _ = writeln!(out, "{} ({})", insight.display_name, r.breed_type);
    for (field, value) in [
        ("Origin", &r.origin),
        ("Milk yield", &r.milk_yield),
        ("Fat content", &r.fat_content),
        ("Characteristics", &r.characteristics),
        ("Color", &r.color),
        ("Size", &r.size),
        ("Weight", &r.weight),
        ("Special features", &r.special_features),
        ("Climate", &r.climate_adaptation),
        ("Purpose", &r.breeding_purpose),
        ("Lactation period", &r.lactation_period),
        ("Calving interval", &r.calving_interval),
    ] {
        let _ = writeln!(out, "  {field:<17} {value}");
    }
    let _ = writeln!(out, "  {}", r.description);

    if !insight.peers.is_empty() {
        let _ = writeln!(out, "\nCompared with peers:");
        let _ = writeln!(out, "  {:<20} {:>12} {:>8}", "Breed", "Avg yield L", "Avg fat");
        for peer in &insight.peers {
            let marker = if peer.is_target { "*" } else { " " };
            let _ = writeln!(
                out,
                "{marker} {:<20} {:>12.0} {:>7.2}%",
                peer.display_name, peer.avg_yield, peer.avg_fat
            );
        }
    }

    let _ = writeln!(out, "\nRecommendations:");
    for advice in &insight.recommendations {
        let _ = writeln!(out, "  - {advice}");
    }

    let e = &insight.economics;
    let _ = writeln!(out, "\nEconomics:");
    let _ = writeln!(out, "  Primary income: {}", e.primary_income);
    let _ = writeln!(out, "  Milk value:     {}", e.milk_value);
    let _ = writeln!(out, "  Maintenance:    {}", e.maintenance);
    let _ = writeln!(out, "  Farm size:      {} scale operations", e.farm_size);
    let _ = writeln!(out, "  Climate:        {}", e.climate);
    let _ = writeln!(out, "  Farmer type:    {}", e.farmer_type);
    out
}

/// Render a breed listing as a table.
pub fn format_breed_list<'a>(records: impl IntoIterator<Item = &'a BreedRecord>) -> String {
    let mut out = String::new();
    let mut count = 0;
    for record in records {
        let _ = writeln!(
            out,
            "{:<20} {:<8} {}",
            crate::knowledge::display_name(&record.name),
            record.breed_type,
            record.origin
        );
        count += 1;
    }
    let _ = writeln!(out, "\n{count} breed(s)");
    out
}

/// Render the knowledge-base summary.
pub fn format_snapshot(stats: &AnalyticsSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Breeds:        {}", stats.total);
    let _ = writeln!(
        out,
        "  Cow:         {}\n  Buffalo:     {}",
        stats.by_type.cow, stats.by_type.buffalo
    );
    let _ = writeln!(
        out,
        "  Indian:      {}\n  Exotic:      {}",
        stats.by_origin.indian, stats.by_origin.international
    );
    match stats.average_max_yield {
        Some(avg) => {
            let _ = writeln!(out, "Average maximum yield: {avg:.0} L/lactation");
        }
        None => {
            let _ = writeln!(out, "Average maximum yield: n/a");
        }
    }

    if !stats.top_by_yield.is_empty() {
        let _ = writeln!(out, "\nTop producers:");
        for (rank, row) in stats.top_by_yield.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<20} {:<8} {:>6.0} L",
                rank + 1,
                row.display_name,
                row.breed_type,
                row.max_yield
            );
        }
    }
    out
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{pad}{line}\n")
            }
        })
        .collect()
}
