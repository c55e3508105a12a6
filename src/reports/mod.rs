// ===== teamforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::HashMap;
use teamforge::pool::Profile;
use teamforge::ranking::{PartitionOutcome, RankedTeam};

pub fn print_recommendations(seed: &Profile, teams: &[RankedTeam]) {
    println!("\n=== 🏆 TOP TEAMS FOR {} ===", seed.name);

    if teams.is_empty() {
        println!("No candidate teams survived ranking.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Fitness").fg(Color::Cyan),
        Cell::new("Member"),
        Cell::new("Key Skills"),
        Cell::new("Interests"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for team in teams {
        for (i, member) in team.team_members.iter().enumerate() {
            let (rank_cell, fitness_cell) = if i == 0 {
                (
                    Cell::new(format!("#{}", team.rank)).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.4}", team.fitness)).fg(Color::Cyan),
                )
            } else {
                (Cell::new(""), Cell::new(""))
            };

            table.add_row(vec![
                rank_cell,
                fitness_cell,
                Cell::new(&member.name).add_attribute(Attribute::Bold),
                Cell::new(member.key_skills.join(", ")),
                Cell::new(member.interests.join(", ")),
            ]);
        }
    }
    println!("{}", table);
}

pub fn print_partition(outcome: &PartitionOutcome, profiles: &[Profile]) {
    println!("\n=== 🏆 BEST PARTITION ===");
    println!("Fitness: {:.4}", outcome.fitness);

    let names: HashMap<&str, &str> = profiles
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Bucket").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Members"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (bucket, members) in &outcome.buckets {
        let labels: Vec<String> = members
            .iter()
            .map(|id| match names.get(id.as_str()) {
                Some(name) => format!("{} ({})", name, id),
                None => id.clone(),
            })
            .collect();

        table.add_row(vec![
            Cell::new(format!("{}", bucket)).add_attribute(Attribute::Bold),
            Cell::new(format!("{}", members.len())),
            Cell::new(labels.join(", ")),
        ]);
    }
    println!("{}", table);
}
