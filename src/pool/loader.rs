use super::Profile;
use crate::error::TfResult;
use crate::pool::SkillTiers;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Loads a JSON array of profile records.
pub fn load_profiles_json<R: Read>(reader: R) -> TfResult<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_json::from_reader(reader)?;
    debug!(count = profiles.len(), "loaded JSON pool");
    Ok(profiles)
}

/// Loads a CSV pool. Expected header:
/// id,name,rollOrRegistrationId,email,phone,beginner,intermediate,advanced,interests,visible
/// List columns are `;`-separated. Rows missing the first four columns are skipped.
pub fn load_profiles_csv<R: Read>(reader: R) -> TfResult<Vec<Profile>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut profiles = Vec::new();
    let mut skipped = 0;
    let mut row_idx = 0;

    for result in rdr.records() {
        row_idx += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!(row = row_idx, "CSV parse error: {}", e);
                skipped += 1;
                continue;
            }
        };

        if rec.len() < 4 || rec[0].trim().is_empty() {
            skipped += 1;
            continue;
        }

        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("").to_string();
        let phone = field(4);

        profiles.push(Profile {
            id: field(0),
            name: field(1),
            roll_or_registration_id: field(2),
            email: field(3),
            phone: if phone.is_empty() { None } else { Some(phone) },
            skills: SkillTiers {
                beginner: split_list(rec.get(5).unwrap_or("")),
                intermediate: split_list(rec.get(6).unwrap_or("")),
                advanced: split_list(rec.get(7).unwrap_or("")),
            },
            interests: split_list(rec.get(8).unwrap_or("")),
            visible: parse_visible(rec.get(9).unwrap_or("")),
        });
    }

    if skipped > 0 {
        warn!(skipped, "skipped invalid rows in pool CSV");
    }
    debug!(count = profiles.len(), "loaded CSV pool");
    Ok(profiles)
}

/// Dispatches on the file extension: `.csv` goes through the CSV
/// loader, everything else is treated as JSON.
pub fn load_pool_file(path: &str) -> TfResult<Vec<Profile>> {
    let file = File::open(path)?;
    let is_csv = Path::new(path)
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        load_profiles_csv(file)
    } else {
        load_profiles_json(file)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_visible(raw: &str) -> bool {
    // Absent or unparseable means opted in, matching the serde default.
    match raw.trim().to_ascii_lowercase().as_str() {
        "false" | "0" | "no" => false,
        _ => true,
    }
}
