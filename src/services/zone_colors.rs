use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::db::get_repository;
use crate::db::models::{DeliveryZone, ZoneColorRow, ZoneMapBundle};

/// Default zone palette. Ten hex colors in the matplotlib tab10 family,
/// spread out enough that adjacent postal codes stay distinguishable.
static DEFAULT_PALETTE: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
        "#bcbd22", "#17becf",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
});

/// Deterministic postal-code to color assignment.
///
/// The same postal code always maps to the same palette entry, within one
/// process and across processes, so zone colors stay stable between
/// dashboard reloads. Different codes may collide on a color; the palette
/// only has to keep neighbouring zones readable, not unique.
pub struct ZoneColorAssigner {
    palette: Vec<String>,
}

impl ZoneColorAssigner {
    /// Assigner over the default palette.
    pub fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.clone(),
        }
    }

    /// Assigner over a caller-supplied palette.
    ///
    /// # Arguments
    /// * `palette` - Colors to draw from; must not be empty
    pub fn with_palette(palette: Vec<String>) -> Result<Self, String> {
        if palette.is_empty() {
            return Err("Zone color palette must not be empty".to_string());
        }
        Ok(Self { palette })
    }

    /// The palette this assigner draws from.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Stable numeric seed for a postal code.
    ///
    /// Purely numeric codes use their numeric value, so consecutive codes
    /// walk the palette in order. Anything else (and numeric strings too
    /// large for u64) is digested with SHA-256 and seeded from the first
    /// eight bytes, which keeps the mapping independent of process-random
    /// hashing.
    pub fn seed_for(postal_code: &str) -> u64 {
        let code = postal_code.trim();
        if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(numeric) = code.parse::<u64>() {
                return numeric;
            }
        }

        let digest = Sha256::digest(code.as_bytes());
        u64::from_be_bytes([
            digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
        ])
    }

    /// Color for a postal code.
    pub fn color_for(&self, postal_code: &str) -> &str {
        let index = (Self::seed_for(postal_code) % self.palette.len() as u64) as usize;
        &self.palette[index]
    }
}

impl Default for ZoneColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the zone map bundle: every zone joined with its assigned color.
/// Zones arrive and leave in the same order; duplicate postal codes keep
/// their rows and simply share a color.
pub fn compute_zone_map_data(
    zones: Vec<DeliveryZone>,
    assigner: &ZoneColorAssigner,
) -> Result<ZoneMapBundle, String> {
    let rows: Vec<ZoneColorRow> = zones
        .into_iter()
        .map(|zone| {
            let color = assigner.color_for(&zone.postal_code).to_string();
            ZoneColorRow { zone, color }
        })
        .collect();

    Ok(ZoneMapBundle {
        total_count: rows.len(),
        palette: assigner.palette().to_vec(),
        rows,
    })
}

/// Get the zone map bundle for one office.
/// This function orchestrates fetching zones from the repository and
/// assigning their colors. A missing palette means the default one.
pub async fn get_zone_map_data(
    office_id: &str,
    palette: Option<Vec<String>>,
) -> Result<ZoneMapBundle, String> {
    let repo = get_repository().map_err(|e| format!("Failed to get repository: {}", e))?;

    let zones = repo
        .fetch_zones(office_id)
        .await
        .map_err(|e| format!("Failed to fetch zones: {}", e))?;

    let assigner = match palette {
        Some(colors) => ZoneColorAssigner::with_palette(colors)?,
        None => ZoneColorAssigner::new(),
    };

    compute_zone_map_data(zones, &assigner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(postal: &str) -> DeliveryZone {
        DeliveryZone {
            postal_code: postal.to_string(),
            district: "Bandung".to_string(),
            subdistrict: "Cibiru".to_string(),
            area_km2: None,
            geometry_geojson: None,
            office_id: "40115".to_string(),
        }
    }

    #[test]
    fn numeric_codes_use_their_value() {
        assert_eq!(ZoneColorAssigner::seed_for("40115"), 40115);
        assert_eq!(ZoneColorAssigner::seed_for(" 40115 "), 40115);
        assert_eq!(ZoneColorAssigner::seed_for("0"), 0);
    }

    #[test]
    fn non_numeric_codes_hash_deterministically() {
        let first = ZoneColorAssigner::seed_for("BDG-40115");
        let second = ZoneColorAssigner::seed_for("BDG-40115");
        assert_eq!(first, second);
        assert_ne!(first, ZoneColorAssigner::seed_for("BDG-40116"));
    }

    #[test]
    fn oversized_numeric_codes_fall_back_to_hashing() {
        // 25 digits cannot fit in u64
        let code = "1234567890123456789012345";
        let seed = ZoneColorAssigner::seed_for(code);
        assert_eq!(seed, ZoneColorAssigner::seed_for(code));
    }

    #[test]
    fn consecutive_numeric_codes_walk_the_palette() {
        let assigner = ZoneColorAssigner::new();
        let a = assigner.color_for("40110");
        let b = assigner.color_for("40111");
        assert_ne!(a, b);

        // Ten palette entries: codes 10 apart wrap to the same color
        assert_eq!(assigner.color_for("40110"), assigner.color_for("40120"));
    }

    #[test]
    fn same_code_always_gets_same_color() {
        let assigner = ZoneColorAssigner::new();
        let color = assigner.color_for("TAS-46196").to_string();
        for _ in 0..10 {
            assert_eq!(assigner.color_for("TAS-46196"), color);
        }
    }

    #[test]
    fn custom_palette_is_used_and_empty_palette_rejected() {
        let assigner =
            ZoneColorAssigner::with_palette(vec!["#111111".to_string(), "#222222".to_string()])
                .unwrap();
        assert!(["#111111", "#222222"].contains(&assigner.color_for("40115")));

        assert!(ZoneColorAssigner::with_palette(vec![]).is_err());
    }

    #[test]
    fn zone_map_keeps_rows_and_order() {
        let zones = vec![zone("40115"), zone("40115"), zone("40293")];
        let bundle = compute_zone_map_data(zones, &ZoneColorAssigner::new()).unwrap();

        assert_eq!(bundle.total_count, 3);
        assert_eq!(bundle.rows[0].zone.postal_code, "40115");
        assert_eq!(bundle.rows[0].color, bundle.rows[1].color);
        assert_eq!(bundle.palette.len(), 10);
    }
}
