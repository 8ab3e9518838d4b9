//! Synthetic sky reports generated from free-text queries.
//!
//! These reports are placeholder content for a ZIP-code or place-name search
//! box. They are derived from a hash of the query text only and have no
//! connection to the light-sample catalog, the resolver or the scoring
//! engine. Never present them as measurements.

/// Fictional stargazing spots a synthetic report can recommend.
pub const STARGAZING_SPOTS: [&str; 6] = [
    "Pine Ridge Overlook",
    "Cedar Valley Dark Park",
    "Silver Mesa Trailhead",
    "Whisper Dunes Reserve",
    "North Basin Lookout",
    "Blue Canyon Ridge",
];

/// A deterministic, made-up report for a location query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntheticReport {
    /// The trimmed query the report was generated for.
    pub query: String,
    /// Pseudo Bortle class in `1..=9`.
    pub bortle_score: u8,
    /// Pseudo Milky Way visibility percentage in `5..=95`.
    pub milky_way_visibility: u8,
    /// Pseudo star count in `250..=5000`.
    pub stars_visible_estimate: u32,
    /// One of [`STARGAZING_SPOTS`].
    pub best_nearby_spot: &'static str,
}

impl SyntheticReport {
    /// Generate a report for `query`, or `None` when it is blank.
    ///
    /// The same query (ignoring surrounding whitespace and letter case)
    /// always yields the same figures; `query` keeps the caller's casing.
    ///
    /// # Examples
    /// ```
    /// use luminight_core::SyntheticReport;
    ///
    /// let report = SyntheticReport::from_query("  Sedona ").expect("non-blank query");
    /// let shouted = SyntheticReport::from_query("SEDONA").expect("non-blank query");
    /// assert_eq!(report.query, "Sedona");
    /// assert_eq!(report.bortle_score, shouted.bortle_score);
    /// assert_eq!(report.best_nearby_spot, shouted.best_nearby_spot);
    /// assert!((1..=9).contains(&report.bortle_score));
    /// assert!(SyntheticReport::from_query("   ").is_none());
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the seed is reduced modulo small table sizes"
    )]
    pub fn from_query(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let seed = query_seed(trimmed);
        let bortle = seed % 9 + 1;
        let milky_way = (95 + seed % 11).saturating_sub(bortle * 9).clamp(5, 95);
        let stars = (5200 + seed % 280).saturating_sub(bortle * 430).clamp(250, 5000);
        let spot_index = usize::try_from(seed % 6).unwrap_or_default();
        Some(Self {
            query: trimmed.to_owned(),
            bortle_score: narrow(bortle),
            milky_way_visibility: narrow(milky_way),
            stars_visible_estimate: u32::try_from(stars).unwrap_or(u32::MAX),
            best_nearby_spot: STARGAZING_SPOTS
                .get(spot_index)
                .copied()
                .unwrap_or("Pine Ridge Overlook"),
        })
    }
}

/// Sum of the UTF-16 code units of the lowercased query.
fn query_seed(query: &str) -> u64 {
    query
        .to_lowercase()
        .encode_utf16()
        .map(u64::from)
        .sum()
}

fn narrow(value: u64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
