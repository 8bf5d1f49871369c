//! Title and badge threshold tables
//!
//! Titles reflect only the current streak (first matching entry, checked from
//! the highest threshold down). Badges are cumulative: every threshold at or
//! below the current streak contributes its label, and once earned a badge is
//! never revoked.

/// A streak threshold mapped to a display label
#[derive(Debug, Clone)]
pub struct ThresholdEntry {
    pub min_streak: u32,
    pub label: &'static str,
}

/// Title thresholds, highest first. The trailing zero entry is the
/// no-title default for streaks below one week.
pub static TITLES: &[ThresholdEntry] = &[
    ThresholdEntry {
        min_streak: 365,
        label: "Leyenda FeedGym",
    },
    ThresholdEntry {
        min_streak: 180,
        label: "Imparable",
    },
    ThresholdEntry {
        min_streak: 90,
        label: "Máquina de Constancia",
    },
    ThresholdEntry {
        min_streak: 30,
        label: "Guerrero del Mes",
    },
    ThresholdEntry {
        min_streak: 14,
        label: "Atleta Comprometido",
    },
    ThresholdEntry {
        min_streak: 7,
        label: "Principiante Prometedor",
    },
    ThresholdEntry {
        min_streak: 0,
        label: "",
    },
];

/// Badge thresholds (all qualifying entries apply, not just the highest)
pub static BADGES: &[ThresholdEntry] = &[
    ThresholdEntry {
        min_streak: 3,
        label: "🔥 3 Días",
    },
    ThresholdEntry {
        min_streak: 7,
        label: "✨ 1 Semana",
    },
    ThresholdEntry {
        min_streak: 14,
        label: "💪 2 Semanas",
    },
    ThresholdEntry {
        min_streak: 30,
        label: "🏆 1 Mes",
    },
    ThresholdEntry {
        min_streak: 60,
        label: "🥇 2 Meses",
    },
    ThresholdEntry {
        min_streak: 90,
        label: "🚀 3 Meses",
    },
    ThresholdEntry {
        min_streak: 180,
        label: "🌟 Medio Año",
    },
    ThresholdEntry {
        min_streak: 365,
        label: "👑 1 Año",
    },
];

/// Title for a streak: the label of the highest threshold met.
pub fn title_for(streak: u32) -> &'static str {
    TITLES
        .iter()
        .find(|t| streak >= t.min_streak)
        .map(|t| t.label)
        .unwrap_or("")
}

/// All badge labels earned at this streak length.
pub fn badges_for(streak: u32) -> Vec<&'static str> {
    BADGES
        .iter()
        .filter(|b| streak >= b.min_streak)
        .map(|b| b.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_boundaries() {
        assert_eq!(title_for(0), "");
        assert_eq!(title_for(6), "");
        assert_eq!(title_for(7), "Principiante Prometedor");
        assert_eq!(title_for(13), "Principiante Prometedor");
        assert_eq!(title_for(14), "Atleta Comprometido");
        assert_eq!(title_for(30), "Guerrero del Mes");
        assert_eq!(title_for(365), "Leyenda FeedGym");
        assert_eq!(title_for(1000), "Leyenda FeedGym");
    }

    #[test]
    fn test_badges_are_cumulative() {
        assert!(badges_for(0).is_empty());
        assert!(badges_for(2).is_empty());
        assert_eq!(badges_for(3), vec!["🔥 3 Días"]);
        assert_eq!(badges_for(6), vec!["🔥 3 Días"]);
        assert_eq!(badges_for(7), vec!["🔥 3 Días", "✨ 1 Semana"]);
        assert_eq!(badges_for(365).len(), BADGES.len());
    }

    #[test]
    fn test_titles_sorted_descending() {
        for pair in TITLES.windows(2) {
            assert!(pair[0].min_streak > pair[1].min_streak);
        }
        // Trailing entry is the default
        let last = TITLES.last().unwrap();
        assert_eq!(last.min_streak, 0);
        assert_eq!(last.label, "");
    }
}
