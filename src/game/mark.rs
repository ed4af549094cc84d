use super::board::Cell;

/// The symbol a player places. Also used as the turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Nought,
    Cross,
}

impl Mark {
    /// Get the mark that plays after this one
    pub fn other(self) -> Mark {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }

    /// Convert mark to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Nought => Cell::Nought,
            Mark::Cross => Cell::Cross,
        }
    }

    /// Get mark name for display
    pub fn name(self) -> &'static str {
        match self {
            Mark::Nought => "Nought",
            Mark::Cross => "Cross",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_mark() {
        assert_eq!(Mark::Nought.other(), Mark::Cross);
        assert_eq!(Mark::Cross.other(), Mark::Nought);
    }

    #[test]
    fn test_mark_to_cell() {
        assert_eq!(Mark::Nought.to_cell(), Cell::Nought);
        assert_eq!(Mark::Cross.to_cell(), Cell::Cross);
    }

    #[test]
    fn test_mark_name() {
        assert_eq!(Mark::Nought.name(), "Nought");
        assert_eq!(Mark::Cross.name(), "Cross");
    }

    #[test]
    fn test_mark_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            start: Mark,
        }
        let w: Wrapper = toml::from_str("start = \"nought\"").unwrap();
        assert_eq!(w.start, Mark::Nought);
    }
}
