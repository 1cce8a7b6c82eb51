/// Coarse frequency buckets derived from a word's rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyLevel {
    VeryCommon,
    Common,
    Average,
    Rare,
    Unknown,
}

impl FrequencyLevel {
    /// Bucket for a rank (lower = more common)
    pub fn from_rank(rank: Option<u32>) -> Self {
        match rank {
            Some(rank) if rank <= 500 => FrequencyLevel::VeryCommon,
            Some(rank) if rank <= 1500 => FrequencyLevel::Common,
            Some(rank) if rank <= 3000 => FrequencyLevel::Average,
            Some(_) => FrequencyLevel::Rare,
            None => FrequencyLevel::Unknown,
        }
    }

    /// Label shown in the study sheet
    pub fn label_nl(&self) -> &'static str {
        match self {
            FrequencyLevel::VeryCommon => "Zeer vaak",
            FrequencyLevel::Common => "Vaak",
            FrequencyLevel::Average => "Gemiddeld",
            FrequencyLevel::Rare => "Zelden",
            FrequencyLevel::Unknown => "Onbekend",
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            FrequencyLevel::VeryCommon => "★★★★",
            FrequencyLevel::Common => "★★★",
            FrequencyLevel::Average => "★★",
            FrequencyLevel::Rare => "★",
            FrequencyLevel::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_rank() {
        assert_eq!(FrequencyLevel::from_rank(Some(1)), FrequencyLevel::VeryCommon);
        assert_eq!(FrequencyLevel::from_rank(Some(500)), FrequencyLevel::VeryCommon);
        assert_eq!(FrequencyLevel::from_rank(Some(501)), FrequencyLevel::Common);
        assert_eq!(FrequencyLevel::from_rank(Some(2999)), FrequencyLevel::Average);
        assert_eq!(FrequencyLevel::from_rank(Some(8000)), FrequencyLevel::Rare);
        assert_eq!(FrequencyLevel::from_rank(None), FrequencyLevel::Unknown);
        assert_eq!(FrequencyLevel::from_rank(Some(u32::MAX)), FrequencyLevel::Rare);
    }

    #[test]
    fn unknown_has_no_stars() {
        assert_eq!(FrequencyLevel::Unknown.stars(), "");
        assert_eq!(FrequencyLevel::Rare.label_nl(), "Zelden");
    }
}
