//! Tilawati recitation levels (jilid) and their assessment aspects.

use crate::progression_engine::models::{
    AspectDef, AspectId, JilidLevel, PageRange, SubCriterion,
};

pub const JILID_COUNT: u8 = 6;
pub const PAGES_PER_JILID: u16 = 44;

/// Maximum points of any aspect in a leveling exam.
pub const ASPECT_MAX: f64 = 10.0;

const TARTIL: [SubCriterion; 5] = [
    SubCriterion { id: "tajwid",     name: "Tajwid",     max: 2.0 },
    SubCriterion { id: "kalimat",    name: "Kalimat",    max: 2.0 },
    SubCriterion { id: "kelancaran", name: "Kelancaran", max: 4.0 },
    SubCriterion { id: "nafas",      name: "Nafas",      max: 1.0 },
    SubCriterion { id: "waqaf",      name: "Waqaf",      max: 1.0 },
];

const FASHOHAH: [SubCriterion; 3] = [
    SubCriterion { id: "makharijul_huruf", name: "Makharijul Huruf", max: 4.0 },
    SubCriterion { id: "sifatul_huruf",    name: "Sifatul Huruf",    max: 3.0 },
    SubCriterion { id: "harakat",          name: "Harakat",          max: 3.0 },
];

const TAJWID_DASAR: [SubCriterion; 4] = [
    SubCriterion { id: "nun_mati_tanwin", name: "Nun Mati/Tanwin", max: 3.0 },
    SubCriterion { id: "mim_mati",        name: "Mim Mati",        max: 2.0 },
    SubCriterion { id: "mad",             name: "Mad",             max: 3.0 },
    SubCriterion { id: "ghunnah",         name: "Ghunnah",         max: 2.0 },
];

const GHORIB: [SubCriterion; 2] = [
    SubCriterion { id: "bacaan_ghorib", name: "Bacaan Ghorib", max: 6.0 },
    SubCriterion { id: "musykilat",     name: "Musykilat",     max: 4.0 },
];

const ASPECTS_BASIC: [AspectId; 2] = [AspectId::Tartil, AspectId::Fashohah];
const ASPECTS_TAJWID: [AspectId; 3] = [AspectId::Tartil, AspectId::Fashohah, AspectId::TajwidDasar];

/// Definition (maximum and sub-criteria) of an aspect.
pub fn aspect(id: AspectId) -> AspectDef {
    let sub_criteria: &'static [SubCriterion] = match id {
        AspectId::Tartil      => &TARTIL,
        AspectId::Fashohah    => &FASHOHAH,
        AspectId::TajwidDasar => &TAJWID_DASAR,
        AspectId::Ghorib      => &GHORIB,
    };
    AspectDef { id, max: ASPECT_MAX, sub_criteria }
}

/// Aspects assessed at a jilid; grows cumulatively with the level.
pub fn jilid_aspects(number: u8) -> &'static [AspectId] {
    match number {
        1..=3 => &ASPECTS_BASIC,
        4 | 5 => &ASPECTS_TAJWID,
        _     => &AspectId::ALL,
    }
}

/// Table entry for one jilid, `None` outside 1..=6.
pub fn jilid(number: u8) -> Option<JilidLevel> {
    if !(1..=JILID_COUNT).contains(&number) {
        return None;
    }
    let start = (number as u16 - 1) * PAGES_PER_JILID + 1;
    Some(JilidLevel {
        number,
        pages: PageRange::new(start, start + PAGES_PER_JILID - 1),
        aspects: jilid_aspects(number),
    })
}

/// Jilid whose page range contains `page` (1..=264).
pub fn jilid_for_page(page: u16) -> Option<JilidLevel> {
    if page == 0 {
        return None;
    }
    jilid(((page - 1) / PAGES_PER_JILID + 1).min(u8::MAX as u16) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_criteria_sum_to_aspect_max() {
        for id in AspectId::ALL {
            let def = aspect(id);
            let sum: f64 = def.sub_criteria.iter().map(|s| s.max).sum();
            assert_eq!(sum, def.max, "{id} sub-criteria do not sum to its max");
        }
    }

    #[test]
    fn jilid_pages_tile_one_to_264() {
        assert_eq!(jilid(1).unwrap().pages, PageRange::new(1, 44));
        assert_eq!(jilid(6).unwrap().pages, PageRange::new(221, 264));
        assert!(jilid(0).is_none());
        assert!(jilid(7).is_none());
    }

    #[test]
    fn aspects_expand_with_level() {
        assert_eq!(jilid(3).unwrap().aspects, &[AspectId::Tartil, AspectId::Fashohah]);
        assert_eq!(jilid(5).unwrap().aspects.len(), 3);
        assert!(jilid(6).unwrap().aspects.contains(&AspectId::Ghorib));
    }

    #[test]
    fn page_lookup_uses_44_page_blocks() {
        assert_eq!(jilid_for_page(44).map(|j| j.number), Some(1));
        assert_eq!(jilid_for_page(45).map(|j| j.number), Some(2));
        assert_eq!(jilid_for_page(264).map(|j| j.number), Some(6));
        assert!(jilid_for_page(265).is_none());
        assert!(jilid_for_page(0).is_none());
    }
}
