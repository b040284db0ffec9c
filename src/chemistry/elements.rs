use crate::chemistry::category::Category;
use crate::chemistry::dataset::ELEMENTS;
use serde::Serialize;

pub const ELEMENT_COUNT: usize = 118;

pub const SHELL_NAMES: [&str; 7] = ["K", "L", "M", "N", "O", "P", "Q"];

// Gases at room temperature; everything else but Br and Hg is solid.
const GASES: [u8; 12] = [1, 2, 7, 8, 9, 10, 17, 18, 36, 54, 86, 118];
const LIQUIDS: [u8; 2] = [35, 80];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
        }
    }
}

/// Static reference data for one chemical element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementRecord {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_mass: f32,
    pub category: Category,
    /// `None` for the lanthanide and actinide blocks.
    pub group: Option<u8>,
    pub period: u8,
    pub valency: &'static str,
    /// Electrons per shell, K outwards.
    pub shells: &'static [u8],
    pub electron_configuration: &'static str,
}

impl ElementRecord {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: f32,
        category: Category,
        group: Option<u8>,
        period: u8,
        valency: &'static str,
        shells: &'static [u8],
        electron_configuration: &'static str,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            atomic_mass,
            category,
            group,
            period,
            valency,
            shells,
            electron_configuration,
        }
    }

    /// The dataset is stored in atomic-number order, so lookup is an index.
    pub fn by_atomic_number(z: u8) -> Option<&'static ElementRecord> {
        let index = usize::from(z).checked_sub(1)?;
        ELEMENTS.get(index)
    }

    pub fn by_symbol(symbol: &str) -> Option<&'static ElementRecord> {
        ELEMENTS
            .iter()
            .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn all() -> &'static [ElementRecord] {
        &ELEMENTS
    }

    pub fn electron_count(&self) -> u32 {
        self.shells.iter().map(|&count| u32::from(count)).sum()
    }

    pub fn group_label(&self) -> String {
        match self.group {
            Some(group) => group.to_string(),
            None => "n/a".to_owned(),
        }
    }

    /// State at room temperature.
    pub fn phase(&self) -> Phase {
        if LIQUIDS.contains(&self.atomic_number) {
            Phase::Liquid
        } else if GASES.contains(&self.atomic_number) {
            Phase::Gas
        } else {
            Phase::Solid
        }
    }

    /// Shell letters paired with their occupancy.
    pub fn labelled_shells(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        SHELL_NAMES.iter().copied().zip(self.shells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn phases_at_room_temperature() {
        let phase = |symbol| ElementRecord::by_symbol(symbol).unwrap().phase();
        assert_eq!(phase("Hg"), Phase::Liquid);
        assert_eq!(phase("Br"), Phase::Liquid);
        assert_eq!(phase("O"), Phase::Gas);
        assert_eq!(phase("Og"), Phase::Gas);
        assert_eq!(phase("Fe"), Phase::Solid);
        assert_eq!(phase("C"), Phase::Solid);
    }

    #[test]
    fn every_shell_gets_a_letter() {
        for element in ElementRecord::all() {
            assert!(element.shells.len() <= SHELL_NAMES.len(), "{}", element.name);
            assert_eq!(element.labelled_shells().count(), element.shells.len());
        }
        let sodium: Vec<_> = ElementRecord::by_atomic_number(11)
            .unwrap()
            .labelled_shells()
            .collect();
        assert_eq!(sodium, vec![("K", 2), ("L", 8), ("M", 1)]);
    }

    #[test]
    fn dataset_has_one_record_per_atomic_number() {
        let all = ElementRecord::all();
        assert_eq!(all.len(), ELEMENT_COUNT);
        for (index, element) in all.iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number), index + 1);
        }
    }

    #[test]
    fn symbols_and_names_are_unique() {
        let symbols: HashSet<_> = ElementRecord::all().iter().map(|e| e.symbol).collect();
        let names: HashSet<_> = ElementRecord::all().iter().map(|e| e.name).collect();
        assert_eq!(symbols.len(), ELEMENT_COUNT);
        assert_eq!(names.len(), ELEMENT_COUNT);
    }

    #[test]
    fn shell_occupancy_sums_to_atomic_number() {
        for element in ElementRecord::all() {
            assert_eq!(
                element.electron_count(),
                u32::from(element.atomic_number),
                "{} shells {:?}",
                element.symbol,
                element.shells
            );
        }
    }

    #[test]
    fn masses_increase_roughly_with_atomic_number() {
        for element in ElementRecord::all() {
            assert!(element.atomic_mass > 0.0);
            assert!(element.atomic_mass >= f32::from(element.atomic_number));
        }
    }

    #[test]
    fn f_block_has_no_group() {
        for element in ElementRecord::all() {
            let z = element.atomic_number;
            let f_block = (57..=71).contains(&z) || (89..=103).contains(&z);
            assert_eq!(element.group.is_none(), f_block, "{}", element.symbol);
            assert_eq!(
                f_block,
                matches!(element.category, Category::Lanthanide | Category::Actinide)
            );
            if let Some(group) = element.group {
                assert!((1..=18).contains(&group));
            }
            assert!((1..=7).contains(&element.period));
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(ElementRecord::by_atomic_number(0), None);
        assert_eq!(ElementRecord::by_atomic_number(119), None);
        assert_eq!(ElementRecord::by_atomic_number(26).map(|e| e.symbol), Some("Fe"));
        assert_eq!(ElementRecord::by_symbol("og").map(|e| e.atomic_number), Some(118));
        assert_eq!(ElementRecord::by_symbol("Xx"), None);
    }

    #[test]
    fn group_label_for_f_block() {
        let cerium = ElementRecord::by_atomic_number(58).unwrap();
        assert_eq!(cerium.group_label(), "n/a");
        let iron = ElementRecord::by_atomic_number(26).unwrap();
        assert_eq!(iron.group_label(), "8");
    }
}
