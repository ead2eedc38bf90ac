use super::{ProviderCategory, SubstationCatalog};
use crate::model::registration::SubstationChoice;

/// Category, catalog and district/taluka/substation selection of one form.
///
/// Option lists are computed from the catalog and the current selection each
/// time they are asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstationCascade {
    category: Option<ProviderCategory>,
    catalog: Option<SubstationCatalog>,
    selection: SubstationChoice,
}

impl SubstationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<ProviderCategory> {
        self.category
    }

    pub fn catalog(&self) -> Option<&SubstationCatalog> {
        self.catalog.as_ref()
    }

    pub fn selection(&self) -> &SubstationChoice {
        &self.selection
    }

    /// Switches category and forgets the catalog and every selection.
    ///
    /// Returns whether a catalog fetch is needed, i.e. a category is selected.
    pub fn select_category(&mut self, category: Option<ProviderCategory>) -> bool {
        log::debug!("substation category -> {:?}", category);
        self.category = category;
        self.catalog = None;
        self.selection = SubstationChoice::default();
        category.is_some()
    }

    /// Whether a response fetched for `category` still matches the selection.
    pub fn is_current(&self, category: ProviderCategory) -> bool {
        self.category == Some(category)
    }

    /// Installs a fetched catalog. A catalog for another category than the
    /// current one is a late response and is dropped.
    pub fn load_catalog(&mut self, catalog: SubstationCatalog) -> bool {
        if !self.is_current(catalog.category()) {
            log::debug!("dropping stale {} catalog", catalog.category());
            return false;
        }
        self.catalog = Some(catalog);
        true
    }

    pub fn select_district(&mut self, district: &str) {
        self.selection = SubstationChoice {
            district: district.to_string(),
            ..SubstationChoice::default()
        };
    }

    /// Only meaningful for the taluka-granular category; ignored otherwise.
    pub fn select_taluka(&mut self, taluka: &str) {
        if !self.category.is_some_and(ProviderCategory::has_talukas) {
            log::debug!("taluka selection ignored for {:?}", self.category);
            return;
        }
        self.selection.taluka = taluka.to_string();
        self.selection.substation.clear();
    }

    pub fn select_substation(&mut self, substation: &str) {
        self.selection.substation = substation.to_string();
    }

    pub fn districts(&self) -> Vec<String> {
        self.catalog
            .as_ref()
            .map(SubstationCatalog::districts)
            .unwrap_or_default()
    }

    pub fn talukas(&self) -> Vec<String> {
        match &self.catalog {
            Some(catalog) if !self.selection.district.is_empty() => {
                catalog.talukas(&self.selection.district)
            }
            _ => Vec::new(),
        }
    }

    /// Substations offered for the current selection: per district for the
    /// category without talukas, per taluka otherwise.
    pub fn substations(&self) -> Vec<String> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        let selection = &self.selection;
        if selection.district.is_empty() {
            return Vec::new();
        }
        if catalog.category().has_talukas() {
            if selection.taluka.is_empty() {
                Vec::new()
            } else {
                catalog.substations_in_taluka(&selection.district, &selection.taluka)
            }
        } else {
            catalog.substations_in_district(&selection.district)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{msedcl, msetcl};

    fn loaded(category: ProviderCategory) -> SubstationCascade {
        let mut cascade = SubstationCascade::new();
        assert!(cascade.select_category(Some(category)));
        let catalog = match category {
            ProviderCategory::Msedcl => msedcl(),
            ProviderCategory::Msetcl => msetcl(),
        };
        assert!(cascade.load_catalog(catalog));
        cascade
    }

    #[test]
    fn taluka_category_waits_for_a_taluka() {
        let mut cascade = loaded(ProviderCategory::Msedcl);
        cascade.select_district("Pune");
        assert_eq!(cascade.talukas(), ["Haveli", "Maval"]);
        assert!(cascade.substations().is_empty());

        cascade.select_taluka("Maval");
        assert_eq!(cascade.substations(), ["Talegaon"]);
    }

    #[test]
    fn other_category_lists_substations_per_district() {
        let mut cascade = loaded(ProviderCategory::Msetcl);
        cascade.select_district("Satara");
        assert!(cascade.talukas().is_empty());
        assert_eq!(cascade.substations(), ["Koyna", "Karad"]);

        cascade.select_taluka("Anything");
        assert_eq!(cascade.selection().taluka, "");
    }

    #[test]
    fn selecting_a_district_resets_the_lower_levels() {
        let mut cascade = loaded(ProviderCategory::Msedcl);
        cascade.select_district("Pune");
        cascade.select_taluka("Haveli");
        cascade.select_substation("Loni");

        cascade.select_district("Nashik");
        assert_eq!(
            cascade.selection(),
            &SubstationChoice {
                district: "Nashik".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn changing_category_clears_everything() {
        let mut cascade = loaded(ProviderCategory::Msedcl);
        cascade.select_district("Pune");

        assert!(!cascade.select_category(None));
        assert!(cascade.catalog().is_none());
        assert!(cascade.districts().is_empty());
        assert_eq!(cascade.selection(), &SubstationChoice::default());
    }

    #[test]
    fn late_catalogs_for_another_category_are_dropped() {
        let mut cascade = SubstationCascade::new();
        cascade.select_category(Some(ProviderCategory::Msetcl));
        assert!(!cascade.load_catalog(msedcl()));
        assert!(cascade.catalog().is_none());
    }

    #[test]
    fn only_the_selected_category_is_current() {
        let mut cascade = SubstationCascade::new();
        assert!(!cascade.is_current(ProviderCategory::Msedcl));

        cascade.select_category(Some(ProviderCategory::Msedcl));
        cascade.select_category(Some(ProviderCategory::Msetcl));
        assert!(!cascade.is_current(ProviderCategory::Msedcl));
        assert!(cascade.is_current(ProviderCategory::Msetcl));

        cascade.select_category(None);
        assert!(!cascade.is_current(ProviderCategory::Msetcl));
    }
}
