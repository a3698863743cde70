use super::*;
use pretty_assertions::assert_eq;

#[test]
fn all_is_in_ordinal_order() {
    for (index, production) in Production::ALL.iter().enumerate() {
        assert_eq!(usize::from(production.ordinal()), index);
        assert_eq!(Production::from_ordinal(production.ordinal()), Some(*production));
    }
    assert_eq!(Production::from_ordinal(66), None);
}

#[test]
fn alphabet_size_and_markers() {
    assert_eq!(Production::COUNT, 66);
    assert_eq!(Production::FIRST_OPTION_DEPENDENT as u8, 48);
    assert_eq!(Production::LAST_OPTION_DEPENDENT as u8, 65);
    assert_eq!(Production::ALTERNATE_OFFSET, 18);
}

#[test]
fn dependency_ranges() {
    let const_dependent: Vec<Production> = Production::ALL
        .into_iter()
        .filter(|p| p.dependency() == OptionDependency::ConstParameters)
        .collect();
    assert_eq!(
        const_dependent,
        vec![
            Production::FormalTypeList,
            Production::AttributedFormalType,
            Production::FormalParamList,
            Production::FormalParams,
        ]
    );

    let variant_dependent = Production::ALL
        .into_iter()
        .filter(|p| p.dependency() == OptionDependency::VariantRecords)
        .count();
    assert_eq!(variant_dependent, 14);

    assert!(!Production::Statement.is_option_dependent());
    assert!(!Production::FormalType.is_option_dependent());
    assert!(Production::FormalParams.is_option_dependent());
    assert!(Production::Type.is_option_dependent());
    assert!(Production::Variant.is_option_dependent());
}

#[test]
fn dependent_rules_are_contiguous() {
    let first = usize::from(Production::FIRST_OPTION_DEPENDENT.ordinal());
    for production in Production::ALL {
        let index = usize::from(production.ordinal());
        assert_eq!(production.is_option_dependent(), index >= first, "{production:?}");
    }
}

#[test]
fn names_are_unique_rule_names() {
    let mut names: Vec<&str> = Production::ALL.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Production::COUNT);

    assert_eq!(Production::DefinitionModule.name(), "definitionModule");
    assert_eq!(Production::AssignmentOrProcCall.name(), "assignmentOrProcCall");
    assert_eq!(Production::Variant.to_string(), "variant");
}

#[test]
fn from_name_lookup() {
    for production in Production::ALL {
        assert_eq!(Production::from_name(production.name()), Some(production));
    }
    assert_eq!(Production::from_name("Statement"), None);
    assert_eq!(Production::from_name("nonsense"), None);
}
