//! Grammar rule alphabet for the Modula-2 parser.
//!
//! The order of `Production` is load-bearing: FIRST/FOLLOW tables are
//! indexed by ordinal, and the option-dependent rules form a contiguous tail
//! whose alternate rows are stored `ALTERNATE_OFFSET` rows past their
//! canonical rows.

use std::fmt;

/// Which dialect option, if any, a rule's FIRST/FOLLOW sets depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionDependency {
    /// Sets are the same in every dialect.
    Independent,
    /// Sets differ when formal parameters may be declared `CONST`.
    ConstParameters,
    /// Sets differ between variant records and extensible records.
    VariantRecords,
}

/// A grammar non-terminal recognized by the recursive-descent parser.
///
/// # Layout
///
/// | Range | Category                     |
/// |-------|------------------------------|
/// | 0-47  | Option-independent rules     |
/// | 48-51 | Const-parameter dependent    |
/// | 52-65 | Variant-record dependent     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Production {
    // === Option-independent rules (0-47) ===
    DefinitionModule = 0,
    Import = 1,
    QualifiedImport = 2,
    UnqualifiedImport = 3,
    IdentList = 4,
    Definition = 5,
    ConstDefinition = 6,
    ConstExpression = 7,
    TypeDefinition = 8,
    Qualident = 9,
    FormalType = 10,
    ProcedureHeader = 11,
    FormalParameters = 12,
    ImplementationModule = 13,
    ProgramModule = 14,
    ModulePriority = 15,
    Block = 16,
    Declaration = 17,
    TypeDeclaration = 18,
    VariableDeclaration = 19,
    ProcedureDeclaration = 20,
    ModuleDeclaration = 21,
    Export = 22,
    StatementSequence = 23,
    Statement = 24,
    AssignmentOrProcCall = 25,
    ActualParameters = 26,
    ExpressionList = 27,
    ReturnStatement = 28,
    WithStatement = 29,
    IfStatement = 30,
    CaseStatement = 31,
    Case = 32,
    CaseLabelList = 33,
    CaseLabels = 34,
    LoopStatement = 35,
    WhileStatement = 36,
    RepeatStatement = 37,
    ForStatement = 38,
    Designator = 39,
    Selector = 40,
    Expression = 41,
    SimpleExpression = 42,
    Term = 43,
    Factor = 44,
    DesignatorOrFuncCall = 45,
    SetValue = 46,
    Element = 47,

    // === Const-parameter dependent (48-51) ===
    FormalTypeList = 48,
    AttributedFormalType = 49,
    FormalParamList = 50,
    FormalParams = 51,

    // === Variant-record dependent (52-65) ===
    Type = 52,
    DerivedOrSubrangeType = 53,
    SubrangeType = 54,
    EnumType = 55,
    SetType = 56,
    CountableType = 57,
    ArrayType = 58,
    RecordType = 59,
    PointerType = 60,
    ProcedureType = 61,
    FieldListSequence = 62,
    FieldList = 63,
    VariantFieldList = 64,
    Variant = 65,
}

impl Production {
    /// Number of productions.
    pub const COUNT: usize = Self::Variant as usize + 1;

    /// Every production in ordinal order.
    pub const ALL: [Production; Self::COUNT] = [
        Self::DefinitionModule,
        Self::Import,
        Self::QualifiedImport,
        Self::UnqualifiedImport,
        Self::IdentList,
        Self::Definition,
        Self::ConstDefinition,
        Self::ConstExpression,
        Self::TypeDefinition,
        Self::Qualident,
        Self::FormalType,
        Self::ProcedureHeader,
        Self::FormalParameters,
        Self::ImplementationModule,
        Self::ProgramModule,
        Self::ModulePriority,
        Self::Block,
        Self::Declaration,
        Self::TypeDeclaration,
        Self::VariableDeclaration,
        Self::ProcedureDeclaration,
        Self::ModuleDeclaration,
        Self::Export,
        Self::StatementSequence,
        Self::Statement,
        Self::AssignmentOrProcCall,
        Self::ActualParameters,
        Self::ExpressionList,
        Self::ReturnStatement,
        Self::WithStatement,
        Self::IfStatement,
        Self::CaseStatement,
        Self::Case,
        Self::CaseLabelList,
        Self::CaseLabels,
        Self::LoopStatement,
        Self::WhileStatement,
        Self::RepeatStatement,
        Self::ForStatement,
        Self::Designator,
        Self::Selector,
        Self::Expression,
        Self::SimpleExpression,
        Self::Term,
        Self::Factor,
        Self::DesignatorOrFuncCall,
        Self::SetValue,
        Self::Element,
        Self::FormalTypeList,
        Self::AttributedFormalType,
        Self::FormalParamList,
        Self::FormalParams,
        Self::Type,
        Self::DerivedOrSubrangeType,
        Self::SubrangeType,
        Self::EnumType,
        Self::SetType,
        Self::CountableType,
        Self::ArrayType,
        Self::RecordType,
        Self::PointerType,
        Self::ProcedureType,
        Self::FieldListSequence,
        Self::FieldList,
        Self::VariantFieldList,
        Self::Variant,
    ];

    /// First rule whose sets depend on a dialect option.
    pub const FIRST_OPTION_DEPENDENT: Production = Self::FormalTypeList;

    /// Last rule whose sets depend on a dialect option.
    pub const LAST_OPTION_DEPENDENT: Production = Self::Variant;

    /// Distance from a canonical row to its alternate row.
    pub const ALTERNATE_OFFSET: usize =
        Self::LAST_OPTION_DEPENDENT as usize - Self::FIRST_OPTION_DEPENDENT as usize + 1;

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a production by ordinal.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Production> {
        if ordinal as usize >= Self::COUNT {
            return None;
        }
        Some(Self::ALL[ordinal as usize])
    }

    /// Which dialect option this rule's sets depend on.
    pub const fn dependency(self) -> OptionDependency {
        match self {
            Self::FormalTypeList
            | Self::AttributedFormalType
            | Self::FormalParamList
            | Self::FormalParams => OptionDependency::ConstParameters,
            Self::Type
            | Self::DerivedOrSubrangeType
            | Self::SubrangeType
            | Self::EnumType
            | Self::SetType
            | Self::CountableType
            | Self::ArrayType
            | Self::RecordType
            | Self::PointerType
            | Self::ProcedureType
            | Self::FieldListSequence
            | Self::FieldList
            | Self::VariantFieldList
            | Self::Variant => OptionDependency::VariantRecords,
            _ => OptionDependency::Independent,
        }
    }

    /// Whether this rule has an alternate FIRST/FOLLOW row.
    #[inline]
    pub const fn is_option_dependent(self) -> bool {
        !matches!(self.dependency(), OptionDependency::Independent)
    }

    /// Rule name as written in the grammar, e.g. `"statementSequence"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DefinitionModule => "definitionModule",
            Self::Import => "import",
            Self::QualifiedImport => "qualifiedImport",
            Self::UnqualifiedImport => "unqualifiedImport",
            Self::IdentList => "identList",
            Self::Definition => "definition",
            Self::ConstDefinition => "constDefinition",
            Self::ConstExpression => "constExpression",
            Self::TypeDefinition => "typeDefinition",
            Self::Qualident => "qualident",
            Self::FormalType => "formalType",
            Self::ProcedureHeader => "procedureHeader",
            Self::FormalParameters => "formalParameters",
            Self::ImplementationModule => "implementationModule",
            Self::ProgramModule => "programModule",
            Self::ModulePriority => "modulePriority",
            Self::Block => "block",
            Self::Declaration => "declaration",
            Self::TypeDeclaration => "typeDeclaration",
            Self::VariableDeclaration => "variableDeclaration",
            Self::ProcedureDeclaration => "procedureDeclaration",
            Self::ModuleDeclaration => "moduleDeclaration",
            Self::Export => "export",
            Self::StatementSequence => "statementSequence",
            Self::Statement => "statement",
            Self::AssignmentOrProcCall => "assignmentOrProcCall",
            Self::ActualParameters => "actualParameters",
            Self::ExpressionList => "expressionList",
            Self::ReturnStatement => "returnStatement",
            Self::WithStatement => "withStatement",
            Self::IfStatement => "ifStatement",
            Self::CaseStatement => "caseStatement",
            Self::Case => "case",
            Self::CaseLabelList => "caseLabelList",
            Self::CaseLabels => "caseLabels",
            Self::LoopStatement => "loopStatement",
            Self::WhileStatement => "whileStatement",
            Self::RepeatStatement => "repeatStatement",
            Self::ForStatement => "forStatement",
            Self::Designator => "designator",
            Self::Selector => "selector",
            Self::Expression => "expression",
            Self::SimpleExpression => "simpleExpression",
            Self::Term => "term",
            Self::Factor => "factor",
            Self::DesignatorOrFuncCall => "designatorOrFuncCall",
            Self::SetValue => "setValue",
            Self::Element => "element",
            Self::FormalTypeList => "formalTypeList",
            Self::AttributedFormalType => "attributedFormalType",
            Self::FormalParamList => "formalParamList",
            Self::FormalParams => "formalParams",
            Self::Type => "type",
            Self::DerivedOrSubrangeType => "derivedOrSubrangeType",
            Self::SubrangeType => "subrangeType",
            Self::EnumType => "enumType",
            Self::SetType => "setType",
            Self::CountableType => "countableType",
            Self::ArrayType => "arrayType",
            Self::RecordType => "recordType",
            Self::PointerType => "pointerType",
            Self::ProcedureType => "procedureType",
            Self::FieldListSequence => "fieldListSequence",
            Self::FieldList => "fieldList",
            Self::VariantFieldList => "variantFieldList",
            Self::Variant => "variant",
        }
    }

    /// Look up a production by its grammar rule name.
    pub fn from_name(name: &str) -> Option<Production> {
        Self::ALL.iter().copied().find(|production| production.name() == name)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Compile-time check that the explicit dependency classification matches the
// recorded markers: dependent rules form the tail of the alphabet, const
// dependent rules first.
const _: () = {
    let mut index = 0;
    let first = Production::FIRST_OPTION_DEPENDENT as usize;
    let mut seen_variant = false;
    while index < Production::COUNT {
        let production = Production::ALL[index];
        assert!(production as usize == index, "Production::ALL out of order");
        match production.dependency() {
            OptionDependency::Independent => {
                assert!(index < first, "independent rule inside option-dependent range");
            }
            OptionDependency::ConstParameters => {
                assert!(index >= first, "const-parameter rule before FIRST_OPTION_DEPENDENT");
                assert!(!seen_variant, "const-parameter rule after variant-record range");
            }
            OptionDependency::VariantRecords => {
                assert!(index >= first, "variant-record rule before FIRST_OPTION_DEPENDENT");
                seen_variant = true;
            }
        }
        index += 1;
    }
    assert!(
        Production::LAST_OPTION_DEPENDENT as usize == Production::COUNT - 1,
        "option-dependent rules must end the alphabet"
    );
};

#[cfg(test)]
mod tests;
